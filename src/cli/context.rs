//! Config management CLI arguments (kubectl-style)

use clap::{Parser, Subcommand};

/// Config subcommands for managing connection contexts
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Set a context entry in the config file
    #[command(name = "set-context")]
    SetContext(SetContextArgs),

    /// Set the current-context in the config file
    #[command(name = "use-context")]
    UseContext(ContextNameArgs),

    /// List all contexts
    #[command(name = "get-contexts")]
    GetContexts,

    /// Display the current-context
    #[command(name = "current-context")]
    CurrentContext,

    /// Delete the specified context from the config file
    #[command(name = "delete-context")]
    DeleteContext(ContextNameArgs),
}

/// Arguments for 'config set-context' subcommand
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        armpager config set-context prod --subscription 00000000-0000-0000-0000-000000000000\n  \
        armpager config set-context gov --subscription <ID> --endpoint management.usgovcloudapi.net\n  \
        armpager config set-context prod --token <TOKEN>   # update existing context")]
pub struct SetContextArgs {
    /// Context name
    pub name: String,
    /// Subscription ID (required for a new context)
    #[arg(long)]
    pub subscription: Option<String>,
    /// ARM endpoint host or URL
    #[arg(long)]
    pub endpoint: Option<String>,
    /// Bearer token (stored in config file)
    #[arg(long)]
    pub token: Option<String>,
}

/// Context name argument
#[derive(Parser, Debug)]
pub struct ContextNameArgs {
    /// Context name
    pub name: String,
}
