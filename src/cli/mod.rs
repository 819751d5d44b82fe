//! CLI argument parsing

mod common;
mod context;
mod delete;
mod get;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use common::{KindArg, OutputFormat};
pub use context::{ConfigAction, ContextNameArgs, SetContextArgs};
pub use delete::DeleteArgs;
pub use get::GetArgs;

/// Lazily paginated listings of Azure Resource Manager resources
#[derive(Parser, Debug)]
#[command(name = "armpager")]
#[command(version)]
#[command(
    about = "List, get and delete Azure resources across all resource groups",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// ARM endpoint host or URL (overrides ARM_ENDPOINT and context)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Subscription ID (overrides env vars and context)
    #[arg(short = 's', long, global = true)]
    pub subscription: Option<String>,

    /// Bearer token (overrides env vars and context)
    #[arg(short = 't', long, global = true)]
    pub token: Option<String>,

    /// Context to use (overrides ARMPAGER_CONTEXT and current-context)
    #[arg(long, global = true)]
    pub context: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no spinner, no interactive prompts
    #[arg(short = 'b', long, global = true, default_value_t = false)]
    pub batch: bool,

    /// Omit table and CSV headers
    #[arg(long, global = true, default_value_t = false)]
    pub no_header: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List resources, or show one by name or ID
    Get(GetArgs),

    /// Delete one resource by name or ID
    Delete(DeleteArgs),

    /// Manage connection contexts
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}
