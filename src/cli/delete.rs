//! Delete command arguments

use clap::Parser;

use super::common::KindArg;

/// Arguments for the 'delete' command
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Resource kind
    #[arg(value_enum)]
    pub kind: KindArg,

    /// Resource name (requires --group) or full resource ID
    pub target: String,

    /// Resource group of the resource
    #[arg(short = 'g', long)]
    pub group: Option<String>,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}
