//! Get command arguments

use clap::Parser;

use super::common::{KindArg, OutputFormat};

/// Arguments for the 'get' command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        armpager get lgw                          # all groups\n  \
        armpager get lgw -g rg-net                # one group\n  \
        armpager get acr -f prod --limit 10 -o json\n  \
        armpager get acr myregistry -g rg-ci      # single resource\n  \
        armpager get acr /subscriptions/<sub>/resourceGroups/rg-ci/providers/Microsoft.ContainerRegistry/registries/myregistry")]
pub struct GetArgs {
    /// Resource kind
    #[arg(value_enum)]
    pub kind: KindArg,

    /// Resource name (requires --group) or full resource ID
    ///
    ///   name     Fetch one resource from --group
    ///   /subs..  Fetch one resource by its ARM ID
    ///   omitted  List resources
    #[arg(verbatim_doc_comment)]
    pub target: Option<String>,

    /// Resource group (lists only this group when no target is given)
    #[arg(short = 'g', long)]
    pub group: Option<String>,

    /// Filter resources by name (substring match)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Stop fetching once this many resources were collected
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub limit: Option<u64>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
