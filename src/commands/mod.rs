//! Command handlers for the armpager binary

mod delete;
mod get;

use log::debug;

use crate::arm::{
    ArmClient, EndpointResolver, LocalNetworkGateways, Registries, SubscriptionResolver,
    TokenResolver,
};
use crate::cli::{Cli, Command, KindArg};
use crate::context::{resolve_active_context, run_context_command, ContextStore};
use crate::error::Result;

pub use delete::run_delete_command;
pub use get::run_get_command;

/// Build a client from CLI flags, environment and the active context
pub fn connect(cli: &Cli) -> Result<ArmClient> {
    let store = ContextStore::new();
    let context = resolve_active_context(&store, cli.context.as_deref())?.map(|(_, ctx)| ctx);
    let context = context.as_ref();

    let token = TokenResolver::new().resolve(
        cli.token.as_deref(),
        context.and_then(|c| c.token.as_deref()),
    )?;
    let subscription = SubscriptionResolver::new().resolve(
        cli.subscription.as_deref(),
        context.map(|c| c.subscription.as_str()),
    )?;
    let endpoint = EndpointResolver::new().resolve(
        cli.endpoint.as_deref(),
        context.and_then(|c| c.endpoint.as_deref()),
    );

    debug!("Connecting to {} (subscription {})", endpoint, subscription);
    Ok(ArmClient::new(token, endpoint, subscription))
}

/// Run the parsed command line
pub async fn run(cli: &Cli) -> std::result::Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        Command::Config { action } => run_context_command(action)?,
        Command::Get(args) => {
            let client = connect(cli)?;
            match args.kind {
                KindArg::LocalNetworkGateways => {
                    run_get_command::<LocalNetworkGateways>(&client, cli, args).await?
                }
                KindArg::Registries => run_get_command::<Registries>(&client, cli, args).await?,
            }
        }
        Command::Delete(args) => {
            let client = connect(cli)?;
            match args.kind {
                KindArg::LocalNetworkGateways => {
                    run_delete_command::<LocalNetworkGateways>(&client, cli, args).await?
                }
                KindArg::Registries => {
                    run_delete_command::<Registries>(&client, cli, args).await?
                }
            }
        }
    }
    Ok(())
}
