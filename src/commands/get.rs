//! Get command: list via the async stream, or fetch one resource

use futures::StreamExt;
use log::{debug, info, warn};
use serde::Serialize;

use crate::arm::{ArmClient, ArmResource, KindSource, ResourceGroupSource, ResourceKind};
use crate::cli::{Cli, GetArgs};
use crate::error::ArmError;
use crate::output::{output_resources, Tabular};
use crate::resources::GroupedResources;
use crate::ui::{clear_spinner, create_spinner, finish_spinner, update_spinner};

type Resources<K> = GroupedResources<ResourceGroupSource, KindSource<K>>;

/// Check if a name matches the filter (substring match)
fn matches_filter(name: &str, filter: Option<&str>) -> bool {
    filter.map_or(true, |f| name.contains(f))
}

/// Run the get command for resource kind `K`
pub async fn run_get_command<K>(
    client: &ArmClient,
    cli: &Cli,
    args: &GetArgs,
) -> Result<(), Box<dyn std::error::Error>>
where
    K: ResourceKind,
    K::Model: Tabular + Serialize,
{
    let resources = client.resources::<K>();
    match &args.target {
        Some(target) => get_one(&resources, cli, args, target).await,
        None => list(&resources, cli, args).await,
    }
}

async fn list<K>(
    resources: &Resources<K>,
    cli: &Cli,
    args: &GetArgs,
) -> Result<(), Box<dyn std::error::Error>>
where
    K: ResourceKind,
    K::Model: Tabular + Serialize,
{
    let scope = match &args.group {
        Some(group) => format!("resource group '{}'", group),
        None => "all resource groups".to_string(),
    };
    let spinner = create_spinner(&format!("Fetching {}s from {}...", K::LABEL, scope), cli.batch);

    let mut stream = match &args.group {
        Some(group) => resources.list_by_group(group),
        None => resources.list(),
    };
    let limit = args.limit.map(|l| l as usize);

    let mut found = Vec::new();
    while let Some(next) = stream.next().await {
        let resource = match next {
            Ok(resource) => resource,
            Err(e) => {
                clear_spinner(spinner);
                return Err(e.into());
            }
        };

        if !matches_filter(resource.name(), args.filter.as_deref()) {
            continue;
        }
        found.push(resource.into_inner());
        update_spinner(&spinner, format!("Fetched {} {}(s)...", found.len(), K::LABEL));

        if limit.is_some_and(|l| found.len() >= l) {
            debug!("Limit of {} reached, cancelling enumeration", found.len());
            stream.cancel();
            break;
        }
    }

    finish_spinner(spinner, &format!("Found {} {}(s)", found.len(), K::LABEL));
    output_resources(&found, args.output, cli.no_header)?;
    info!("Listed {} {}(s) from {}", found.len(), K::LABEL, scope);
    Ok(())
}

async fn get_one<K>(
    resources: &Resources<K>,
    cli: &Cli,
    args: &GetArgs,
    target: &str,
) -> Result<(), Box<dyn std::error::Error>>
where
    K: ResourceKind,
    K::Model: Tabular + Serialize,
{
    if args.filter.is_some() || args.limit.is_some() {
        warn!("--filter and --limit are ignored when getting a single resource");
    }

    let spinner = create_spinner(&format!("Fetching {} '{}'...", K::LABEL, target), cli.batch);
    let found = if target.starts_with('/') {
        if args.group.is_some() {
            warn!("--group is ignored when the target is a resource ID");
        }
        resources.get_by_id(target).await
    } else {
        match args.group.as_deref() {
            Some(group) => resources.get_by_group(group, target).await,
            None => Err(ArmError::InvalidArgument(format!(
                "--group is required to get {} '{}' by name (or pass its full resource ID)",
                K::LABEL,
                target
            ))),
        }
    };
    clear_spinner(spinner);

    match found? {
        Some(resource) => {
            output_resources(&[resource.into_inner()], args.output, cli.no_header)?;
            info!("Fetched {} '{}'", K::LABEL, target);
            Ok(())
        }
        None => Err(format!("{} '{}' not found", K::LABEL, target).into()),
    }
}
