//! Delete command

use log::info;

use crate::arm::{ArmClient, ResourceKind};
use crate::cli::{Cli, DeleteArgs};
use crate::error::{ArmError, Result};
use crate::resources::parse_id;
use crate::ui::{confirm_action, create_spinner, finish_spinner};

/// What a delete target resolves to before anything is sent
#[derive(Debug, PartialEq, Eq)]
enum Target {
    Id { id: String, group: String, name: String },
    Name { group: String, name: String },
}

impl Target {
    /// Resolve the target, rejecting IDs of another kind or subscription
    /// before anything is asked or sent
    fn resolve<K: ResourceKind>(args: &DeleteArgs, subscription: &str) -> Result<Self> {
        if args.target.starts_with('/') {
            let id = parse_id(&args.target, K::PROVIDER, Some(subscription))?;
            return Ok(Target::Id {
                id: args.target.clone(),
                group: id.resource_group,
                name: id.name,
            });
        }

        let group = args.group.clone().ok_or_else(|| {
            ArmError::InvalidArgument(format!(
                "--group is required to delete {} '{}' by name (or pass its full resource ID)",
                K::LABEL,
                args.target
            ))
        })?;
        Ok(Target::Name {
            group,
            name: args.target.clone(),
        })
    }

    fn describe(&self, label: &str) -> String {
        let (Target::Id { group, name, .. } | Target::Name { group, name }) = self;
        format!("{} '{}' in resource group '{}'", label, name, group)
    }
}

/// Run the delete command for resource kind `K`
pub async fn run_delete_command<K: ResourceKind>(
    client: &ArmClient,
    cli: &Cli,
    args: &DeleteArgs,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let target = Target::resolve::<K>(args, client.subscription())?;
    let description = target.describe(K::LABEL);

    if !confirm_action(&format!("Delete {}?", description), args.yes, cli.batch)? {
        println!("Aborted.");
        return Ok(());
    }

    let resources = client.resources::<K>();
    let spinner = create_spinner(&format!("Deleting {}...", description), cli.batch);
    let deleted = match &target {
        Target::Id { id, .. } => resources.delete_by_id(id).await,
        Target::Name { group, name } => resources.delete_by_group(group, name).await,
    };

    match deleted {
        Ok(true) => {
            finish_spinner(spinner, &format!("✓ Deleted {}", description));
            info!("Deleted {}", description);
        }
        Ok(false) => {
            finish_spinner(spinner, &format!("{} was already absent", description));
            info!("{} was already absent", description);
        }
        Err(e) => {
            finish_spinner(spinner, "Delete failed");
            return Err(e.into());
        }
    }
    Ok(())
}
