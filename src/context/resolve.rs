//! Active context resolution

use log::debug;

use crate::config::context as context_config;
use crate::error::{ArmError, Result};

use super::models::Context;
use super::store::ContextStore;

/// Resolve the active context from multiple sources:
/// 1. --context CLI flag
/// 2. ARMPAGER_CONTEXT env var
/// 3. current-context from config file
///
/// `Ok(None)` when no source names a context. A named context missing from
/// the file is an error.
pub fn resolve_active_context(
    store: &ContextStore,
    cli_context: Option<&str>,
) -> Result<Option<(String, Context)>> {
    let env_context = std::env::var(context_config::ENV_VAR)
        .ok()
        .filter(|v| !v.is_empty());
    resolve_from(store, cli_context, env_context)
}

fn resolve_from(
    store: &ContextStore,
    cli_context: Option<&str>,
    env_context: Option<String>,
) -> Result<Option<(String, Context)>> {
    let config = store.load()?;

    let name = if let Some(name) = cli_context {
        debug!("Using context from CLI flag: {}", name);
        name.to_string()
    } else if let Some(name) = env_context {
        debug!(
            "Using context from {} env var: {}",
            context_config::ENV_VAR,
            name
        );
        name
    } else if let Some(name) = config.current_context.clone() {
        debug!("Using context from config file: {}", name);
        name
    } else {
        debug!("No active context");
        return Ok(None);
    };

    match config.contexts.get(&name) {
        Some(ctx) => {
            debug!("Resolved context '{}': subscription={}", name, ctx.subscription);
            Ok(Some((name, ctx.clone())))
        }
        None => Err(ArmError::Config(format!(
            "Context '{}' not found in {}. Available contexts: {}",
            name,
            store.path().display(),
            config.names()
        ))),
    }
}
