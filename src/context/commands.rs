//! Context command handlers

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};

use crate::cli::{ConfigAction, SetContextArgs};
use crate::config::api;
use crate::error::{ArmError, Result};

use super::models::Context;
use super::store::ContextStore;

/// Dispatch context subcommands
pub fn run_context_command(action: &ConfigAction) -> Result<()> {
    let store = ContextStore::new();
    match action {
        ConfigAction::GetContexts => run_context_list(&store),
        ConfigAction::SetContext(args) => run_context_set(&store, args).map(|msg| println!("{}", msg)),
        ConfigAction::UseContext(args) => {
            run_context_use(&store, &args.name).map(|msg| println!("{}", msg))
        }
        ConfigAction::DeleteContext(args) => {
            run_context_delete(&store, &args.name).map(|msg| println!("{}", msg))
        }
        ConfigAction::CurrentContext => run_context_show(&store),
    }
}

fn run_context_list(store: &ContextStore) -> Result<()> {
    let config = store.load()?;

    if config.contexts.is_empty() {
        println!("No contexts configured.");
        println!("\nUse 'armpager config set-context <name> --subscription <id>' to create one.");
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("CURRENT"),
            Cell::new("NAME"),
            Cell::new("SUBSCRIPTION"),
            Cell::new("ENDPOINT"),
            Cell::new("TOKEN"),
        ]);

    for (name, ctx) in &config.contexts {
        let is_current = config.current_context.as_deref() == Some(name.as_str());
        table.add_row(vec![
            Cell::new(if is_current { "*" } else { "" }),
            Cell::new(name),
            Cell::new(&ctx.subscription),
            Cell::new(ctx.endpoint.as_deref().unwrap_or(api::DEFAULT_ENDPOINT)),
            Cell::new(mask_token(ctx.token.as_deref())),
        ]);
    }

    println!("{table}");
    Ok(())
}

fn run_context_show(store: &ContextStore) -> Result<()> {
    let config = store.load()?;

    let name = config.current_context.as_deref().ok_or_else(|| {
        ArmError::Config(
            "No current context set. Use 'armpager config use-context <name>' to set one."
                .to_string(),
        )
    })?;

    let ctx = config.contexts.get(name).ok_or_else(|| {
        ArmError::Config(format!(
            "Current context '{}' not found in config. Available: {}",
            name,
            config.names()
        ))
    })?;

    println!("Current context: {}", name);
    println!("  Subscription: {}", ctx.subscription);
    println!(
        "  Endpoint:     {}",
        ctx.endpoint.as_deref().unwrap_or(api::DEFAULT_ENDPOINT)
    );
    println!("  Token:        {}", mask_token(ctx.token.as_deref()));
    Ok(())
}

/// Create or update a named context; provided fields overwrite stored ones
fn run_context_set(store: &ContextStore, args: &SetContextArgs) -> Result<String> {
    let mut config = store.load()?;

    if let Some(existing) = config.contexts.get_mut(&args.name) {
        if let Some(sub) = &args.subscription {
            existing.subscription = sub.clone();
        }
        if args.endpoint.is_some() {
            existing.endpoint = args.endpoint.clone();
        }
        if args.token.is_some() {
            existing.token = args.token.clone();
        }
        store.save(&config)?;
        return Ok(format!("✓ Updated context '{}'", args.name));
    }

    let subscription = args.subscription.clone().ok_or_else(|| {
        ArmError::Config(format!(
            "--subscription is required when creating a new context. Usage:\n  \
             armpager config set-context {} --subscription <ID> [--endpoint <URL>] [--token <TOKEN>]",
            args.name
        ))
    })?;

    config.contexts.insert(
        args.name.clone(),
        Context {
            subscription,
            endpoint: args.endpoint.clone(),
            token: args.token.clone(),
        },
    );

    // first context becomes current
    if config.contexts.len() == 1 {
        config.current_context = Some(args.name.clone());
    }

    store.save(&config)?;
    Ok(format!("✓ Created context '{}'", args.name))
}

fn run_context_use(store: &ContextStore, name: &str) -> Result<String> {
    let mut config = store.load()?;

    if !config.contexts.contains_key(name) {
        return Err(ArmError::Config(format!(
            "Context '{}' not found. Available contexts: {}",
            name,
            config.names()
        )));
    }

    config.current_context = Some(name.to_string());
    store.save(&config)?;
    Ok(format!("✓ Switched to context '{}'", name))
}

fn run_context_delete(store: &ContextStore, name: &str) -> Result<String> {
    let mut config = store.load()?;

    if config.contexts.remove(name).is_none() {
        return Err(ArmError::Config(format!(
            "Context '{}' not found. Available contexts: {}",
            name,
            config.names()
        )));
    }

    if config.current_context.as_deref() == Some(name) {
        config.current_context = None;
    }

    store.save(&config)?;
    Ok(format!("✓ Deleted context '{}'", name))
}

/// Mask a token for display, keeping the last 4 characters
fn mask_token(token: Option<&str>) -> String {
    match token {
        Some(t) if t.chars().count() >= 4 => {
            let tail: String = t.chars().skip(t.chars().count() - 4).collect();
            format!("****{}", tail)
        }
        Some(_) => "****".to_string(),
        None => "<not set>".to_string(),
    }
}
