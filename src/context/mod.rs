//! Context management module
//!
//! Named contexts bundle connection parameters (subscription, endpoint,
//! token) for switching between subscriptions and clouds.

mod commands;
mod models;
mod resolve;
mod store;

pub use commands::run_context_command;
pub use models::{Context, ContextConfig};
pub use resolve::resolve_active_context;
pub use store::ContextStore;
