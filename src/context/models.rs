//! Context configuration data models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level context configuration
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ContextConfig {
    /// Name of the currently active context
    #[serde(rename = "current-context", skip_serializing_if = "Option::is_none")]
    pub current_context: Option<String>,
    /// Map of context name to context configuration
    #[serde(default)]
    pub contexts: BTreeMap<String, Context>,
}

/// A named context with connection parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    /// Subscription all requests are issued against
    pub subscription: String,
    /// ARM endpoint; the public cloud when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Bearer token (stored in config file)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl ContextConfig {
    /// Comma-separated context names, for error messages
    pub fn names(&self) -> String {
        if self.contexts.is_empty() {
            return "<none>".to_string();
        }
        self.contexts
            .keys()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    }
}
