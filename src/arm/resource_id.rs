//! ARM resource ID parsing

use crate::config::api;
use crate::error::{ArmError, Result};

/// Parsed `/subscriptions/{sub}/resourceGroups/{rg}/providers/{ns}/{type}/{name}`
///
/// Child resources keep their parent path inside `provider`
/// (e.g. `Microsoft.Sql/servers/srv/databases`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceId {
    pub subscription: String,
    pub resource_group: String,
    pub provider: String,
    pub name: String,
}

impl ResourceId {
    pub fn parse(id: &str) -> Result<Self> {
        let invalid = |reason: &str| {
            ArmError::InvalidArgument(format!("Invalid resource ID '{}': {}", id, reason))
        };

        if !id.starts_with('/') {
            return Err(invalid("must start with '/'"));
        }

        let segments: Vec<&str> = id.trim_matches('/').split('/').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(invalid("empty path segment"));
        }
        if segments.len() < 8 {
            return Err(invalid("too few segments"));
        }
        if !segments[0].eq_ignore_ascii_case(api::SUBSCRIPTIONS)
            || !segments[2].eq_ignore_ascii_case(api::RESOURCE_GROUPS_SEGMENT)
            || !segments[4].eq_ignore_ascii_case(api::PROVIDERS)
        {
            return Err(invalid(
                "expected /subscriptions/{sub}/resourceGroups/{rg}/providers/...",
            ));
        }
        // namespace, then type/name pairs
        if (segments.len() - 5) % 2 == 0 {
            return Err(invalid("provider path must end with a resource name"));
        }

        let last = segments.len() - 1;
        Ok(Self {
            subscription: segments[1].to_string(),
            resource_group: segments[3].to_string(),
            provider: segments[5..last].join("/"),
            name: segments[last].to_string(),
        })
    }

    /// Whether this ID points at a resource of `provider` (case-insensitive)
    pub fn is_provider(&self, provider: &str) -> bool {
        self.provider.eq_ignore_ascii_case(provider)
    }
}

/// Resource group segment of an ARM ID, if present
pub fn resource_group_of(id: &str) -> Option<&str> {
    let mut segments = id.split('/');
    while let Some(segment) = segments.next() {
        if segment.eq_ignore_ascii_case(api::RESOURCE_GROUPS_SEGMENT) {
            return segments.next().filter(|s| !s.is_empty());
        }
    }
    None
}
