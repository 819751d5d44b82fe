//! Resource group data models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::arm::traits::ArmResource;

/// Resource group data from the ARM API
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ResourceGroup {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub tags: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub properties: Option<ResourceGroupProperties>,
}

/// Resource group properties
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ResourceGroupProperties {
    #[serde(rename = "provisioningState")]
    pub provisioning_state: Option<String>,
}

impl ResourceGroup {
    /// A group known only by name, enough to issue listings within it
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            location: None,
            tags: None,
            properties: None,
        }
    }
}

impl ArmResource for ResourceGroup {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    fn provisioning_state(&self) -> Option<&str> {
        self.properties
            .as_ref()
            .and_then(|p| p.provisioning_state.as_deref())
    }

    fn resource_group(&self) -> Option<&str> {
        Some(&self.name)
    }
}
