//! Container registry data models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::arm::traits::ArmResource;

/// Container registry data from the ARM API
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Registry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub tags: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub sku: Option<Sku>,
    #[serde(default)]
    pub properties: Option<RegistryProperties>,
}

/// Registry pricing tier
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Sku {
    pub name: String,
}

/// Registry properties
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RegistryProperties {
    #[serde(rename = "loginServer")]
    pub login_server: Option<String>,
    #[serde(rename = "adminUserEnabled")]
    pub admin_user_enabled: Option<bool>,
    #[serde(rename = "provisioningState")]
    pub provisioning_state: Option<String>,
}

impl Registry {
    pub fn login_server(&self) -> Option<&str> {
        self.properties
            .as_ref()
            .and_then(|p| p.login_server.as_deref())
    }

    pub fn sku_name(&self) -> Option<&str> {
        self.sku.as_ref().map(|s| s.name.as_str())
    }

    /// Whether the admin user is enabled, defaulting to false if not reported
    pub fn admin_user_enabled(&self) -> bool {
        self.properties
            .as_ref()
            .and_then(|p| p.admin_user_enabled)
            .unwrap_or(false)
    }
}

impl ArmResource for Registry {
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
}
