//! Local network gateway data models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::arm::traits::ArmResource;

/// Local network gateway data from the ARM API
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LocalNetworkGateway {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub tags: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub etag: Option<String>,
    #[serde(default)]
    pub properties: Option<LocalNetworkGatewayProperties>,
}

/// Local network gateway properties
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LocalNetworkGatewayProperties {
    #[serde(rename = "gatewayIpAddress")]
    pub gateway_ip_address: Option<String>,
    pub fqdn: Option<String>,
    #[serde(rename = "localNetworkAddressSpace")]
    pub local_network_address_space: Option<AddressSpace>,
    #[serde(rename = "provisioningState")]
    pub provisioning_state: Option<String>,
}

/// Address prefixes reachable through the gateway
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct AddressSpace {
    #[serde(rename = "addressPrefixes", default)]
    pub address_prefixes: Vec<String>,
}

impl LocalNetworkGateway {
    /// Public IP of the on-premises VPN device, falling back to its FQDN
    pub fn gateway_address(&self) -> Option<&str> {
        let props = self.properties.as_ref()?;
        props
            .gateway_ip_address
            .as_deref()
            .or(props.fqdn.as_deref())
    }

    /// Address prefixes, empty if not reported
    pub fn address_prefixes(&self) -> &[String] {
        self.properties
            .as_ref()
            .and_then(|p| p.local_network_address_space.as_ref())
            .map(|s| s.address_prefixes.as_slice())
            .unwrap_or(&[])
    }
}

impl ArmResource for LocalNetworkGateway {
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
