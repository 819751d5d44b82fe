//! Local network gateway module

mod models;

pub use models::{AddressSpace, LocalNetworkGateway, LocalNetworkGatewayProperties};

use crate::arm::kind::ResourceKind;

/// `Microsoft.Network/localNetworkGateways`
pub struct LocalNetworkGateways;

impl ResourceKind for LocalNetworkGateways {
    type Model = LocalNetworkGateway;

    const PROVIDER: &'static str = "Microsoft.Network/localNetworkGateways";
    const API_VERSION: &'static str = "2023-09-01";
    const LABEL: &'static str = "local network gateway";
}
