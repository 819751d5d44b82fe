//! Azure Resource Manager transport and resource kinds
//!
//! This module provides the HTTP client, the resource group listing that
//! scopes every enumeration, and the resource kinds listed within groups.

mod blocking;
mod client;
mod credentials;
mod kind;
pub mod local_network_gateways;
pub mod registries;
pub mod resource_groups;
mod resource_id;
pub mod traits;

pub use blocking::BlockingArmClient;
pub use client::ArmClient;
pub use credentials::{EndpointResolver, SubscriptionResolver, TokenResolver};
pub use kind::{KindSource, ResourceKind};
pub use local_network_gateways::{LocalNetworkGateway, LocalNetworkGateways};
pub use registries::{Registries, Registry};
pub use resource_groups::{ResourceGroup, ResourceGroupSource};
pub use resource_id::{resource_group_of, ResourceId};
pub use traits::{ApiListResponse, ArmResource, PaginatedResponse};
