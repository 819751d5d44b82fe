//! Container registry module

mod models;

pub use models::{Registry, RegistryProperties, Sku};

use crate::arm::kind::ResourceKind;

/// `Microsoft.ContainerRegistry/registries`
pub struct Registries;

impl ResourceKind for Registries {
    type Model = Registry;

    const PROVIDER: &'static str = "Microsoft.ContainerRegistry/registries";
    const API_VERSION: &'static str = "2023-07-01";
    const LABEL: &'static str = "container registry";
}
