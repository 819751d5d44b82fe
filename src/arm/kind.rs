//! Resource kinds and their group-scoped listing source

use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::arm::client::ArmClient;
use crate::arm::resource_groups::ResourceGroup;
use crate::arm::traits::ArmResource;
use crate::config::api;
use crate::error::Result;
use crate::paging::{Page, PageSource};
use crate::resources::ResourceOps;

/// A resource type living inside resource groups
///
/// Implemented by marker types; the Flattening/Facade pair is instantiated
/// once per kind through [`KindSource`].
pub trait ResourceKind: Send + Sync + 'static {
    /// Data model returned by the API
    type Model: DeserializeOwned + ArmResource + Send + 'static;

    /// Provider namespace and type, e.g. `Microsoft.Network/localNetworkGateways`
    const PROVIDER: &'static str;

    /// API version for this provider type
    const API_VERSION: &'static str;

    /// Human-readable singular label for messages
    const LABEL: &'static str;
}

/// Lists and addresses resources of kind `K` through an [`ArmClient`]
pub struct KindSource<K> {
    client: ArmClient,
    _kind: PhantomData<fn() -> K>,
}

impl<K: ResourceKind> KindSource<K> {
    pub fn new(client: ArmClient) -> Self {
        Self {
            client,
            _kind: PhantomData,
        }
    }

    /// `/subscriptions/{sub}/resourceGroups/{rg}/providers/{provider}`
    fn collection_path(&self, group: &str) -> String {
        format!(
            "{}/{}/{}",
            self.client.group_path(group),
            api::PROVIDERS,
            K::PROVIDER
        )
    }

    fn resource_path(&self, group: &str, name: &str) -> String {
        format!(
            "{}/{}",
            self.collection_path(group),
            urlencoding::encode(name)
        )
    }

    fn list_context(group: &str) -> String {
        format!("{}s in resource group '{}'", K::LABEL, group)
    }

    fn resource_label(group: &str, name: &str) -> String {
        format!("{} '{}' in resource group '{}'", K::LABEL, name, group)
    }
}

impl<K: ResourceKind> PageSource for KindSource<K> {
    type Scope = ResourceGroup;
    type Item = K::Model;

    async fn fetch_first(&self, scope: &ResourceGroup) -> Result<Page<K::Model>> {
        let url = self
            .client
            .url(&self.collection_path(&scope.name), K::API_VERSION);
        self.client
            .fetch_page(&url, &Self::list_context(&scope.name))
            .await
    }

    async fn fetch_next(&self, scope: &ResourceGroup, token: &str) -> Result<Page<K::Model>> {
        self.client
            .fetch_page(token, &Self::list_context(&scope.name))
            .await
    }
}

impl<K: ResourceKind> ResourceOps for KindSource<K> {
    fn provider(&self) -> &str {
        K::PROVIDER
    }

    fn subscription(&self) -> Option<&str> {
        Some(self.client.subscription())
    }

    async fn get_item(&self, group: &str, name: &str) -> Result<Option<K::Model>> {
        self.client
            .fetch_resource_by_path(
                &self.resource_path(group, name),
                K::API_VERSION,
                &Self::resource_label(group, name),
            )
            .await
    }

    async fn delete_item(&self, group: &str, name: &str) -> Result<bool> {
        self.client
            .delete_resource_by_path(
                &self.resource_path(group, name),
                K::API_VERSION,
                &Self::resource_label(group, name),
            )
            .await
    }
}
