//! Async resource collection over resource groups

use std::sync::Arc;

use log::debug;

use crate::arm::{ArmResource, ResourceGroup, ResourceId};
use crate::error::{ArmError, Result};
use crate::paging::{FlatStream, PageSource};

use super::ops::ResourceOps;
use super::resource::Resource;

/// Reject empty group or resource names before any request goes out
pub(crate) fn require(value: &str, what: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ArmError::InvalidArgument(format!("{} must not be empty", what)));
    }
    Ok(())
}

/// Parse an ARM ID and check it addresses the collection's kind and subscription
pub(crate) fn parse_id(id: &str, provider: &str, subscription: Option<&str>) -> Result<ResourceId> {
    let parsed = ResourceId::parse(id)?;
    if !parsed.is_provider(provider) {
        return Err(ArmError::InvalidArgument(format!(
            "'{}' is a {} resource, expected {}",
            id, parsed.provider, provider
        )));
    }
    if let Some(expected) = subscription {
        if !parsed.subscription.eq_ignore_ascii_case(expected) {
            return Err(ArmError::InvalidArgument(format!(
                "'{}' belongs to subscription '{}', client targets '{}'",
                id, parsed.subscription, expected
            )));
        }
    }
    Ok(parsed)
}

/// Resources of one kind across the resource groups of a subscription.
///
/// `G` lists the groups and `I` lists and addresses the items. Listings are
/// lazy [`FlatStream`]s; every call starts a fresh enumeration. Handles
/// returned by this collection link back to `I` weakly.
pub struct GroupedResources<G, I> {
    groups: Arc<G>,
    ops: Arc<I>,
}

impl<G, I> GroupedResources<G, I>
where
    G: PageSource<Scope = (), Item = ResourceGroup> + 'static,
    I: ResourceOps + 'static,
    I::Item: ArmResource + 'static,
{
    pub fn new(groups: G, ops: I) -> Self {
        Self {
            groups: Arc::new(groups),
            ops: Arc::new(ops),
        }
    }

    fn wrap(&self) -> impl FnMut(I::Item) -> Resource<I::Item, I> + Send + 'static {
        let source = Arc::downgrade(&self.ops);
        move |item| Resource::new(item, source.clone())
    }

    /// Every resource in every group, group by group
    pub fn list(&self) -> FlatStream<Resource<I::Item, I>> {
        debug!("Listing {} across all resource groups", self.ops.provider());
        FlatStream::federated(Arc::clone(&self.groups), Arc::clone(&self.ops)).map(self.wrap())
    }

    /// Every resource in one group
    ///
    /// The group is not checked for existence up front; a missing group
    /// surfaces as the service's error on the first fetch.
    /// An empty group name is yielded as the only, `InvalidArgument`, item.
    pub fn list_by_group(&self, group: &str) -> FlatStream<Resource<I::Item, I>> {
        if let Err(e) = require(group, "resource group name") {
            return FlatStream::failed(e);
        }
        debug!("Listing {} in resource group '{}'", self.ops.provider(), group);
        FlatStream::for_scope(Arc::clone(&self.ops), ResourceGroup::named(group)).map(self.wrap())
    }

    /// Fetch one resource; `Ok(None)` when it does not exist
    pub async fn get_by_group(
        &self,
        group: &str,
        name: &str,
    ) -> Result<Option<Resource<I::Item, I>>> {
        require(group, "resource group name")?;
        require(name, "resource name")?;
        let item = self.ops.get_item(group, name).await?;
        Ok(item.map(|item| Resource::new(item, Arc::downgrade(&self.ops))))
    }

    /// Delete one resource; `Ok(false)` when it was already absent
    pub async fn delete_by_group(&self, group: &str, name: &str) -> Result<bool> {
        require(group, "resource group name")?;
        require(name, "resource name")?;
        self.ops.delete_item(group, name).await
    }

    /// Fetch a resource by its full ARM ID
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Resource<I::Item, I>>> {
        let id = parse_id(id, self.ops.provider(), self.ops.subscription())?;
        self.get_by_group(&id.resource_group, &id.name).await
    }

    /// Delete a resource by its full ARM ID
    pub async fn delete_by_id(&self, id: &str) -> Result<bool> {
        let id = parse_id(id, self.ops.provider(), self.ops.subscription())?;
        self.delete_by_group(&id.resource_group, &id.name).await
    }
}
