//! Blocking resource collection

use std::sync::Arc;

use log::debug;

use crate::arm::{ArmResource, ResourceGroup};
use crate::error::Result;
use crate::paging::{BlockingPageSource, FlatIter};

use super::collection::{parse_id, require};
use super::ops::BlockingResourceOps;
use super::resource::Resource;

/// Blocking twin of [`super::GroupedResources`]; every call runs on the
/// calling thread.
pub struct GroupedResources<G, I> {
    groups: Arc<G>,
    ops: Arc<I>,
}

impl<G, I> GroupedResources<G, I>
where
    G: BlockingPageSource<Scope = (), Item = ResourceGroup>,
    I: BlockingResourceOps,
    I::Item: ArmResource,
{
    pub fn new(groups: G, ops: I) -> Self {
        Self {
            groups: Arc::new(groups),
            ops: Arc::new(ops),
        }
    }

    /// Every resource in every group, fetched page by page as the iterator advances
    pub fn list(&self) -> impl Iterator<Item = Result<Resource<I::Item, I>>> {
        debug!("Listing {} across all resource groups", self.ops.provider());
        let source = Arc::downgrade(&self.ops);
        FlatIter::new(Arc::clone(&self.groups), Arc::clone(&self.ops))
            .map(move |item| item.map(|item| Resource::new(item, source.clone())))
    }

    /// Every resource in one group; an empty group name is yielded as the only error
    pub fn list_by_group(&self, group: &str) -> impl Iterator<Item = Result<Resource<I::Item, I>>> {
        let invalid = require(group, "resource group name").err();
        let listing = invalid.is_none().then(|| {
            debug!("Listing {} in resource group '{}'", self.ops.provider(), group);
            let source = Arc::downgrade(&self.ops);
            FlatIter::for_scope(Arc::clone(&self.ops), ResourceGroup::named(group))
                .map(move |item| item.map(|item| Resource::new(item, source.clone())))
        });
        invalid.map(Err).into_iter().chain(listing.into_iter().flatten())
    }

    pub fn get_by_group(&self, group: &str, name: &str) -> Result<Option<Resource<I::Item, I>>> {
        require(group, "resource group name")?;
        require(name, "resource name")?;
        let item = self.ops.get_item(group, name)?;
        Ok(item.map(|item| Resource::new(item, Arc::downgrade(&self.ops))))
    }

    pub fn delete_by_group(&self, group: &str, name: &str) -> Result<bool> {
        require(group, "resource group name")?;
        require(name, "resource name")?;
        self.ops.delete_item(group, name)
    }

    pub fn get_by_id(&self, id: &str) -> Result<Option<Resource<I::Item, I>>> {
        let id = parse_id(id, self.ops.provider(), self.ops.subscription())?;
        self.get_by_group(&id.resource_group, &id.name)
    }

    pub fn delete_by_id(&self, id: &str) -> Result<bool> {
        let id = parse_id(id, self.ops.provider(), self.ops.subscription())?;
        self.delete_by_group(&id.resource_group, &id.name)
    }
}
