//! Point operations a resource collection needs besides listing

use std::future::Future;

use crate::arm::ResourceGroup;
use crate::error::Result;
use crate::paging::{BlockOn, BlockingPageSource, PageSource};

/// Async listing plus targeted get/delete within a resource group
pub trait ResourceOps: PageSource<Scope = ResourceGroup> {
    /// Provider namespace and type the items belong to
    fn provider(&self) -> &str;

    /// Subscription targeted by point operations, if fixed
    fn subscription(&self) -> Option<&str> {
        None
    }

    /// Fetch one item; `Ok(None)` when the service reports it absent
    fn get_item(
        &self,
        group: &str,
        name: &str,
    ) -> impl Future<Output = Result<Option<Self::Item>>> + Send;

    /// Delete one item; `Ok(false)` when it was already absent
    fn delete_item(&self, group: &str, name: &str) -> impl Future<Output = Result<bool>> + Send;
}

/// Blocking twin of [`ResourceOps`]
pub trait BlockingResourceOps: BlockingPageSource<Scope = ResourceGroup> {
    fn provider(&self) -> &str;

    fn subscription(&self) -> Option<&str> {
        None
    }

    fn get_item(&self, group: &str, name: &str) -> Result<Option<Self::Item>>;

    fn delete_item(&self, group: &str, name: &str) -> Result<bool>;
}

impl<S: ResourceOps> BlockingResourceOps for BlockOn<S> {
    fn provider(&self) -> &str {
        self.get_ref().provider()
    }

    fn subscription(&self) -> Option<&str> {
        self.get_ref().subscription()
    }

    fn get_item(&self, group: &str, name: &str) -> Result<Option<S::Item>> {
        self.block_on(self.get_ref().get_item(group, name))
    }

    fn delete_item(&self, group: &str, name: &str) -> Result<bool> {
        self.block_on(self.get_ref().delete_item(group, name))
    }
}
