//! Blocking ARM client

use std::sync::Arc;

use tokio::runtime::{Builder, Runtime};

use crate::arm::client::ArmClient;
use crate::arm::kind::{KindSource, ResourceKind};
use crate::arm::resource_groups::ResourceGroupSource;
use crate::error::{ArmError, Result};
use crate::paging::BlockOn;
use crate::resources::blocking::GroupedResources;

/// Blocking front of an [`ArmClient`].
///
/// Owns a current-thread runtime shared by every source it hands out, so
/// listings and point operations run on the calling thread. Must not be
/// used from inside an async context.
pub struct BlockingArmClient {
    inner: ArmClient,
    runtime: Arc<Runtime>,
}

impl BlockingArmClient {
    pub fn new(inner: ArmClient) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ArmError::Config(format!("Failed to start runtime: {}", e)))?;

        Ok(Self {
            inner,
            runtime: Arc::new(runtime),
        })
    }

    pub fn subscription(&self) -> &str {
        self.inner.subscription()
    }

    /// Resource group listing (the scope enumerator)
    pub fn resource_groups(&self) -> BlockOn<ResourceGroupSource> {
        BlockOn::new(self.inner.resource_groups(), Arc::clone(&self.runtime))
    }

    /// Collection of resources of kind `K` across all resource groups
    pub fn resources<K: ResourceKind>(
        &self,
    ) -> GroupedResources<BlockOn<ResourceGroupSource>, BlockOn<KindSource<K>>> {
        GroupedResources::new(
            self.resource_groups(),
            BlockOn::new(KindSource::new(self.inner.clone()), Arc::clone(&self.runtime)),
        )
    }
}
