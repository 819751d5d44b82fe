//! Domain handle wrapping one listed or fetched item

use std::fmt;
use std::ops::Deref;
use std::sync::{Arc, Weak};

use crate::arm::ArmResource;
use crate::error::{ArmError, Result};

use super::ops::{BlockingResourceOps, ResourceOps};

/// Immutable snapshot of one item plus a lookup-only link to the
/// collection that produced it.
///
/// The link does not keep the collection alive. Once every owner of the
/// collection is gone, [`Resource::refresh`] and [`Resource::delete`] fail
/// with [`ArmError::Detached`]; the snapshot itself stays readable.
pub struct Resource<T, I> {
    inner: T,
    source: Weak<I>,
}

impl<T, I> Resource<T, I> {
    pub(crate) fn new(inner: T, source: Weak<I>) -> Self {
        Self { inner, source }
    }

    /// The wrapped item
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Unwrap the item, dropping the collection link
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Whether the producing collection still exists
    pub fn is_attached(&self) -> bool {
        self.source.strong_count() > 0
    }
}

impl<T: ArmResource, I> Resource<T, I> {
    fn source(&self) -> Result<Arc<I>> {
        self.source.upgrade().ok_or_else(|| {
            ArmError::Detached(format!(
                "the collection that produced '{}' no longer exists",
                self.inner.name()
            ))
        })
    }

    fn group(&self) -> Result<&str> {
        self.inner.resource_group().ok_or_else(|| {
            ArmError::InvalidArgument(format!(
                "resource '{}' has no resource group in its ID",
                self.inner.name()
            ))
        })
    }

    fn rewrap(&self, inner: T) -> Self {
        Self {
            inner,
            source: self.source.clone(),
        }
    }
}

impl<T, I> Resource<T, I>
where
    T: ArmResource,
    I: ResourceOps<Item = T>,
{
    /// Re-fetch this item by name; `Ok(None)` if it no longer exists
    pub async fn refresh(&self) -> Result<Option<Self>> {
        let source = self.source()?;
        let fresh = source.get_item(self.group()?, self.inner.name()).await?;
        Ok(fresh.map(|item| self.rewrap(item)))
    }

    /// Delete this item; `Ok(false)` if it was already gone
    pub async fn delete(&self) -> Result<bool> {
        let source = self.source()?;
        source.delete_item(self.group()?, self.inner.name()).await
    }
}

impl<T, I> Resource<T, I>
where
    T: ArmResource,
    I: BlockingResourceOps<Item = T>,
{
    /// Blocking form of [`Resource::refresh`]
    pub fn refresh_blocking(&self) -> Result<Option<Self>> {
        let source = self.source()?;
        let fresh = source.get_item(self.group()?, self.inner.name())?;
        Ok(fresh.map(|item| self.rewrap(item)))
    }

    /// Blocking form of [`Resource::delete`]
    pub fn delete_blocking(&self) -> Result<bool> {
        let source = self.source()?;
        source.delete_item(self.group()?, self.inner.name())
    }
}

impl<T, I> Deref for Resource<T, I> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T: Clone, I> Clone for Resource<T, I> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            source: self.source.clone(),
        }
    }
}

impl<T: fmt::Debug, I> fmt::Debug for Resource<T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("inner", &self.inner)
            .field("attached", &self.is_attached())
            .finish()
    }
}
