//! Blocking adapter over async sources

use std::sync::Arc;

use tokio::runtime::Runtime;

use crate::error::Result;

use super::page::Page;
use super::source::{BlockingPageSource, PageSource};

/// Runs an async source to completion on a private runtime.
///
/// Every call blocks the calling thread until its single fetch finishes.
/// Calling into a `BlockOn` from inside an async context panics, as does
/// dropping the last handle to its runtime there.
pub struct BlockOn<S> {
    inner: S,
    runtime: Arc<Runtime>,
}

impl<S> BlockOn<S> {
    pub fn new(inner: S, runtime: Arc<Runtime>) -> Self {
        Self { inner, runtime }
    }

    /// The wrapped async source
    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    /// Run any future of the wrapped source to completion
    pub(crate) fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }
}

impl<S: PageSource> BlockingPageSource for BlockOn<S> {
    type Scope = S::Scope;
    type Item = S::Item;

    fn fetch_first(&self, scope: &S::Scope) -> Result<Page<S::Item>> {
        self.runtime.block_on(self.inner.fetch_first(scope))
    }

    fn fetch_next(&self, scope: &S::Scope, token: &str) -> Result<Page<S::Item>> {
        self.runtime.block_on(self.inner.fetch_next(scope, token))
    }
}
