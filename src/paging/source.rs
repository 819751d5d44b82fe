//! Page source contracts
//!
//! A page source performs exactly one remote round trip per call and never
//! retries or caches; retry policy belongs to the transport. Scope listings
//! use the same contract with `Scope = ()` and the scope type as `Item`.

use std::fmt::Debug;
use std::future::Future;
use std::marker::PhantomData;

use crate::error::Result;

use super::page::Page;

/// Asynchronous source of pages within a scope
pub trait PageSource: Send + Sync {
    /// Identifier of the partition being listed
    type Scope: Clone + Debug + Send + Sync;
    /// Item carried by the pages
    type Item: Send;

    /// Fetch the first page of `scope`
    fn fetch_first(
        &self,
        scope: &Self::Scope,
    ) -> impl Future<Output = Result<Page<Self::Item>>> + Send;

    /// Fetch the page following `token`, which must have been returned for the same scope
    fn fetch_next(
        &self,
        scope: &Self::Scope,
        token: &str,
    ) -> impl Future<Output = Result<Page<Self::Item>>> + Send;
}

/// Blocking source of pages within a scope
pub trait BlockingPageSource: Send + Sync {
    type Scope: Clone + Debug + Send + Sync;
    type Item: Send;

    /// Fetch the first page of `scope`, blocking the calling thread
    fn fetch_first(&self, scope: &Self::Scope) -> Result<Page<Self::Item>>;

    /// Fetch the page following `token`, blocking the calling thread
    fn fetch_next(&self, scope: &Self::Scope, token: &str) -> Result<Page<Self::Item>>;
}

/// Scope "listing" for enumerations pinned to one known scope.
///
/// Enumerations built with a single scope never ask it for pages; if they
/// did, it would answer with an empty final page.
pub struct SingleScope<S>(PhantomData<fn() -> S>);

impl<S> Default for SingleScope<S> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<S: Send> PageSource for SingleScope<S> {
    type Scope = ();
    type Item = S;

    async fn fetch_first(&self, _scope: &()) -> Result<Page<S>> {
        Ok(Page::empty())
    }

    async fn fetch_next(&self, _scope: &(), _token: &str) -> Result<Page<S>> {
        Ok(Page::empty())
    }
}

impl<S: Send> BlockingPageSource for SingleScope<S> {
    type Scope = ();
    type Item = S;

    fn fetch_first(&self, _scope: &()) -> Result<Page<S>> {
        Ok(Page::empty())
    }

    fn fetch_next(&self, _scope: &(), _token: &str) -> Result<Page<S>> {
        Ok(Page::empty())
    }
}
