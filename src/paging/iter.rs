//! Blocking flattening iterator

use std::iter::FusedIterator;
use std::sync::Arc;

use log::debug;

use crate::error::Result;

use super::cursor::{EnumerationCursor, Step};
use super::source::{BlockingPageSource, SingleScope};

/// Lazy, pull-based sequence of items spanning every page of every scope.
///
/// Each call to `next` either pops a buffered item or performs at most the
/// fetches needed to produce one; nothing is fetched ahead. A failed fetch is
/// yielded once as `Err` and ends the sequence; items already returned stay
/// valid. Every iterator owns its cursor, so independent enumerations over
/// the same sources share no state.
pub struct FlatIter<G, I>
where
    I: BlockingPageSource,
{
    scopes: Arc<G>,
    items: Arc<I>,
    cursor: EnumerationCursor<I::Scope, I::Item>,
}

impl<G, I> FlatIter<G, I>
where
    G: BlockingPageSource<Scope = (), Item = I::Scope>,
    I: BlockingPageSource,
{
    /// Enumerate all scopes listed by `scopes`, then the items of each
    pub fn new(scopes: Arc<G>, items: Arc<I>) -> Self {
        Self {
            scopes,
            items,
            cursor: EnumerationCursor::federated(),
        }
    }

    fn list_scopes(&self, token: Option<&str>) -> Result<super::Page<I::Scope>> {
        match token {
            None => {
                debug!("Fetching first page of scopes");
                self.scopes.fetch_first(&())
            }
            Some(token) => {
                debug!("Fetching next page of scopes");
                self.scopes.fetch_next(&(), token)
            }
        }
    }

    fn list_items(&self, scope: &I::Scope, token: Option<&str>) -> Result<super::Page<I::Item>> {
        match token {
            None => {
                debug!("Fetching first page of items for scope {:?}", scope);
                self.items.fetch_first(scope)
            }
            Some(token) => {
                debug!("Fetching next page of items for scope {:?}", scope);
                self.items.fetch_next(scope, token)
            }
        }
    }
}

impl<I> FlatIter<SingleScope<I::Scope>, I>
where
    I: BlockingPageSource,
{
    /// Enumerate the items of one known scope
    pub fn for_scope(items: Arc<I>, scope: I::Scope) -> Self {
        Self {
            scopes: Arc::new(SingleScope::default()),
            items,
            cursor: EnumerationCursor::for_scope(scope),
        }
    }
}

impl<G, I> Iterator for FlatIter<G, I>
where
    G: BlockingPageSource<Scope = (), Item = I::Scope>,
    I: BlockingPageSource,
{
    type Item = Result<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.cursor.advance() {
                Step::Yield(item) => return Some(Ok(item)),
                Step::Done => return None,
                Step::ListScopes(token) => match self.list_scopes(token.as_deref()) {
                    Ok(page) => self.cursor.fill_scopes(page),
                    Err(e) => {
                        debug!("Scope listing failed, ending enumeration: {}", e);
                        self.cursor.fail();
                        return Some(Err(e));
                    }
                },
                Step::ListItems(scope, token) => match self.list_items(&scope, token.as_deref()) {
                    Ok(page) => {
                        debug!("Scope {:?} returned {} items", scope, page.len());
                        self.cursor.fill_items(page)
                    }
                    Err(e) => {
                        debug!("Item listing failed for scope {:?}: {}", scope, e);
                        self.cursor.fail();
                        return Some(Err(e));
                    }
                },
            }
        }
    }
}

impl<G, I> FusedIterator for FlatIter<G, I>
where
    G: BlockingPageSource<Scope = (), Item = I::Scope>,
    I: BlockingPageSource,
{
}
