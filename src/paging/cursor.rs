//! Enumeration cursor shared by the blocking iterator and the async stream
//!
//! The cursor performs no I/O. A driver asks it what to do next with
//! [`EnumerationCursor::advance`], performs the fetch it is told to perform,
//! and answers with `fill_scopes`, `fill_items` or `fail` before advancing
//! again. This keeps one fetch outstanding at most and fetches a page only
//! when the previous one has been fully consumed.

use std::collections::VecDeque;

use super::page::Page;

/// What the driver has to do next
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Step<S, T> {
    /// Hand this item to the caller
    Yield(T),
    /// Fetch a page of scopes (`None` = first page)
    ListScopes(Option<String>),
    /// Fetch a page of items of the scope (`None` = first page)
    ListItems(S, Option<String>),
    /// End of sequence
    Done,
}

#[derive(Debug)]
pub(crate) struct EnumerationCursor<S, T> {
    pending_scopes: VecDeque<S>,
    scopes_listed: bool,
    scope_continuation: Option<String>,
    current_scope: Option<S>,
    page_continuation: Option<String>,
    buffer: VecDeque<T>,
    exhausted: bool,
}

impl<S: Clone, T> EnumerationCursor<S, T> {
    /// Cursor that lists scopes before listing their items
    pub(crate) fn federated() -> Self {
        Self {
            pending_scopes: VecDeque::new(),
            scopes_listed: false,
            scope_continuation: None,
            current_scope: None,
            page_continuation: None,
            buffer: VecDeque::new(),
            exhausted: false,
        }
    }

    /// Cursor over the items of one known scope
    pub(crate) fn for_scope(scope: S) -> Self {
        let mut cursor = Self::federated();
        cursor.pending_scopes.push_back(scope);
        cursor.scopes_listed = true;
        cursor
    }

    pub(crate) fn advance(&mut self) -> Step<S, T> {
        if self.exhausted {
            return Step::Done;
        }

        if let Some(item) = self.buffer.pop_front() {
            return Step::Yield(item);
        }

        if let Some(scope) = &self.current_scope {
            if let Some(token) = self.page_continuation.take() {
                return Step::ListItems(scope.clone(), Some(token));
            }
            self.current_scope = None;
        }

        if let Some(scope) = self.pending_scopes.pop_front() {
            self.current_scope = Some(scope.clone());
            return Step::ListItems(scope, None);
        }

        if !self.scopes_listed {
            return Step::ListScopes(None);
        }

        if let Some(token) = self.scope_continuation.take() {
            return Step::ListScopes(Some(token));
        }

        self.exhausted = true;
        Step::Done
    }

    pub(crate) fn fill_scopes(&mut self, page: Page<S>) {
        let (scopes, continuation) = page.into_parts();
        self.scopes_listed = true;
        self.pending_scopes.extend(scopes);
        self.scope_continuation = continuation;
    }

    pub(crate) fn fill_items(&mut self, page: Page<T>) {
        let (items, continuation) = page.into_parts();
        self.buffer.extend(items);
        self.page_continuation = continuation;
    }

    /// Terminate after a failed fetch; later advances report `Done`
    pub(crate) fn fail(&mut self) {
        self.exhausted = true;
        self.buffer.clear();
        self.pending_scopes.clear();
        self.current_scope = None;
        self.page_continuation = None;
        self.scope_continuation = None;
    }

    #[cfg(test)]
    pub(crate) fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}
