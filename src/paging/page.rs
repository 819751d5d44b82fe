//! A single fetched page

/// One page of a paginated listing.
///
/// `continuation` is present iff more items exist beyond this page for the
/// same scope. Pages are never mutated once built; consumers take them
/// apart with [`Page::into_parts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    items: Vec<T>,
    continuation: Option<String>,
}

impl<T> Page<T> {
    /// Create a page. An empty continuation token counts as absent.
    pub fn new(items: Vec<T>, continuation: Option<String>) -> Self {
        Self {
            items,
            continuation: continuation.filter(|token| !token.is_empty()),
        }
    }

    /// Create the final page of a scope
    pub fn last(items: Vec<T>) -> Self {
        Self::new(items, None)
    }

    /// An empty final page
    pub fn empty() -> Self {
        Self::last(Vec::new())
    }

    /// Items carried by this page
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Token for the following page, if any
    pub fn continuation(&self) -> Option<&str> {
        self.continuation.as_deref()
    }

    /// Whether another page follows
    pub fn has_more(&self) -> bool {
        self.continuation.is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Split into items and continuation token
    pub fn into_parts(self) -> (Vec<T>, Option<String>) {
        (self.items, self.continuation)
    }
}
