//! Federated pagination engine
//!
//! Turns a two-level listing (scopes, then items within each scope, both
//! paginated by continuation tokens) into one lazily fetched sequence,
//! available as a blocking [`FlatIter`] or as an async [`FlatStream`].

mod bridge;
mod cursor;
mod iter;
mod page;
mod source;
mod stream;

pub use bridge::BlockOn;
pub use iter::FlatIter;
pub use page::Page;
pub use source::{BlockingPageSource, PageSource, SingleScope};
pub use stream::{Canceller, FlatStream, Subscription};
