//! Resource facade: typed handles and collections over the paging core

pub mod blocking;
mod collection;
mod ops;
mod resource;

pub(crate) use collection::parse_id;
pub use collection::GroupedResources;
pub use ops::{BlockingResourceOps, ResourceOps};
pub use resource::Resource;
