//! Resource group module

mod api;
mod models;

pub use api::ResourceGroupSource;
pub use models::{ResourceGroup, ResourceGroupProperties};
