//! armpager - federated pagination over Azure Resource Manager
//!
//! Lists resources of one kind across every resource group of a
//! subscription as a single lazily fetched sequence: resource groups are
//! listed page by page, and each group's resources are listed page by page
//! in turn.
//!
//! # Features
//!
//! - Blocking iteration ([`paging::FlatIter`]) and cancellable async
//!   streams ([`paging::FlatStream`]) with identical ordering
//! - No read-ahead: a page is fetched only when the consumer needs it
//! - Fail-fast errors that keep already-yielded items valid
//! - Point get/delete by name or resource ID through typed handles
//!
//! # Example
//!
//! ```no_run
//! use futures::StreamExt;
//! use armpager::{ArmClient, ArmResource, Registries};
//!
//! # async fn demo() -> armpager::Result<()> {
//! let client = ArmClient::new(
//!     "token".to_string(),
//!     "management.azure.com".to_string(),
//!     "00000000-0000-0000-0000-000000000000".to_string(),
//! );
//! let registries = client.resources::<Registries>();
//!
//! let mut stream = registries.list();
//! while let Some(registry) = stream.next().await {
//!     println!("{}", registry?.name());
//! }
//!
//! if let Some(acr) = registries.get_by_group("rg-ci", "acme").await? {
//!     acr.delete().await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod arm;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod output;
pub mod paging;
pub mod resources;
pub mod ui;

pub use arm::{
    ArmClient, ArmResource, BlockingArmClient, KindSource, LocalNetworkGateway,
    LocalNetworkGateways, Registries, Registry, ResourceGroup, ResourceGroupSource, ResourceId,
    ResourceKind,
};
pub use cli::{Cli, Command, OutputFormat};
pub use error::{ArmError, Result};
pub use paging::{
    BlockOn, BlockingPageSource, Canceller, FlatIter, FlatStream, Page, PageSource, SingleScope,
    Subscription,
};
pub use resources::{BlockingResourceOps, GroupedResources, Resource, ResourceOps};
