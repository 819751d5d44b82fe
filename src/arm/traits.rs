//! Common traits for ARM resources

use serde::Deserialize;

use crate::arm::resource_id;
use crate::paging::Page;

/// Common trait for all ARM resources (resource groups, gateways, registries)
///
/// Provides unified identification, used by the resource facade to
/// re-fetch or delete a listed item by name.
pub trait ArmResource {
    /// Full ARM resource ID
    fn id(&self) -> &str;

    /// Resource name (last ID segment)
    fn name(&self) -> &str;

    /// Azure region, when the resource reports one
    fn location(&self) -> Option<&str> {
        None
    }

    /// Provisioning state, when the resource reports one
    fn provisioning_state(&self) -> Option<&str> {
        None
    }

    /// Resource group parsed from the ID
    fn resource_group(&self) -> Option<&str> {
        resource_id::resource_group_of(self.id())
    }
}

/// Trait for API responses that carry one page of a listing
pub trait PaginatedResponse<T> {
    /// Consume self and return the page
    fn into_page(self) -> Page<T>;
}

/// Generic ARM list response (`{"value": [...], "nextLink": "..."}`)
#[derive(Deserialize, Debug)]
pub struct ApiListResponse<T> {
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,
    #[serde(rename = "nextLink", default)]
    pub next_link: Option<String>,
}

impl<T> PaginatedResponse<T> for ApiListResponse<T> {
    fn into_page(self) -> Page<T> {
        Page::new(self.value, self.next_link)
    }
}
