//! Resource group listing (the scope enumerator)

use crate::arm::client::ArmClient;
use crate::config::api;
use crate::error::Result;
use crate::paging::{Page, PageSource};

use super::models::ResourceGroup;

const ERROR_CONTEXT: &str = "resource groups";

/// Lists the resource groups of the client's subscription, page by page
pub struct ResourceGroupSource {
    client: ArmClient,
}

impl ResourceGroupSource {
    pub fn new(client: ArmClient) -> Self {
        Self { client }
    }

    fn first_page_url(&self) -> String {
        let path = format!(
            "{}/{}",
            self.client.subscription_path(),
            api::RESOURCE_GROUPS
        );
        self.client.url(&path, api::RESOURCE_GROUPS_API_VERSION)
    }
}

impl PageSource for ResourceGroupSource {
    type Scope = ();
    type Item = ResourceGroup;

    async fn fetch_first(&self, _scope: &()) -> Result<Page<ResourceGroup>> {
        self.client
            .fetch_page(&self.first_page_url(), ERROR_CONTEXT)
            .await
    }

    async fn fetch_next(&self, _scope: &(), token: &str) -> Result<Page<ResourceGroup>> {
        self.client.fetch_page(token, ERROR_CONTEXT).await
    }
}
