//! ARM HTTP client for API interactions

use log::{debug, warn};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use crate::arm::kind::{KindSource, ResourceKind};
use crate::arm::resource_groups::ResourceGroupSource;
use crate::arm::traits::{ApiListResponse, PaginatedResponse};
use crate::config::api;
use crate::error::{ArmError, Result};
use crate::paging::Page;
use crate::resources::GroupedResources;

/// ARM error body (`{"error": {"code": "...", "message": "..."}}`)
#[derive(Deserialize, Debug)]
struct ErrorBody {
    error: Option<ErrorDetail>,
}

#[derive(Deserialize, Debug)]
struct ErrorDetail {
    code: Option<String>,
    message: Option<String>,
}

/// ARM API client.
///
/// This is the transport shared by every enumeration; it holds no
/// per-enumeration state and is cheap to clone.
#[derive(Clone)]
pub struct ArmClient {
    client: Client,
    token: String,
    endpoint: String,
    subscription: String,
}

impl ArmClient {
    /// Create a new ARM client with optimized connection settings
    ///
    /// `endpoint` is either a host (`management.azure.com`) or a base URL.
    pub fn new(token: String, endpoint: String, subscription: String) -> Self {
        let client = Client::builder()
            // Connection pool settings - reuse connections
            .pool_max_idle_per_host(20)
            .pool_idle_timeout(Duration::from_secs(90))
            // TCP keepalive to maintain connections
            .tcp_keepalive(Duration::from_secs(60))
            // Timeouts
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            endpoint,
            subscription,
        }
    }

    /// Subscription all requests are issued against
    pub fn subscription(&self) -> &str {
        &self.subscription
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> String {
        let endpoint = self.endpoint.trim_end_matches('/');
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            endpoint.to_string()
        } else {
            format!("https://{}", endpoint)
        }
    }

    /// Whether `url` points at the configured endpoint (same scheme, host and port)
    pub(crate) fn is_own_origin(&self, url: &str) -> bool {
        match (Url::parse(&self.base_url()), Url::parse(url)) {
            (Ok(base), Ok(target)) => base.origin() == target.origin(),
            _ => false,
        }
    }

    /// `/subscriptions/{sub}` prefix
    pub(crate) fn subscription_path(&self) -> String {
        format!(
            "/{}/{}",
            api::SUBSCRIPTIONS,
            urlencoding::encode(&self.subscription)
        )
    }

    /// `/subscriptions/{sub}/resourceGroups/{rg}` prefix
    pub(crate) fn group_path(&self, group: &str) -> String {
        format!(
            "{}/{}/{}",
            self.subscription_path(),
            api::RESOURCE_GROUPS_SEGMENT,
            urlencoding::encode(group)
        )
    }

    /// Full URL for a path with its api-version
    pub(crate) fn url(&self, path: &str, api_version: &str) -> String {
        format!(
            "{}{}?{}={}",
            self.base_url(),
            path,
            api::API_VERSION_PARAM,
            api_version
        )
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Create a DELETE request builder with standard headers
    pub(crate) fn delete(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.delete(url))
    }

    /// Turn a non-success response into `ArmError::Api`, keeping the ARM error text
    async fn api_error(response: reqwest::Response, error_context: &str) -> ArmError {
        let status = response.status().as_u16();
        let detail = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .map(|e| match (e.code, e.message) {
                (Some(code), Some(message)) => format!(": {} ({})", message, code),
                (None, Some(message)) => format!(": {}", message),
                (Some(code), None) => format!(": {}", code),
                (None, None) => String::new(),
            })
            .unwrap_or_default();

        ArmError::Api {
            status,
            message: format!("Failed to fetch {}{}", error_context, detail),
        }
    }

    /// Parse an API response, returning error for non-success status codes
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(Self::api_error(response, error_context).await);
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetch one page of a listing.
    ///
    /// `url` is either a first-page URL or a `nextLink` returned earlier.
    /// One request, no retry.
    pub(crate) async fn fetch_page<T>(&self, url: &str, error_context: &str) -> Result<Page<T>>
    where
        T: DeserializeOwned,
    {
        debug!("Fetching {} from: {}", error_context, url);

        // the token must never leave the configured endpoint
        if !self.is_own_origin(url) {
            warn!("Refusing to follow page link outside {}: {}", self.base_url(), url);
            return Err(ArmError::InvalidArgument(format!(
                "page link for {} points outside the configured endpoint: {}",
                error_context, url
            )));
        }

        let response = self.get(url).send().await?;
        let list: ApiListResponse<T> = self.parse_api_response(response, error_context).await?;
        let page = list.into_page();

        debug!(
            "Page of {} returned {} items (more: {})",
            error_context,
            page.len(),
            page.has_more()
        );
        Ok(page)
    }

    /// Fetch a single resource by API path
    ///
    /// - Return None for 404
    /// - Return error for other non-success status codes
    pub(crate) async fn fetch_resource_by_path<T>(
        &self,
        path: &str,
        api_version: &str,
        resource_label: &str,
    ) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path, api_version);
        debug!("Fetching {} from: {}", resource_label, url);

        let response = self.get(&url).send().await?;

        match response.status().as_u16() {
            404 => {
                debug!("{} not found", resource_label);
                Ok(None)
            }
            _ => self
                .parse_api_response(response, resource_label)
                .await
                .map(Some),
        }
    }

    /// Delete a single resource by API path
    ///
    /// Returns `true` when the service accepted the delete and `false` when
    /// the resource was already absent.
    pub(crate) async fn delete_resource_by_path(
        &self,
        path: &str,
        api_version: &str,
        resource_label: &str,
    ) -> Result<bool> {
        let url = self.url(path, api_version);
        debug!("Deleting {} at: {}", resource_label, url);

        let response = self.delete(&url).send().await?;

        match response.status().as_u16() {
            200 | 202 | 204 => Ok(true),
            404 => {
                debug!("{} already absent", resource_label);
                Ok(false)
            }
            _ => {
                let context = format!("deletion of {}", resource_label);
                Err(Self::api_error(response, &context).await)
            }
        }
    }

    /// Resource group listing (the scope enumerator)
    pub fn resource_groups(&self) -> ResourceGroupSource {
        ResourceGroupSource::new(self.clone())
    }

    /// Collection of resources of kind `K` across all resource groups
    pub fn resources<K: ResourceKind>(&self) -> GroupedResources<ResourceGroupSource, KindSource<K>> {
        GroupedResources::new(self.resource_groups(), KindSource::new(self.clone()))
    }
}
