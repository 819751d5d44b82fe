/// Configuration constants for the ARM API
pub mod api {
    /// Default Azure Resource Manager endpoint
    pub const DEFAULT_ENDPOINT: &str = "https://management.azure.com";

    /// Query parameter carrying the API version
    pub const API_VERSION_PARAM: &str = "api-version";

    /// API version used for resource group listings
    pub const RESOURCE_GROUPS_API_VERSION: &str = "2021-04-01";

    /// Subscriptions path segment
    pub const SUBSCRIPTIONS: &str = "subscriptions";

    /// Resource groups collection (listing form)
    pub const RESOURCE_GROUPS: &str = "resourcegroups";

    /// Resource groups segment inside resource IDs
    pub const RESOURCE_GROUPS_SEGMENT: &str = "resourceGroups";

    /// Providers segment inside resource IDs
    pub const PROVIDERS: &str = "providers";
}

/// Configuration constants for credentials and subscription lookup
pub mod credentials {
    /// Environment variable names for the bearer token (checked in order)
    pub const TOKEN_ENV_VARS: &[&str] = &["AZURE_ACCESS_TOKEN", "ARM_ACCESS_TOKEN"];

    /// Environment variable names for the subscription (checked in order)
    pub const SUBSCRIPTION_ENV_VARS: &[&str] = &["AZURE_SUBSCRIPTION_ID", "ARM_SUBSCRIPTION_ID"];
}

/// Configuration constants for endpoint resolution
pub mod endpoint {
    /// Environment variable overriding the ARM endpoint
    pub const ENV_VAR: &str = "ARM_ENDPOINT";
}

/// Configuration constants for the context file
pub mod context {
    /// Directory under $HOME holding the config file
    pub const DIR_NAME: &str = ".armpager";

    /// Config file name
    pub const FILE_NAME: &str = "config.json";

    /// Environment variable selecting the active context
    pub const ENV_VAR: &str = "ARMPAGER_CONTEXT";
}

/// Default values for the CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
