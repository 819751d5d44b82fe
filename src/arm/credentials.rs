//! Token, subscription and endpoint resolution from multiple sources

use log::debug;

use crate::config::{api, credentials, endpoint};
use crate::error::{ArmError, Result};

/// Environment lookup; empty values count as unset
type EnvLookup = fn(&str) -> Option<String>;

fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// First variable of `names` that is set, with its name
fn first_env(env: EnvLookup, names: &[&'static str]) -> Option<(&'static str, String)> {
    names
        .iter()
        .find_map(|name| env(name).map(|value| (*name, value)))
}

/// Bearer token resolution with fallback logic
pub struct TokenResolver {
    env: EnvLookup,
}

impl Default for TokenResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenResolver {
    pub fn new() -> Self {
        Self { env: process_env }
    }

    #[cfg(test)]
    fn with_env(env: EnvLookup) -> Self {
        Self { env }
    }

    /// Resolve token from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variables (AZURE_ACCESS_TOKEN, ARM_ACCESS_TOKEN - in order)
    /// 3. Active context token
    pub fn resolve(&self, cli_token: Option<&str>, context_token: Option<&str>) -> Result<String> {
        if let Some(token) = cli_token {
            debug!("Using token from CLI argument");
            return Ok(token.to_string());
        }

        if let Some((var, token)) = first_env(self.env, credentials::TOKEN_ENV_VARS) {
            debug!("Using token from {} environment variable", var);
            return Ok(token);
        }

        if let Some(token) = context_token {
            debug!("Using token from active context");
            return Ok(token.to_string());
        }

        Err(ArmError::TokenNotFound(Self::token_not_found_message()))
    }

    /// Generate helpful error message when token is not found
    fn token_not_found_message() -> String {
        format!(
            "No ARM access token found. Please provide a token using one of:\n\
             \n\
             1. CLI argument:      armpager --token <TOKEN>\n\
             2. Environment var:   export AZURE_ACCESS_TOKEN=<TOKEN>  (also: ARM_ACCESS_TOKEN)\n\
             3. Context:           armpager config set-context <NAME> --token <TOKEN>\n\
             \n\
             A token can be obtained with: az account get-access-token --query accessToken -o tsv\n\
             Checked: env vars [{}]",
            credentials::TOKEN_ENV_VARS.join(", ")
        )
    }
}

/// Subscription resolution with fallback logic
pub struct SubscriptionResolver {
    env: EnvLookup,
}

impl Default for SubscriptionResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SubscriptionResolver {
    pub fn new() -> Self {
        Self { env: process_env }
    }

    #[cfg(test)]
    fn with_env(env: EnvLookup) -> Self {
        Self { env }
    }

    /// Resolve subscription from multiple sources with fallback:
    /// 1. CLI argument
    /// 2. Environment variables (AZURE_SUBSCRIPTION_ID, ARM_SUBSCRIPTION_ID)
    /// 3. Active context subscription
    pub fn resolve(&self, cli_sub: Option<&str>, context_sub: Option<&str>) -> Result<String> {
        if let Some(sub) = cli_sub {
            debug!("Using subscription from CLI argument: {}", sub);
            return Ok(sub.to_string());
        }

        if let Some((var, sub)) = first_env(self.env, credentials::SUBSCRIPTION_ENV_VARS) {
            debug!("Using subscription from {} environment variable: {}", var, sub);
            return Ok(sub);
        }

        if let Some(sub) = context_sub {
            debug!("Using subscription from active context: {}", sub);
            return Ok(sub.to_string());
        }

        Err(ArmError::SubscriptionNotFound(format!(
            "No subscription ID found. Pass --subscription <ID>, set one of [{}], \
             or store it in a context with: armpager config set-context <NAME> --subscription <ID>",
            credentials::SUBSCRIPTION_ENV_VARS.join(", ")
        )))
    }
}

/// Endpoint resolution; always succeeds with the public cloud as fallback
pub struct EndpointResolver {
    env: EnvLookup,
}

impl Default for EndpointResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl EndpointResolver {
    pub fn new() -> Self {
        Self { env: process_env }
    }

    #[cfg(test)]
    fn with_env(env: EnvLookup) -> Self {
        Self { env }
    }

    /// CLI argument, then ARM_ENDPOINT, then active context, then the public cloud
    pub fn resolve(&self, cli_endpoint: Option<&str>, context_endpoint: Option<&str>) -> String {
        if let Some(ep) = cli_endpoint {
            debug!("Using endpoint from CLI argument: {}", ep);
            return ep.to_string();
        }

        if let Some(ep) = (self.env)(endpoint::ENV_VAR) {
            debug!(
                "Using endpoint from {} environment variable: {}",
                endpoint::ENV_VAR,
                ep
            );
            return ep;
        }

        if let Some(ep) = context_endpoint {
            debug!("Using endpoint from active context: {}", ep);
            return ep.to_string();
        }

        debug!("Using default endpoint: {}", api::DEFAULT_ENDPOINT);
        api::DEFAULT_ENDPOINT.to_string()
    }
}
