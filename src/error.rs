use std::fmt;

/// Error type for ARM operations
#[derive(Debug)]
pub enum ArmError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned a non-success response
    Api { status: u16, message: String },
    /// Token not found in any source
    TokenNotFound(String),
    /// Subscription not found in any source
    SubscriptionNotFound(String),
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
    /// Caller passed an unusable argument (empty name, malformed resource ID)
    InvalidArgument(String),
    /// A resource handle outlived the collection it was listed from
    Detached(String),
}

impl ArmError {
    /// Whether this error came from a remote call (transport, status or payload)
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            ArmError::Http(_) | ArmError::Api { .. } | ArmError::Json(_)
        )
    }

    /// HTTP status of an API error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ArmError::Api { status, .. } => Some(*status),
            ArmError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl fmt::Display for ArmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArmError::Http(e) => write!(f, "HTTP request failed: {}", e),
            ArmError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            ArmError::TokenNotFound(msg) => write!(f, "{}", msg),
            ArmError::SubscriptionNotFound(msg) => write!(f, "{}", msg),
            ArmError::Json(msg) => write!(f, "JSON error: {}", msg),
            ArmError::Config(msg) => write!(f, "Configuration error: {}", msg),
            ArmError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            ArmError::Detached(msg) => write!(f, "Detached resource: {}", msg),
        }
    }
}

impl std::error::Error for ArmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArmError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ArmError {
    fn from(err: reqwest::Error) -> Self {
        ArmError::Http(err)
    }
}

impl From<serde_json::Error> for ArmError {
    fn from(err: serde_json::Error) -> Self {
        ArmError::Json(err.to_string())
    }
}

impl From<std::io::Error> for ArmError {
    fn from(err: std::io::Error) -> Self {
        ArmError::Config(err.to_string())
    }
}

/// Result type alias for ARM operations
pub type Result<T> = std::result::Result<T, ArmError>;
