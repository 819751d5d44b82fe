//! Common utilities for output formatters

use serde::Serialize;

use crate::error::{ArmError, Result};

/// Escape a value for CSV output
/// Handles commas, quotes, and newlines according to RFC 4180
pub fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Serialize data as pretty JSON
pub fn to_json<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Serialize data as YAML
pub fn to_yaml<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    serde_yml::to_string(data).map_err(|e| ArmError::Json(format!("YAML serialization: {}", e)))
}
