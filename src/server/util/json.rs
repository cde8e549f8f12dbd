//! JSON encoding & decoding helpers.
//!
//! Timestamps are serialized as ISO-8601 strings by chrono's serde support, and parsing into a
//! type with a `NaiveDateTime` field turns those strings back into date values.

use dioxus_logger::tracing;
use serde::{de::DeserializeOwned, Serialize};

use crate::server::error::Error;

/// Parses a JSON string into `T`.
///
/// # Returns
/// - `Ok(T)` - The parsed value
/// - `Err(Error::ParseError)` - The input is not valid JSON or doesn't match `T`
pub fn parse_json<T: DeserializeOwned>(raw: &str) -> Result<T, Error> {
    serde_json::from_str(raw).map_err(|e| Error::ParseError(e.to_string()))
}

/// Converts an already parsed JSON value, such as a message payload, into `T`.
pub fn parse_json_value<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, Error> {
    serde_json::from_value(value).map_err(|e| Error::ParseError(e.to_string()))
}

/// Parses optional JSON, falling back to `T::default()` when it is absent or invalid.
pub fn parse_json_or_default<T: DeserializeOwned + Default>(raw: Option<&str>) -> T {
    let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
        return T::default();
    };

    match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Falling back to default for invalid JSON {:?}: {}", raw, e);

            T::default()
        }
    }
}

/// Serializes `value` into a JSON string.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, Error> {
    serde_json::to_string(value).map_err(|e| Error::ParseError(e.to_string()))
}
