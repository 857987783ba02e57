//! Field deserializers for third-party payloads.
//!
//! A field of the wrong type is treated like a missing one, so a single odd
//! value never rejects the whole record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// For `#[serde(default, deserialize_with = "folio_core::lenient::optional")]`:
/// `None` when the field is null or cannot be read as `T`.
pub fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
