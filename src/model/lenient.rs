//! Tolerant decoding for optional record fields.
//!
//! The rockets endpoint is not strict about optional values: they may be
//! missing, `null`, or carry the wrong JSON type. All three decode to `None`
//! instead of failing the whole record. Pair with `#[serde(default)]` so a
//! missing key never reaches the deserializer.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(err) => {
            tracing::debug!("Ignoring malformed optional field: {}", err);
            Ok(None)
        }
    }
}
