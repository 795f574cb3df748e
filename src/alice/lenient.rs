//! Tolerant field deserializers for webhook envelopes
//!
//! The platform occasionally sends `null` or a differently-typed value where a
//! field is normally present. These helpers coerce such values to the field's
//! default so only non-JSON or non-object bodies are rejected.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Any value that does not deserialize into `T` becomes `T::default()`
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Strings pass through, numbers and booleans are rendered, anything else is empty
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_to_string(Value::deserialize(deserializer)?).unwrap_or_default())
}

/// Array of strings; non-string scalars are rendered, other elements dropped
pub fn strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items.into_iter().filter_map(scalar_to_string).collect()),
        _ => Ok(Vec::new()),
    }
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
