//! Decoding of the three JSON directories.
//!
//! Each directory is a single JSON object keyed by name. Key order is kept as
//! authored because the app list and the datatype matcher's containment
//! fallback both depend on it. A top-level `null` decodes as an empty
//! directory. Entries that are not objects, or that lack fields, decode with
//! empty strings for the missing fields.

use dss_core::entities::{AppEntry, DataTypeEntry, RelationIcon};
use dss_core::enums::RelationKind;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::SourceError;

#[derive(Debug, Default, Deserialize)]
struct IconFields {
    #[serde(default)]
    icon: String,
}

#[derive(Debug, Default, Deserialize)]
struct DataTypeFields {
    #[serde(default)]
    name: String,
    #[serde(default)]
    icon: String,
}

/// Decode the app directory (`name -> { icon }`).
///
/// # Errors
///
/// Returns [`SourceError::Json`] for malformed JSON, or
/// [`SourceError::Parse`] when the top level is not an object.
pub fn parse_apps(text: &str) -> Result<Vec<AppEntry>, SourceError> {
    Ok(object_entries(text)?
        .into_iter()
        .map(|(name, value)| {
            let fields: IconFields = fields_or_default(&name, value);
            AppEntry {
                name,
                icon: fields.icon,
            }
        })
        .collect())
}

/// Decode the arrows directory (`Shared|Collected|Both -> { icon }`).
///
/// Unknown keys and entries with an empty icon are skipped.
///
/// # Errors
///
/// Same as [`parse_apps`].
pub fn parse_relations(text: &str) -> Result<Vec<RelationIcon>, SourceError> {
    Ok(object_entries(text)?
        .into_iter()
        .filter_map(|(key, value)| {
            let Some(kind) = RelationKind::from_source_key(&key) else {
                tracing::debug!(key, "ignoring unknown relation kind");
                return None;
            };
            let fields: IconFields = fields_or_default(&key, value);
            (!fields.icon.is_empty()).then_some(RelationIcon {
                kind,
                icon: fields.icon,
            })
        })
        .collect())
}

/// Decode the datatype directory (`label -> { name, icon }`).
///
/// # Errors
///
/// Same as [`parse_apps`].
pub fn parse_datatypes(text: &str) -> Result<Vec<DataTypeEntry>, SourceError> {
    Ok(object_entries(text)?
        .into_iter()
        .map(|(key, value)| {
            let fields: DataTypeFields = fields_or_default(&key, value);
            DataTypeEntry {
                key,
                name: fields.name,
                icon: fields.icon,
            }
        })
        .collect())
}

fn object_entries(text: &str) -> Result<Map<String, Value>, SourceError> {
    match serde_json::from_str::<Value>(text)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => Err(SourceError::Parse(format!(
            "expected a JSON object at the top level, found {}",
            json_kind(&other)
        ))),
    }
}

fn fields_or_default<T>(key: &str, value: Value) -> T
where
    T: for<'de> Deserialize<'de> + Default,
{
    serde_json::from_value(value).unwrap_or_else(|error| {
        tracing::debug!(key, %error, "directory entry has no usable fields");
        T::default()
    })
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
