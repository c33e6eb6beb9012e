//! Key lookups over loosely shaped JSON documents.
//!
//! Stored documents spell some keys more than one way and may carry both
//! spellings at once. Every lookup takes the accepted spellings in priority
//! order and uses the first one holding a usable value; a duplicate never
//! rejects the document.

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::domain::DocumentRef;

/// Records built from one JSON object. Missing keys, `null`, and values of
/// the wrong type fall back to the record's defaults.
pub(crate) trait FromFields: Default {
    fn from_fields(fields: &Fields<'_>) -> Self;
}

#[derive(Clone, Copy)]
pub(crate) struct Fields<'a>(&'a Map<String, Value>);

impl<'a> Fields<'a> {
    pub(crate) fn new(map: &'a Map<String, Value>) -> Self {
        Self(map)
    }

    fn lookup<'k>(&self, keys: &'k [&'k str]) -> impl Iterator<Item = &'a Value> + 'k
    where
        'a: 'k,
    {
        let map = self.0;
        keys.iter().filter_map(move |key| map.get(*key))
    }

    pub(crate) fn text(&self, keys: &[&str]) -> Option<String> {
        self.lookup(keys)
            .filter_map(scalar_text)
            .find(|text| !text.trim().is_empty())
    }

    /// Like [`Fields::text`], but also unwraps `{ "$oid": "..." }` ids.
    pub(crate) fn identifier(&self, keys: &[&str]) -> Option<String> {
        self.lookup(keys)
            .filter_map(|value| match value {
                Value::Object(inner) => inner.get("$oid").and_then(scalar_text),
                other => scalar_text(other),
            })
            .find(|id| !id.trim().is_empty())
    }

    pub(crate) fn flag(&self, keys: &[&str]) -> bool {
        self.lookup(keys)
            .find(|value| !value.is_null())
            .is_some_and(truthy)
    }

    pub(crate) fn document(&self, keys: &[&str]) -> Option<DocumentRef> {
        self.lookup(keys)
            .filter_map(DocumentRef::from_value)
            .find(|document| !document.url.trim().is_empty())
    }

    pub(crate) fn record<T: FromFields>(&self, keys: &[&str]) -> T {
        self.lookup(keys)
            .find_map(Value::as_object)
            .map(|map| T::from_fields(&Fields(map)))
            .unwrap_or_default()
    }

    /// Object entries of the first array found; other entries are skipped.
    pub(crate) fn records<T: FromFields>(&self, keys: &[&str]) -> Vec<T> {
        self.lookup(keys)
            .find_map(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_object)
                    .map(|map| T::from_fields(&Fields(map)))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub(crate) fn bag(&self, keys: &[&str]) -> BTreeMap<String, Value> {
        self.lookup(keys)
            .find_map(Value::as_object)
            .map(|map| {
                map.iter()
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Entry point for `Deserialize` impls of top-level documents. Only the
/// outer value must be an object; everything inside it is lenient.
pub(crate) fn deserialize_object<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromFields,
{
    match Value::deserialize(deserializer)? {
        Value::Object(map) => Ok(T::from_fields(&Fields::new(&map))),
        other => Err(D::Error::custom(format!(
            "expected a JSON object, found {}",
            kind(&other)
        ))),
    }
}

/// Scalar rendered as text; booleans read as `Yes`/`No`.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(if *flag { "Yes" } else { "No" }.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_i64().is_some_and(|n| n != 0),
        Value::String(text) => matches!(
            text.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "1"
        ),
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
