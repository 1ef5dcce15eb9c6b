//! # Dataset Entry
//!
//! A dataset value is either a country record or the placeholder the
//! upstream generator wrote when it gave up on a country:
//!
//! ```json
//! {"error": "Failed to retrieve a valid response after retries."}
//! ```
//!
//! The placeholder is a data-quality defect, not a record with most fields
//! missing. `Entry` keeps the two apart so every consumer decides what to
//! do with it.
//!
//! ## Classification
//!
//! An object is a failed entry when it has an `error` key and none of the
//! identifier keys listed in [`IDENTIFIER_KEYS`]. Every other object is a
//! [`CountryRecord`]; values that do not fit their field are kept in the
//! record as stored rather than failing the entry.

use std::collections::BTreeMap;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::record::CountryRecord;

/// Keys whose presence marks an object as a record attempt, even when it
/// also carries an `error` key.
pub const IDENTIFIER_KEYS: &[&str] = &["name", "officialName", "isoAlpha2", "isoAlpha3"];

/// The placeholder left in place of a record that could not be produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedEntry {
    /// Error text as stored in the dataset.
    pub error: String,
    /// Any other keys next to `error`, kept verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl FailedEntry {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            extra: BTreeMap::new(),
        }
    }
}

/// One value of the dataset map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Entry {
    /// A country record. Boxed: records are large and failures tiny.
    Country(Box<CountryRecord>),
    /// A failed placeholder.
    Failed(FailedEntry),
}

impl Entry {
    /// Classify and convert a JSON value.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if the value is not an object.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        match value {
            Value::Object(map) if is_failure(&map) => {
                let failed: FailedEntry = serde_json::from_value(Value::Object(map))?;
                Ok(Self::Failed(failed))
            }
            Value::Object(map) => Ok(Self::Country(Box::new(CountryRecord::from_object(map)))),
            other => Err(de::Error::invalid_type(
                unexpected(&other),
                &"a country record object",
            )),
        }
    }

    /// The record, unless this is a failed placeholder.
    pub fn as_country(&self) -> Option<&CountryRecord> {
        match self {
            Self::Country(record) => Some(record.as_ref()),
            Self::Failed(_) => None,
        }
    }

    /// The stored error text, if this is a failed placeholder.
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Country(_) => None,
            Self::Failed(f) => Some(&f.error),
        }
    }

    /// Returns true for a country record.
    pub fn is_country(&self) -> bool {
        matches!(self, Self::Country(_))
    }
}

impl From<CountryRecord> for Entry {
    fn from(record: CountryRecord) -> Self {
        Self::Country(Box::new(record))
    }
}

impl From<FailedEntry> for Entry {
    fn from(failed: FailedEntry) -> Self {
        Self::Failed(failed)
    }
}

impl<'de> Deserialize<'de> for Entry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(de::Error::custom)
    }
}

fn is_failure(map: &Map<String, Value>) -> bool {
    map.get("error").is_some_and(Value::is_string)
        && !IDENTIFIER_KEYS.iter().any(|k| map.contains_key(*k))
}

fn unexpected(value: &Value) -> de::Unexpected<'_> {
    match value {
        Value::Null => de::Unexpected::Unit,
        Value::Bool(b) => de::Unexpected::Bool(*b),
        Value::Number(_) => de::Unexpected::Other("number"),
        Value::String(s) => de::Unexpected::Str(s),
        Value::Array(_) => de::Unexpected::Seq,
        Value::Object(_) => de::Unexpected::Map,
    }
}
