//! # Dataset Container
//!
//! The dataset is a single JSON object mapping an ISO 3166-1 alpha-2 code
//! to an [`Entry`]. [`Dataset`] holds that map with normalized keys in
//! code order and is immutable once built.
//!
//! ## Key Normalization
//!
//! Object keys are parsed with [`CountryCode::new`], so `"fr"` and `"FR"`
//! name the same entry. A document containing both is rejected rather
//! than silently keeping one of them.
//!
//! ## Formats
//!
//! JSON is the canonical format. YAML with the same shape is accepted and
//! produced for hand-editing. [`Dataset::load`] picks the format from the
//! file extension (`.yaml`/`.yml` for YAML, anything else for JSON).

use std::collections::btree_map::Entry as MapEntry;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use atlas_core::{AtlasError, CountryCode, CountryRecord, Entry};
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::DatasetError;

/// On-disk representation of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    /// A JSON object, pretty-printed on output.
    Json,
    /// A YAML mapping with the same shape.
    Yaml,
}

impl DatasetFormat {
    /// Format implied by a file extension. Unknown or missing extensions
    /// are treated as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

/// Country entries keyed by normalized alpha-2 code.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Dataset {
    entries: BTreeMap<CountryCode, Entry>,
}

impl Dataset {
    /// Parse a dataset from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let dataset: Self = serde_json::from_str(json)?;
        tracing::debug!(entries = dataset.len(), "parsed JSON dataset");
        Ok(dataset)
    }

    /// Parse a dataset from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, DatasetError> {
        let dataset: Self = serde_yaml::from_str(yaml)?;
        tracing::debug!(entries = dataset.len(), "parsed YAML dataset");
        Ok(dataset)
    }

    /// Load a dataset file, choosing the format from its extension.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::Load` naming the path if the file cannot be
    /// read or its contents are not a valid dataset.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let content = std::fs::read_to_string(path).map_err(|e| DatasetError::Load {
            path: path.display().to_string(),
            reason: format!("cannot read file: {e}"),
        })?;

        let parsed = match DatasetFormat::from_path(path) {
            DatasetFormat::Yaml => Self::from_yaml_str(&content),
            DatasetFormat::Json => Self::from_json_str(&content),
        };

        let dataset = parsed.map_err(|e| DatasetError::Load {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), entries = dataset.len(), "loaded dataset");
        Ok(dataset)
    }

    /// Pretty-printed JSON, keys in code order.
    pub fn to_json_pretty(&self) -> Result<String, DatasetError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// YAML, keys in code order.
    pub fn to_yaml(&self) -> Result<String, DatasetError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Serialize in the given format.
    pub fn to_format(&self, format: DatasetFormat) -> Result<String, DatasetError> {
        match format {
            DatasetFormat::Json => self.to_json_pretty(),
            DatasetFormat::Yaml => self.to_yaml(),
        }
    }

    /// Look up an entry by raw code.
    ///
    /// The code is normalized first. Malformed and unknown codes both
    /// yield `None`; use [`Dataset::record`] to tell them apart.
    pub fn get(&self, code: &str) -> Option<&Entry> {
        let code = CountryCode::new(code).ok()?;
        self.get_code(&code)
    }

    /// Look up an entry by normalized code.
    pub fn get_code(&self, code: &CountryCode) -> Option<&Entry> {
        let entry = self.entries.get(code);
        if let Some(reason) = entry.and_then(Entry::failure) {
            tracing::warn!(code = %code, reason, "lookup hit a failed entry");
        }
        entry
    }

    /// Look up a well-formed country record.
    ///
    /// # Errors
    ///
    /// - `AtlasError::InvalidCode` if `code` is not two ASCII letters.
    /// - `AtlasError::UnknownCode` if the dataset has no entry for it.
    /// - `AtlasError::EntryUnavailable` if the entry is a failed placeholder.
    pub fn record(&self, code: &str) -> Result<&CountryRecord, AtlasError> {
        let code = CountryCode::new(code)?;
        match self.get_code(&code) {
            None => Err(AtlasError::UnknownCode(code)),
            Some(Entry::Country(record)) => Ok(record.as_ref()),
            Some(Entry::Failed(failed)) => Err(AtlasError::EntryUnavailable {
                code,
                reason: failed.error.clone(),
            }),
        }
    }

    /// Resolve a record's neighbor codes to dataset entries.
    ///
    /// Neighbor codes that are malformed or absent from the dataset are
    /// skipped with a warning. Failed neighbor entries are returned as
    /// they are.
    pub fn neighbors(&self, code: &str) -> Result<Vec<(&CountryCode, &Entry)>, AtlasError> {
        let record = self.record(code)?;
        let mut resolved = Vec::with_capacity(record.neighbors().len());
        for raw in record.neighbors() {
            let found = CountryCode::new(raw)
                .ok()
                .and_then(|n| self.entries.get_key_value(&n));
            match found {
                Some(pair) => resolved.push(pair),
                None => tracing::warn!(code, neighbor = %raw, "neighbor code not in dataset"),
            }
        }
        Ok(resolved)
    }

    /// All entries in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&CountryCode, &Entry)> {
        self.entries.iter()
    }

    /// All codes in order.
    pub fn codes(&self) -> impl Iterator<Item = &CountryCode> {
        self.entries.keys()
    }

    /// Well-formed country records in code order.
    pub fn countries(&self) -> impl Iterator<Item = (&CountryCode, &CountryRecord)> {
        self.entries
            .iter()
            .filter_map(|(code, entry)| entry.as_country().map(|r| (code, r)))
    }

    /// Failed placeholders in code order, with their stored error text.
    pub fn failures(&self) -> impl Iterator<Item = (&CountryCode, &str)> {
        self.entries
            .iter()
            .filter_map(|(code, entry)| entry.failure().map(|reason| (code, reason)))
    }

    /// Returns true if the dataset has an entry for `code`.
    pub fn contains(&self, code: &CountryCode) -> bool {
        self.entries.contains_key(code)
    }

    /// Number of entries, failed ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(CountryCode, Entry)> for Dataset {
    /// Later duplicates replace earlier ones; only deserialization rejects
    /// duplicate keys.
    fn from_iter<I: IntoIterator<Item = (CountryCode, Entry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = (&'a CountryCode, &'a Entry);
    type IntoIter = std::collections::btree_map::Iter<'a, CountryCode, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<'de> Deserialize<'de> for Dataset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DatasetVisitor)
    }
}

struct DatasetVisitor;

impl<'de> Visitor<'de> for DatasetVisitor {
    type Value = Dataset;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of country codes to country records")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Dataset, A::Error> {
        let mut entries = BTreeMap::new();
        while let Some(key) = map.next_key::<String>()? {
            let code = CountryCode::new(&key).map_err(de::Error::custom)?;
            match entries.entry(code) {
                MapEntry::Occupied(slot) => {
                    return Err(de::Error::custom(format!(
                        "duplicate country code {} (key '{key}')",
                        slot.key()
                    )));
                }
                MapEntry::Vacant(slot) => {
                    let entry: Entry = map.next_value()?;
                    slot.insert(entry);
                }
            }
        }
        Ok(Dataset { entries })
    }
}
