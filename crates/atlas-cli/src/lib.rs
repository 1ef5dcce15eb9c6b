//! # atlas-cli: Command-Line Interface for the Country Atlas
//!
//! Provides the `atlas` command.
//!
//! ## Subcommands
//!
//! - `atlas get <CODE>`: Print one country record.
//! - `atlas list`: One line per dataset entry.
//! - `atlas audit`: Data-quality report for the dataset.
//! - `atlas export`: Write the whole dataset as JSON or YAML.
//!
//! Every subcommand reads the embedded dataset unless `--data PATH` names
//! another file:
//!
//! ```bash
//! atlas get fr --format json
//! atlas list --codes-only
//! atlas audit --strict
//! atlas --data ./countries.yaml export --output countries.json
//! ```
//!
//! ## Exit Codes
//!
//! `0` success, `1` lookup or data-quality failure, `2` invalid input or
//! operational error.

pub mod audit;
pub mod export;
pub mod get;
pub mod list;

use std::borrow::Cow;
use std::path::Path;

use anyhow::{Context, Result};
use atlas_data::Dataset;

/// Load the dataset named by `--data`, or the embedded one.
pub fn load_dataset(path: Option<&Path>) -> Result<Cow<'static, Dataset>> {
    match path {
        Some(path) => {
            let dataset = Dataset::load(path)
                .with_context(|| format!("failed to load dataset from {}", path.display()))?;
            tracing::info!(path = %path.display(), entries = dataset.len(), "using dataset file");
            Ok(Cow::Owned(dataset))
        }
        None => {
            let dataset = atlas_data::builtin().context("embedded dataset is corrupt")?;
            Ok(Cow::Borrowed(dataset))
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use atlas_data::Dataset;

    /// Small dataset with one of each kind of entry.
    pub fn sample() -> Dataset {
        Dataset::from_json_str(
            r#"{
                "FR": {
                    "name": "France",
                    "officialName": "French Republic",
                    "isoAlpha2": "FR",
                    "isoAlpha3": "FRA",
                    "numericCode": "250",
                    "dialingCode": "+33",
                    "capital": "Paris",
                    "region": "Europe",
                    "subregion": "Western Europe",
                    "population": 68170000,
                    "currency": {"code": "EUR", "symbol": "€", "name": "Euro"},
                    "firstLanguage": "French",
                    "otherLanguages": ["Breton", "Occitan"],
                    "neighborCountries": ["BE"]
                },
                "BE": {
                    "name": "Belgium",
                    "isoAlpha2": "BE",
                    "isoAlpha3": "BEL",
                    "numericCode": "056",
                    "capital": "N/A"
                },
                "PS": {"error": "Failed to retrieve a valid response after retries."}
            }"#,
        )
        .unwrap()
    }

    /// Run a handler against a buffer and return its exit code and output.
    pub fn capture(
        run: impl FnOnce(&mut Vec<u8>) -> anyhow::Result<u8>,
    ) -> (u8, String) {
        let mut out = Vec::new();
        let code = run(&mut out).unwrap();
        (code, String::from_utf8(out).unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_embedded_dataset_by_default() {
        let ds = load_dataset(None).unwrap();
        assert!(matches!(ds, Cow::Borrowed(_)));
        assert_eq!(ds.len(), 250);
    }

    #[test]
    fn loads_dataset_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("countries.yaml");
        std::fs::write(&path, testing::sample().to_yaml().unwrap()).unwrap();

        let ds = load_dataset(Some(&path)).unwrap();
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn missing_dataset_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        let err = load_dataset(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("nope.json"));
    }
}
