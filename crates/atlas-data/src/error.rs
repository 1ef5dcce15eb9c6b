//! # Dataset Errors
//!
//! Failures while reading, parsing or writing a whole dataset. Lookup
//! failures stay [`AtlasError`]; they are wrapped here only when a dataset
//! operation surfaces them.

use atlas_core::AtlasError;
use thiserror::Error;

/// Error loading, parsing or serializing a [`Dataset`](crate::Dataset).
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The dataset file could not be read or parsed.
    #[error("dataset load error for '{path}': {reason}")]
    Load {
        /// Path to the file that failed to load.
        path: String,
        /// Reason the file could not be loaded.
        reason: String,
    },

    /// The JSON text is not a valid dataset.
    #[error("invalid JSON dataset: {0}")]
    Json(#[from] serde_json::Error),

    /// The YAML text is not a valid dataset.
    #[error("invalid YAML dataset: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A lookup or code error raised while working on the dataset.
    #[error(transparent)]
    Atlas(#[from] AtlasError),

    /// IO error writing the dataset.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_core::CountryCode;

    #[test]
    fn load_error_names_path() {
        let err = DatasetError::Load {
            path: "/tmp/countries.json".to_string(),
            reason: "cannot read file: not found".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/countries.json"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn atlas_errors_pass_through_unchanged() {
        let code = CountryCode::new("ZZ").unwrap();
        let inner = AtlasError::UnknownCode(code);
        let expected = inner.to_string();
        let err = DatasetError::from(inner);
        assert_eq!(err.to_string(), expected);
    }
}
