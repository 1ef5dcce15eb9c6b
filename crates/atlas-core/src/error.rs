//! # Error Types
//!
//! Errors raised while naming or reading dataset entries. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! Lookup errors carry the normalized code and, for failed placeholders,
//! the reason recorded in the data, so callers can report the defect
//! upstream instead of guessing at its content.

use thiserror::Error;

use crate::code::CountryCode;

/// Top-level error type for the country atlas.
#[derive(Error, Debug)]
pub enum AtlasError {
    /// The input is not a two-letter country code.
    #[error("invalid country code '{input}': {reason}")]
    InvalidCode {
        /// The raw input as given by the caller.
        input: String,
        /// Why the input was rejected.
        reason: String,
    },

    /// The code is well-formed but the dataset has no entry for it.
    #[error("no entry for country code {0}")]
    UnknownCode(CountryCode),

    /// The dataset has an entry for the code, but it is a failed
    /// placeholder rather than a country record.
    #[error("entry for {code} is unavailable: {reason}")]
    EntryUnavailable {
        /// The code whose entry failed.
        code: CountryCode,
        /// The error text stored in the placeholder.
        reason: String,
    },

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_code_message_names_input() {
        let err = AtlasError::InvalidCode {
            input: "F1".to_string(),
            reason: "must be letters".to_string(),
        };
        assert_eq!(err.to_string(), "invalid country code 'F1': must be letters");
    }

    #[test]
    fn unavailable_message_carries_reason() {
        let err = AtlasError::EntryUnavailable {
            code: CountryCode::new("ps").unwrap(),
            reason: "Failed to retrieve a valid response after retries.".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("entry for PS is unavailable"));
        assert!(msg.contains("after retries"));
    }
}
