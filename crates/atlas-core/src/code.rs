//! # Country Code
//!
//! The dataset key. A `CountryCode` is always two uppercase ASCII letters;
//! the constructor trims and uppercases its input so every spelling of a
//! code resolves to the same entry.
//!
//! Membership in ISO 3166-1 is not checked. The dataset carries a few
//! user-assigned territory codes (`XK` for Kosovo) that must round-trip
//! like any other key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AtlasError;

/// A two-letter country code, normalized to uppercase.
///
/// # Validation
///
/// - Surrounding whitespace is ignored.
/// - Must be exactly 2 ASCII letters after trimming.
/// - Stored uppercase: `"fr"` and `"FR"` are the same code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    /// Create a country code, validating and normalizing the input.
    ///
    /// # Errors
    ///
    /// Returns [`AtlasError::InvalidCode`] if the trimmed input is not
    /// exactly two ASCII letters.
    pub fn new(value: impl AsRef<str>) -> Result<Self, AtlasError> {
        let raw = value.as_ref();
        let trimmed = raw.trim();

        if !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(AtlasError::InvalidCode {
                input: raw.to_string(),
                reason: "only ASCII letters are allowed".to_string(),
            });
        }
        if trimmed.len() != 2 {
            return Err(AtlasError::InvalidCode {
                input: raw.to_string(),
                reason: format!("expected 2 letters, got {}", trimmed.len()),
            });
        }

        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Access the normalized code.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercase form, as used in country-code top-level domains.
    pub fn to_lowercase(&self) -> String {
        self.0.to_ascii_lowercase()
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CountryCode {
    type Err = AtlasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = AtlasError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for CountryCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CountryCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
