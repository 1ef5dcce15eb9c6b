//! # Sentinel Values
//!
//! The dataset marks missing data with placeholder strings instead of
//! omitting the field, and does so inconsistently: `"N/A"` in one record,
//! `"Unknown"` or an empty string in another. This module recognizes the
//! placeholders so readers can treat them as absent.
//!
//! `"None"` is not a sentinel. It is a real answer in fields such as
//! `visaRequirement`.

/// Placeholder spellings treated as "no data", compared case-insensitively
/// after trimming.
const SENTINELS: &[&str] = &["n/a", "na", "unknown", "not available", "-"];

/// Returns true if `value` is a placeholder for missing data.
///
/// Blank strings count as sentinels.
pub fn is_sentinel(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty()
        || SENTINELS
            .iter()
            .any(|s| trimmed.eq_ignore_ascii_case(s))
}

/// Filters an optional text field down to real data.
///
/// Returns `None` when the field is absent or holds a sentinel.
pub fn known(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !is_sentinel(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_placeholders() {
        for v in ["N/A", "n/a", " NA ", "Unknown", "Not available", "-", "", "   "] {
            assert!(is_sentinel(v), "{v:?} should be a sentinel");
        }
    }

    #[test]
    fn real_values_are_not_sentinels() {
        for v in ["Paris", "None", "0", "NAD", "N/A/B"] {
            assert!(!is_sentinel(v), "{v:?} should not be a sentinel");
        }
    }

    #[test]
    fn known_filters_absent_and_sentinels() {
        assert_eq!(known(Some("Bern")), Some("Bern"));
        assert_eq!(known(Some("N/A")), None);
        assert_eq!(known(None), None);
    }
}
