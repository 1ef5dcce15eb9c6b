//! # Figures
//!
//! Numeric-looking fields (population, life expectancy, literacy rate,
//! area) are not typed consistently in the dataset. The same field is an
//! integer in one record, a decimal in another and free text such as
//! `"99%"` or `"N/A"` in a third. `Figure` keeps whichever form was stored
//! and offers a best-effort numeric view.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sentinel::is_sentinel;

/// A numeric-or-text value as stored in the dataset.
///
/// Serialized untagged, so each variant writes back the JSON shape it was
/// read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Figure {
    /// A non-negative whole number, e.g. a population count.
    Integer(u64),
    /// A negative whole number.
    Signed(i64),
    /// Any other JSON number.
    Decimal(f64),
    /// Free text, possibly a sentinel.
    Text(String),
}

impl Figure {
    /// Best-effort numeric value.
    ///
    /// Text is parsed after stripping thousands separators, a trailing `%`
    /// and surrounding whitespace. Sentinels and unparseable text yield
    /// `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(*n as f64),
            Self::Signed(n) => Some(*n as f64),
            Self::Decimal(x) => Some(*x),
            Self::Text(s) => {
                if is_sentinel(s) {
                    return None;
                }
                let cleaned: String = s
                    .trim()
                    .trim_end_matches('%')
                    .chars()
                    .filter(|c| *c != ',')
                    .collect();
                cleaned.trim().parse().ok()
            }
        }
    }

    /// Returns true if the figure is a sentinel string.
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Self::Text(s) if is_sentinel(s))
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Signed(n) => write!(f, "{n}"),
            Self::Decimal(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for Figure {
    fn from(n: u64) -> Self {
        Self::Integer(n)
    }
}

impl From<i64> for Figure {
    fn from(n: i64) -> Self {
        u64::try_from(n).map_or(Self::Signed(n), Self::Integer)
    }
}

impl From<f64> for Figure {
    fn from(x: f64) -> Self {
        Self::Decimal(x)
    }
}

impl From<&str> for Figure {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_each_shape() {
        let figures: Vec<Figure> = serde_json::from_str(r#"[68170000, 82.5, "99%"]"#).unwrap();
        assert_eq!(figures[0], Figure::Integer(68_170_000));
        assert_eq!(figures[1], Figure::Decimal(82.5));
        assert_eq!(figures[2], Figure::Text("99%".to_string()));
    }

    #[test]
    fn negative_whole_numbers_stay_whole() {
        let f: Figure = serde_json::from_str("-3").unwrap();
        assert_eq!(f, Figure::Signed(-3));
        assert_eq!(f.as_f64(), Some(-3.0));
        assert_eq!(serde_json::to_string(&f).unwrap(), "-3");
        assert_eq!(f.to_string(), "-3");
        let f: Figure = serde_json::from_str("-3.0").unwrap();
        assert_eq!(f, Figure::Decimal(-3.0));
    }

    #[test]
    fn from_i64_prefers_unsigned() {
        assert_eq!(Figure::from(7i64), Figure::Integer(7));
        assert_eq!(Figure::from(-7i64), Figure::Signed(-7));
    }

    #[test]
    fn numeric_view_of_text() {
        assert_eq!(Figure::from("99%").as_f64(), Some(99.0));
        assert_eq!(Figure::from("77.7%").as_f64(), Some(77.7));
        assert_eq!(Figure::from("1,234,567").as_f64(), Some(1_234_567.0));
        assert_eq!(Figure::from("N/A").as_f64(), None);
        assert_eq!(Figure::from("about a million").as_f64(), None);
    }

    #[test]
    fn sentinel_detection() {
        assert!(Figure::from("N/A").is_sentinel());
        assert!(!Figure::from("99%").is_sentinel());
        assert!(!Figure::Integer(0).is_sentinel());
    }

    #[test]
    fn serializes_back_to_original_shape() {
        assert_eq!(serde_json::to_string(&Figure::Integer(5)).unwrap(), "5");
        assert_eq!(serde_json::to_string(&Figure::Decimal(82.5)).unwrap(), "82.5");
        assert_eq!(serde_json::to_string(&Figure::from("N/A")).unwrap(), "\"N/A\"");
    }

    #[test]
    fn display_matches_stored_form() {
        assert_eq!(Figure::Integer(42).to_string(), "42");
        assert_eq!(Figure::from("99%").to_string(), "99%");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every figure writes back the JSON shape it was read from.
        #[test]
        fn integer_round_trip(n in any::<u64>()) {
            let json = serde_json::to_string(&Figure::Integer(n)).unwrap();
            prop_assert_eq!(serde_json::from_str::<Figure>(&json).unwrap(), Figure::Integer(n));
        }

        #[test]
        fn signed_round_trip(n in i64::MIN..0) {
            let json = serde_json::to_string(&Figure::Signed(n)).unwrap();
            prop_assert_eq!(serde_json::from_str::<Figure>(&json).unwrap(), Figure::Signed(n));
        }

        #[test]
        fn decimal_round_trip(x in -1.0e12f64..1.0e12) {
            let json = serde_json::to_string(&Figure::Decimal(x)).unwrap();
            prop_assert_eq!(serde_json::from_str::<Figure>(&json).unwrap(), Figure::Decimal(x));
        }

        /// Numeric-looking text stays text.
        #[test]
        fn text_round_trip(s in "[0-9A-Za-z,.% /-]{0,16}") {
            let figure = Figure::Text(s);
            let json = serde_json::to_string(&figure).unwrap();
            prop_assert_eq!(serde_json::from_str::<Figure>(&json).unwrap(), figure);
        }

        /// Thousands separators do not change the numeric view.
        #[test]
        fn separators_ignored(n in 0u64..1_000_000_000) {
            let grouped = n
                .to_string()
                .as_bytes()
                .rchunks(3)
                .rev()
                .map(|c| std::str::from_utf8(c).unwrap())
                .collect::<Vec<_>>()
                .join(",");
            prop_assert_eq!(Figure::Text(grouped).as_f64(), Some(n as f64));
        }
    }
}
