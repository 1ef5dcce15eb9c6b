//! # Embedded Dataset
//!
//! `data/countries.json` is compiled into the binary and parsed on first
//! access. The parsed [`Dataset`] lives in a process-wide `OnceLock` and
//! is shared by every caller without locking.

use std::sync::OnceLock;

use atlas_core::Entry;

use crate::dataset::Dataset;
use crate::error::DatasetError;

/// Raw JSON text of the embedded dataset.
pub const BUILTIN_JSON: &str = include_str!("../data/countries.json");

static BUILTIN: OnceLock<Dataset> = OnceLock::new();

/// The embedded dataset, parsed once per process.
///
/// # Errors
///
/// Returns the parse error if the embedded JSON is not a valid dataset.
/// A failed parse is not cached; the next call tries again.
pub fn builtin() -> Result<&'static Dataset, DatasetError> {
    if let Some(dataset) = BUILTIN.get() {
        return Ok(dataset);
    }
    let dataset = Dataset::from_json_str(BUILTIN_JSON)?;
    tracing::debug!(entries = dataset.len(), "initialized embedded dataset");
    // A concurrent initializer may win; both parsed the same text.
    Ok(BUILTIN.get_or_init(|| dataset))
}

/// Look up a code in the embedded dataset.
///
/// Returns `Ok(None)` for malformed or unknown codes, like
/// [`Dataset::get`].
pub fn get(code: &str) -> Result<Option<&'static Entry>, DatasetError> {
    Ok(builtin()?.get(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_is_parsed_once() {
        let first = builtin().unwrap();
        let second = builtin().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn get_uses_embedded_data() {
        let entry = get("de").unwrap().unwrap();
        assert_eq!(
            entry.as_country().unwrap().iso_alpha3.as_deref(),
            Some("DEU")
        );
        assert!(get("ZZ").unwrap().is_none());
        assert!(get("123").unwrap().is_none());
    }

    #[test]
    fn concurrent_first_access_agrees() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| builtin().map(|ds| ds.len()).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 250);
        }
    }
}
