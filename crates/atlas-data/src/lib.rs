//! # atlas-data: The Country Dataset
//!
//! Holds the dataset and everything that reads it as a whole.
//!
//! ## Embedded Dataset (`builtin`)
//!
//! `data/countries.json` is compiled into the crate and parsed once on
//! first use. Key function:
//!
//! - [`builtin()`]: the process-wide, immutable [`Dataset`].
//! - [`get`]: lookup against it.
//!
//! ## Dataset Container (`dataset`)
//!
//! [`Dataset`] maps [`CountryCode`](atlas_core::CountryCode) to
//! [`Entry`](atlas_core::Entry). It loads from JSON or YAML, writes back
//! either format, and offers lookup and ordered iteration. Keys are unique
//! after normalization.
//!
//! ## Data-Quality Audit (`audit`)
//!
//! [`audit()`] reports failed placeholders, key/`isoAlpha2` mismatches,
//! missing required fields, values kept because they did not fit their
//! field, sentinels and dangling neighbor codes. It never rejects or
//! repairs an entry.
//!
//! ## Crate Policy
//!
//! - Depends only on `atlas-core` internally.
//! - The dataset is read-only once loaded. There is no insert or update API.

pub mod audit;
pub mod builtin;
pub mod dataset;
pub mod error;

pub use audit::{audit, AuditReport, Finding, FindingKind, Severity};
pub use builtin::{builtin, get, BUILTIN_JSON};
pub use dataset::{Dataset, DatasetFormat};
pub use error::DatasetError;
