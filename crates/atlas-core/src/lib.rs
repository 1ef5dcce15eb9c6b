//! # atlas-core: Foundational Types for the Country Atlas
//!
//! This crate defines the typed model of a single dataset entry. Every other
//! crate in the workspace depends on `atlas-core`; it depends on nothing
//! internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype for the lookup key.** `CountryCode` is the only way to name
//!    an entry. Its constructor normalizes case and rejects anything that is
//!    not two ASCII letters, so `"fr"`, `" FR "` and `"FR"` are one key.
//!
//! 2. **Observed types, not enforced ones.** Every `CountryRecord` field is
//!    optional. The dataset was produced by an unreliable generator and
//!    field presence varies per record. Unknown keys are kept in
//!    `CountryRecord::extra`.
//!
//! 3. **Failures are values.** An entry is either a record or the failed
//!    placeholder the generator left behind (`{"error": "..."}`). The
//!    `Entry` enum makes callers handle the second case.
//!
//! 4. **Sentinels are detected, not rewritten.** `"N/A"` and friends stay in
//!    the data; [`sentinel::known`] filters them at read time.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `atlas-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod code;
pub mod entry;
pub mod error;
pub mod figure;
pub mod record;
pub mod sentinel;

// Re-export primary types for ergonomic imports.
pub use code::CountryCode;
pub use entry::{Entry, FailedEntry};
pub use error::AtlasError;
pub use figure::Figure;
pub use record::{
    Area, CountryRecord, Currency, Gdp, Government, HeadOfState, FIELD_NAMES, REQUIRED_FIELDS,
};
pub use sentinel::{is_sentinel, known};
