//! # Data-Quality Audit
//!
//! Walks a [`Dataset`] and reports the defects a careful reader would
//! trip over. The audit only reports; no entry is rejected, repaired or
//! dropped, and the dataset is the same after the audit as before.
//!
//! ## Checks
//!
//! | Finding                | Severity | Trigger                                   |
//! |------------------------|----------|-------------------------------------------|
//! | `Unavailable`          | error    | entry is a failed placeholder             |
//! | `KeyMismatch`          | error    | `isoAlpha2` differs from the dataset key  |
//! | `MissingField`         | error    | required field absent or blank            |
//! | `MistypedField`        | warning  | value does not fit the field's type       |
//! | `SentinelField`        | warning  | field holds a placeholder such as `N/A`   |
//! | `UnresolvedNeighbor`   | warning  | neighbor code has no entry in the dataset |
//!
//! An entry is well-formed when it has no error-severity finding.

use std::fmt;

use atlas_core::{CountryCode, CountryRecord, Entry};

use crate::dataset::Dataset;

/// How much a finding matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// The data is incomplete or contradicts itself.
    Warning,
    /// The entry cannot be used as a country record.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => f.write_str("warning"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// What is wrong with an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindingKind {
    /// The entry is a failed placeholder.
    Unavailable {
        /// Error text stored in the placeholder.
        reason: String,
    },
    /// The record's `isoAlpha2` names a different code than its key.
    KeyMismatch {
        /// The `isoAlpha2` value as stored.
        declared: String,
    },
    /// A required field is absent or blank.
    MissingField {
        /// JSON name of the field.
        field: &'static str,
    },
    /// A known field holds a value of another type, kept as stored.
    MistypedField {
        /// JSON name of the field.
        field: &'static str,
    },
    /// A field holds a sentinel value.
    SentinelField {
        /// JSON name of the field, dotted for nested fields.
        field: &'static str,
    },
    /// A `neighborCountries` code has no entry in the dataset.
    UnresolvedNeighbor {
        /// The neighbor code as stored.
        neighbor: String,
    },
}

impl FindingKind {
    /// Severity of this kind of finding.
    pub fn severity(&self) -> Severity {
        match self {
            Self::Unavailable { .. } | Self::KeyMismatch { .. } | Self::MissingField { .. } => {
                Severity::Error
            }
            Self::MistypedField { .. }
            | Self::SentinelField { .. }
            | Self::UnresolvedNeighbor { .. } => Severity::Warning,
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { reason } => write!(f, "entry unavailable: {reason}"),
            Self::KeyMismatch { declared } => {
                write!(f, "key does not match isoAlpha2 '{declared}'")
            }
            Self::MissingField { field } => {
                write!(f, "required field '{field}' is missing or empty")
            }
            Self::MistypedField { field } => {
                write!(f, "field '{field}' does not fit its expected type; kept as stored")
            }
            Self::SentinelField { field } => write!(f, "field '{field}' holds a placeholder value"),
            Self::UnresolvedNeighbor { neighbor } => {
                write!(f, "neighbor '{neighbor}' is not in the dataset")
            }
        }
    }
}

/// One defect found in one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Dataset key of the entry.
    pub code: CountryCode,
    /// What was found.
    pub kind: FindingKind,
}

impl Finding {
    /// Severity of the finding.
    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {}", self.code, self.severity(), self.kind)
    }
}

/// Result of auditing a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditReport {
    /// Number of entries audited, failed placeholders included.
    pub total: usize,
    /// Entries without any error-severity finding.
    pub well_formed: usize,
    /// All findings, grouped by entry in code order.
    pub findings: Vec<Finding>,
}

impl AuditReport {
    /// Error-severity findings.
    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity() == Severity::Error)
    }

    /// Warning-severity findings.
    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity() == Severity::Warning)
    }

    /// Returns true if there are no findings at all.
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Findings for a single entry.
    pub fn for_code<'a>(&'a self, code: &'a CountryCode) -> impl Iterator<Item = &'a Finding> {
        self.findings.iter().filter(move |f| &f.code == code)
    }
}

/// Audit every entry of `dataset`.
pub fn audit(dataset: &Dataset) -> AuditReport {
    let mut findings = Vec::new();
    let mut well_formed = 0;

    for (code, entry) in dataset.iter() {
        let kinds = match entry {
            Entry::Failed(failed) => vec![FindingKind::Unavailable {
                reason: failed.error.clone(),
            }],
            Entry::Country(record) => audit_record(dataset, code, record),
        };
        if kinds.iter().all(|k| k.severity() < Severity::Error) {
            well_formed += 1;
        }
        findings.extend(kinds.into_iter().map(|kind| Finding {
            code: code.clone(),
            kind,
        }));
    }

    let report = AuditReport {
        total: dataset.len(),
        well_formed,
        findings,
    };
    tracing::debug!(
        total = report.total,
        well_formed = report.well_formed,
        errors = report.errors().count(),
        warnings = report.warnings().count(),
        "audited dataset"
    );
    report
}

fn audit_record(dataset: &Dataset, code: &CountryCode, record: &CountryRecord) -> Vec<FindingKind> {
    let mut kinds = Vec::new();
    let mistyped = record.mistyped_fields();

    match record.iso_alpha2.as_deref().map(str::trim) {
        None if mistyped.contains(&"isoAlpha2") => {
            let declared = record.extra.get("isoAlpha2").map(ToString::to_string);
            kinds.push(FindingKind::KeyMismatch {
                declared: declared.unwrap_or_default(),
            });
        }
        None | Some("") => kinds.push(FindingKind::MissingField { field: "isoAlpha2" }),
        Some(declared) => {
            if CountryCode::new(declared).ok().as_ref() != Some(code) {
                kinds.push(FindingKind::KeyMismatch {
                    declared: declared.to_string(),
                });
            }
        }
    }

    let missing = record.missing_required_fields();
    kinds.extend(
        missing
            .iter()
            .map(|&field| FindingKind::MissingField { field }),
    );

    kinds.extend(
        mistyped
            .into_iter()
            .map(|field| FindingKind::MistypedField { field }),
    );

    // Blank fields are sentinels too; do not report a missing field twice.
    kinds.extend(
        record
            .sentinel_fields()
            .into_iter()
            .filter(|field| !missing.contains(field))
            .map(|field| FindingKind::SentinelField { field }),
    );

    for neighbor in record.neighbors() {
        let resolved = CountryCode::new(neighbor)
            .ok()
            .is_some_and(|n| dataset.contains(&n));
        if !resolved {
            kinds.push(FindingKind::UnresolvedNeighbor {
                neighbor: neighbor.clone(),
            });
        }
    }

    kinds
}
