//! # Audit Subcommand
//!
//! Prints the data-quality report for the dataset: a summary line, then
//! one line per finding. The report never changes the data; the exit
//! code is the only thing a CI job needs to look at.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use atlas_data::{audit, Dataset};

/// Arguments for the `atlas audit` subcommand.
#[derive(Args, Debug)]
pub struct AuditArgs {
    /// Treat warnings (sentinels, dangling neighbors) as failures.
    #[arg(long)]
    pub strict: bool,
}

/// Execute the audit subcommand.
///
/// Returns exit code: 0 when clean, 1 when errors exist (or, with
/// `--strict`, warnings).
pub fn run_audit(args: &AuditArgs, dataset: &Dataset, out: &mut dyn Write) -> Result<u8> {
    let report = audit(dataset);
    let errors = report.errors().count();
    let warnings = report.warnings().count();

    writeln!(
        out,
        "Entries: {}/{} well-formed",
        report.well_formed, report.total
    )?;
    writeln!(out, "Findings: {errors} error(s), {warnings} warning(s)")?;

    for finding in &report.findings {
        writeln!(out, "  {finding}")?;
    }

    tracing::info!(errors, warnings, strict = args.strict, "audit complete");

    let failed = errors > 0 || (args.strict && warnings > 0);
    Ok(u8::from(failed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{capture, sample};

    #[test]
    fn prints_summary_and_findings() {
        let ds = sample();
        let (code, text) = capture(|out| run_audit(&AuditArgs { strict: false }, &ds, out));
        assert_eq!(code, 1);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Entries: 2/3 well-formed");
        assert_eq!(lines[1], "Findings: 1 error(s), 1 warning(s)");
        assert!(lines.contains(&"  BE [warning] field 'capital' holds a placeholder value"));
        assert!(lines
            .iter()
            .any(|l| l.starts_with("  PS [error] entry unavailable:")));
    }

    #[test]
    fn warnings_pass_unless_strict() {
        let ds = Dataset::from_json_str(
            r#"{"BE": {"name": "Belgium", "isoAlpha2": "BE", "isoAlpha3": "BEL",
                       "numericCode": "056", "capital": "N/A"}}"#,
        )
        .unwrap();
        let (lenient, _) = capture(|out| run_audit(&AuditArgs { strict: false }, &ds, out));
        let (strict, _) = capture(|out| run_audit(&AuditArgs { strict: true }, &ds, out));
        assert_eq!(lenient, 0);
        assert_eq!(strict, 1);
    }

    #[test]
    fn clean_dataset_exits_0_even_when_strict() {
        let ds = Dataset::default();
        let (code, text) = capture(|out| run_audit(&AuditArgs { strict: true }, &ds, out));
        assert_eq!(code, 0);
        assert!(text.starts_with("Entries: 0/0 well-formed"));
    }
}
