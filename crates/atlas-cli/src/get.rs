//! # Get Subcommand
//!
//! Prints one country record. A code with no usable record is a lookup
//! failure (exit 1); input that is not a country code is a usage error
//! (exit 2). The failed placeholder is reported with its stored reason
//! instead of being printed as an empty record.

use std::fmt::Display;
use std::io::Write;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use atlas_core::{AtlasError, CountryRecord};
use atlas_data::Dataset;

/// Output format for a single record.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecordFormat {
    /// Human-readable summary of the main fields.
    #[default]
    Text,
    /// The record as pretty-printed JSON.
    Json,
    /// The record as YAML.
    Yaml,
}

/// Arguments for the `atlas get` subcommand.
#[derive(Args, Debug)]
pub struct GetArgs {
    /// ISO 3166-1 alpha-2 code, case-insensitive (e.g. `fr`).
    #[arg(value_name = "CODE")]
    pub code: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = RecordFormat::Text)]
    pub format: RecordFormat,
}

/// Execute the get subcommand.
///
/// Returns exit code: 0 on success, 1 for unknown or unavailable entries,
/// 2 for a malformed code.
pub fn run_get(args: &GetArgs, dataset: &Dataset, out: &mut dyn Write) -> Result<u8> {
    let record = match dataset.record(&args.code) {
        Ok(record) => record,
        Err(e @ AtlasError::InvalidCode { .. }) => {
            writeln!(out, "ERROR: {e}")?;
            return Ok(2);
        }
        Err(e) => {
            writeln!(out, "ERROR: {e}")?;
            return Ok(1);
        }
    };

    match args.format {
        RecordFormat::Text => write_text(record, out)?,
        RecordFormat::Json => {
            let json = serde_json::to_string_pretty(record).context("failed to render JSON")?;
            writeln!(out, "{json}")?;
        }
        RecordFormat::Yaml => {
            let yaml = serde_yaml::to_string(record).context("failed to render YAML")?;
            write!(out, "{yaml}")?;
        }
    }
    Ok(0)
}

fn write_text(record: &CountryRecord, out: &mut dyn Write) -> Result<()> {
    let name = record.display_name().unwrap_or("(unnamed)");
    match record.iso_alpha2.as_deref() {
        Some(code) => writeln!(out, "{name} ({code})")?,
        None => writeln!(out, "{name}")?,
    }

    field(out, "Official name", record.official_name.as_deref())?;
    field(out, "ISO alpha-3", record.iso_alpha3.as_deref())?;
    field(out, "Numeric code", record.numeric_code.as_deref())?;
    field(out, "Dialing code", record.dialing_code())?;
    field(out, "Capital", record.capital.as_deref())?;

    let region = match (record.region.as_deref(), record.subregion.as_deref()) {
        (Some(r), Some(s)) => Some(format!("{r} / {s}")),
        (r, s) => r.or(s).map(str::to_string),
    };
    field(out, "Region", region)?;
    field(out, "Population", record.population.as_ref())?;

    let currency = record.currency.as_ref().and_then(|c| {
        let code = c.code.as_deref()?;
        Some(match (c.symbol.as_deref(), c.name.as_deref()) {
            (Some(sym), Some(name)) => format!("{code} ({sym}, {name})"),
            (None, Some(name)) => format!("{code} ({name})"),
            _ => code.to_string(),
        })
    });
    field(out, "Currency", currency)?;

    let mut languages: Vec<&str> = record.first_language.as_deref().into_iter().collect();
    if let Some(others) = &record.other_languages {
        languages.extend(others.iter().map(String::as_str));
    }
    if !languages.is_empty() {
        field(out, "Languages", Some(languages.join(", ")))?;
    }

    field(out, "Time zone", record.time_zone.as_deref())?;
    field(out, "Driving side", record.driving_side.as_deref())?;
    field(out, "Internet TLD", record.internet_tld.as_deref())?;

    if !record.neighbors().is_empty() {
        field(out, "Neighbors", Some(record.neighbors().join(", ")))?;
    }

    // Values that did not fit their field, printed as stored JSON.
    for name in record.mistyped_fields() {
        field(out, name, record.extra.get(name))?;
    }
    Ok(())
}

fn field(out: &mut dyn Write, label: &str, value: Option<impl Display>) -> Result<()> {
    if let Some(value) = value {
        writeln!(out, "  {:<14} {value}", format!("{label}:"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{capture, sample};

    fn args(code: &str, format: RecordFormat) -> GetArgs {
        GetArgs {
            code: code.to_string(),
            format,
        }
    }

    #[test]
    fn text_output_shows_main_fields() {
        let ds = sample();
        let (code, text) = capture(|out| run_get(&args("fr", RecordFormat::Text), &ds, out));
        assert_eq!(code, 0);
        assert!(text.starts_with("France (FR)\n"));
        assert!(text.contains("ISO alpha-3:   FRA"));
        assert!(text.contains("Capital:       Paris"));
        assert!(text.contains("Region:        Europe / Western Europe"));
        assert!(text.contains("Currency:      EUR (€, Euro)"));
        assert!(text.contains("Languages:     French, Breton, Occitan"));
        assert!(text.contains("Neighbors:     BE"));
    }

    #[test]
    fn text_output_keeps_sentinels_visible() {
        let ds = sample();
        let (_, text) = capture(|out| run_get(&args("BE", RecordFormat::Text), &ds, out));
        assert!(text.contains("Capital:       N/A"));
        assert!(!text.contains("Currency:"));
    }

    #[test]
    fn json_output_is_the_record() {
        let ds = sample();
        let (code, text) = capture(|out| run_get(&args("FR", RecordFormat::Json), &ds, out));
        assert_eq!(code, 0);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["isoAlpha3"], "FRA");
        assert_eq!(value["currency"]["code"], "EUR");
    }

    #[test]
    fn yaml_output_is_the_record() {
        let ds = sample();
        let (code, text) = capture(|out| run_get(&args("FR", RecordFormat::Yaml), &ds, out));
        assert_eq!(code, 0);
        let record: CountryRecord = serde_yaml::from_str(&text).unwrap();
        assert_eq!(record.capital.as_deref(), Some("Paris"));
    }

    #[test]
    fn text_output_shows_mistyped_values_as_stored() {
        let ds = Dataset::from_json_str(
            r#"{"DE": {"name": "Germany", "isoAlpha2": "DE", "numericCode": 276, "currency": "EUR"}}"#,
        )
        .unwrap();
        let (code, text) = capture(|out| run_get(&args("de", RecordFormat::Text), &ds, out));
        assert_eq!(code, 0);
        assert!(text.contains("  numericCode:   276\n"), "{text}");
        assert!(text.contains("  currency:      \"EUR\"\n"), "{text}");
        assert!(!text.contains("Numeric code:"));
    }

    #[test]
    fn unknown_code_exits_1() {
        let ds = sample();
        let (code, text) = capture(|out| run_get(&args("ZZ", RecordFormat::Text), &ds, out));
        assert_eq!(code, 1);
        assert!(text.contains("no entry for country code ZZ"));
    }

    #[test]
    fn failed_entry_exits_1_with_reason() {
        let ds = sample();
        let (code, text) = capture(|out| run_get(&args("PS", RecordFormat::Json), &ds, out));
        assert_eq!(code, 1);
        assert!(text.contains("unavailable"));
        assert!(text.contains("after retries"));
    }

    #[test]
    fn malformed_code_exits_2() {
        let ds = sample();
        for bad in ["FRA", "1F", ""] {
            let (code, text) = capture(|out| run_get(&args(bad, RecordFormat::Text), &ds, out));
            assert_eq!(code, 2, "{bad:?}");
            assert!(text.starts_with("ERROR: invalid country code"));
        }
    }
}
