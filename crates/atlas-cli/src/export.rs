//! # Export Subcommand
//!
//! Writes the whole dataset, failed placeholders included, as JSON or
//! YAML. Without `--output` the dataset goes to stdout. Without
//! `--format` the output file's extension decides, falling back to JSON.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use atlas_data::{Dataset, DatasetFormat};

/// Export format.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
}

impl From<ExportFormat> for DatasetFormat {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Json => DatasetFormat::Json,
            ExportFormat::Yaml => DatasetFormat::Yaml,
        }
    }
}

/// Arguments for the `atlas export` subcommand.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output format (default: from the output file extension, else JSON).
    #[arg(long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Write to this file instead of stdout.
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Execute the export subcommand.
///
/// Returns exit code 0. IO and serialization failures are operational
/// errors and surface as `Err`.
pub fn run_export(args: &ExportArgs, dataset: &Dataset, out: &mut dyn Write) -> Result<u8> {
    let format = match (args.format, &args.output) {
        (Some(format), _) => format.into(),
        (None, Some(path)) => DatasetFormat::from_path(path),
        (None, None) => DatasetFormat::Json,
    };

    let mut rendered = dataset
        .to_format(format)
        .context("failed to serialize dataset")?;
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            writeln!(
                out,
                "Wrote {} entries to {}",
                dataset.len(),
                path.display()
            )?;
        }
        None => out.write_all(rendered.as_bytes())?,
    }

    tracing::info!(?format, entries = dataset.len(), "exported dataset");
    Ok(0)
}
