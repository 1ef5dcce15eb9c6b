//! # List Subcommand
//!
//! One line per dataset entry in code order: code, alpha-3 and name.
//! Failed placeholders are listed too, marked `unavailable`, so the
//! listing always accounts for every key in the dataset.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use atlas_core::Entry;
use atlas_data::Dataset;

/// Arguments for the `atlas list` subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print only the codes, one per line.
    #[arg(long)]
    pub codes_only: bool,
}

/// Execute the list subcommand. Always exits 0.
pub fn run_list(args: &ListArgs, dataset: &Dataset, out: &mut dyn Write) -> Result<u8> {
    for (code, entry) in dataset.iter() {
        if args.codes_only {
            writeln!(out, "{code}")?;
            continue;
        }
        match entry {
            Entry::Country(record) => {
                let alpha3 = record.iso_alpha3.as_deref().unwrap_or("---");
                let name = record.display_name().unwrap_or("(unnamed)");
                writeln!(out, "{code}  {alpha3:<3}  {name}")?;
            }
            Entry::Failed(failed) => {
                writeln!(out, "{code}  ---  unavailable ({})", failed.error)?;
            }
        }
    }
    tracing::debug!(entries = dataset.len(), "listed dataset");
    Ok(0)
}
