//! # atlas CLI entry point
//!
//! Parses command-line arguments, loads the dataset and dispatches to the
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use atlas_cli::audit::{run_audit, AuditArgs};
use atlas_cli::export::{run_export, ExportArgs};
use atlas_cli::get::{run_get, GetArgs};
use atlas_cli::list::{run_list, ListArgs};

/// Country atlas
///
/// Look up country records by ISO 3166-1 alpha-2 code, list the dataset,
/// audit its data quality and export it as JSON or YAML.
#[derive(Parser, Debug)]
#[command(name = "atlas", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Dataset file (JSON, or YAML by extension) to use instead of the
    /// embedded one.
    #[arg(long, global = true, value_name = "PATH")]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the record for one country code.
    Get(GetArgs),

    /// List every entry: code, alpha-3 and name.
    List(ListArgs),

    /// Report data-quality findings for the dataset.
    Audit(AuditArgs),

    /// Write the whole dataset as JSON or YAML.
    Export(ExportArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "atlas CLI starting");

    let result = atlas_cli::load_dataset(cli.data.as_deref()).and_then(|dataset| {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        match &cli.command {
            Commands::Get(args) => run_get(args, &dataset, &mut out),
            Commands::List(args) => run_list(args, &dataset, &mut out),
            Commands::Audit(args) => run_audit(args, &dataset, &mut out),
            Commands::Export(args) => run_export(args, &dataset, &mut out),
        }
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
