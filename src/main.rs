//! CLI entry point for `eml2csv`.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "eml2csv", version, about = "Convert eml files to csv.")]
struct Cli {
    /// Directory scanned recursively for .eml files
    #[arg(value_name = "EML_DIR")]
    eml_dir: PathBuf,

    /// Destination CSV file, created or overwritten
    #[arg(value_name = "OUTPUT_CSV")]
    output_csv: PathBuf,
}

fn main() -> anyhow::Result<()> {
    setup_logging();

    let cli = Cli::parse();
    let stats = eml2csv::convert::convert(&cli.eml_dir, &cli.output_csv)?;
    tracing::debug!(files = stats.files_converted, "conversion complete");

    Ok(())
}

/// Set up tracing on stderr.
///
/// Stdout is reserved for the per-file progress lines, so diagnostics
/// default to `warn`; `RUST_LOG` overrides.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
