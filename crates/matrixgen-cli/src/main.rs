//! Matrixgen CLI - regenerate the Travis CI configuration
//!
//! The `matrixgen` command expands the static compiler tables into the full
//! build matrix and writes `.travis.yml`. Run with no arguments from the
//! repository root; the previous file is replaced wholesale.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use matrixgen_core::{emit, telemetry, TravisConfig};
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "matrixgen")]
#[command(author = "Stevedores Org")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate the Travis CI build-matrix configuration", long_about = None)]
struct Cli {
    /// Destination path for the generated configuration
    #[arg(short, long, default_value = emit::DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Print the rendered document to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    telemetry::init(cli.json, level);

    let config = TravisConfig::generate();
    info!(jobs = config.job_count(), "assembled build matrix");

    if cli.stdout {
        let text = emit::render(&config).context("Failed to render configuration")?;
        print!("{text}");
        return Ok(());
    }

    emit::write_file(&config, &cli.output)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    Ok(())
}
