//! `pypi-license-info` — look up the license of every package in a
//! `requirements.txt` on PyPI and flag GPL-family licenses.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load registry config ([`config::load_config`]).
//! 3. Open the output sink: a file with `-o`, the console otherwise ([`report::output`]).
//! 4. Stream requirements from the manifest ([`parser`]).
//! 5. Fetch each package's metadata, one request at a time ([`registry`]).
//! 6. Describe and flag the license ([`license`]) and write the line ([`report`]).
//!
//! Any parse, network or registry error aborts the run with exit code `1`.

mod cli;
mod config;
mod license;
mod models;
mod parser;
mod registry;
mod report;

use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use cli::Cli;
use config::load_config;
use parser::requirements::SimpleRequirementParser;
use registry::pypi::PypiClient;
use report::output::{Output, SinkKind};
use report::{generate_report, ReportSummary};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(&std::env::current_dir()?)?;
    let registry = PypiClient::new(&config.registry)?;
    let parser = SimpleRequirementParser::new(&cli.input_file_path)?;

    eprintln!(
        "  {} Reading {} (registry: {})",
        "→".cyan(),
        parser.input_file_path().display(),
        config.registry.base_url
    );

    let summary = match &cli.output_file_path {
        Some(path) => {
            let summary = write_report(&parser, &registry, Output::file(path)?).await?;
            eprintln!("  {} Report written to {}", "→".cyan(), path.display());
            summary
        }
        None => write_report(&parser, &registry, Output::console()).await?,
    };

    let flagged = if summary.flagged > 0 {
        summary.flagged.to_string().red().bold()
    } else {
        summary.flagged.to_string().green()
    };
    eprintln!(
        "  {} {} packages checked, {} flagged as GPL-family",
        "→".cyan(),
        summary.total,
        flagged
    );

    Ok(())
}

async fn write_report<W: Write>(
    parser: &SimpleRequirementParser,
    registry: &PypiClient,
    mut output: Output<W>,
) -> Result<ReportSummary> {
    let progress = progress_for(output.kind())?;
    let summary = generate_report(parser, registry, &mut output, &progress).await;
    progress.finish_and_clear();

    let summary = summary?;
    output.finish()?;
    Ok(summary)
}

/// Spinner on stderr while writing to a file; nothing when the report itself
/// goes to the console.
fn progress_for(kind: SinkKind) -> Result<ProgressBar> {
    if kind == SinkKind::Console {
        return Ok(ProgressBar::hidden());
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {pos} checked, looking up {msg}")?,
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}
