//! Compute every indicator for a candle file.
//!
//! Usage:
//!     ta_report <data_file> [--config params.toml] [--pretty]
//!
//! Writes the report as JSON to stdout. Logs go to stderr and follow
//! `RUST_LOG` (default `info`).

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ta_report::{build_report, load_candles, ReportConfig};

#[derive(Debug, Parser)]
#[command(name = "ta_report", version, about = "Technical indicator report for OHLCV data")]
struct Args {
    /// JSON candle file with an `ohlcv` object of column arrays
    data_file: PathBuf,

    /// TOML file with indicator parameters
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = ReportConfig::load(args.config.as_deref()).context("loading configuration")?;
    let candles = load_candles(&args.data_file)
        .with_context(|| format!("loading candles from {}", args.data_file.display()))?;
    info!(candles = candles.len(), path = %args.data_file.display(), "loaded data");

    let report = build_report(&candles, &config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.pretty {
        serde_json::to_writer_pretty(&mut out, &report)?;
    } else {
        serde_json::to_writer(&mut out, &report)?;
    }
    writeln!(out)?;

    Ok(())
}
