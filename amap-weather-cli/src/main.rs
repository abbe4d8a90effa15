//! Binary crate for the `amap-weather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - Human-friendly output formatting

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;
mod output;

fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();

    // Logs go to stderr so stdout stays clean for piping.
    tracing_subscriber::registry()
        .with(EnvFilter::new(log_filter_from_verbosity(cmd.verbose)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    cmd.run().await
}
