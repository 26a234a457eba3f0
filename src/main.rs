//! mfaenum CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, dispatch to
//! single-email or batch processing, and exit with appropriate status.
//! For programmatic use, prefer the library API (`mfaenum::probe`).

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args).await
}
