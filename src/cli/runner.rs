use std::io;

use tracing_subscriber::EnvFilter;

use mfaenum::batch;
use mfaenum::probe::{Prober, probe_and_report};

use super::args::CliArgs;

/// Dispatch to the single-email or batch flow.
///
/// Per-email failures are reported on stdout and do not affect the exit
/// status; an unreadable input file propagates out and exits non-zero.
pub async fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    // Diagnostics go to stderr so stdout stays a clean result stream.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let prober = Prober::new()?;
    let mut stdout = io::stdout();

    if let Some(email) = &args.email {
        probe_and_report(&prober, email, &mut stdout).await?;
    } else if let Some(path) = &args.file {
        batch::run_file(&prober, path, &mut stdout).await?;
    }

    Ok(())
}
