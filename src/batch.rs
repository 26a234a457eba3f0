//! Line-by-line batch processing of email files.
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};
use crate::probe::{Prober, probe_and_report};

/// Outcome counts for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Enumerate every non-blank line of `path`, writing one result line each.
///
/// Lines are trimmed before use; blank lines are skipped. Per-email
/// failures are reported inline and counted, and the batch keeps going. A
/// file that cannot be opened or read aborts the run with
/// [`Error::FileOpen`].
pub async fn run_file(prober: &Prober, path: &Path, out: &mut dyn Write) -> Result<BatchReport> {
    let file = File::open(path).map_err(|source| Error::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let mut report = BatchReport::default();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| Error::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        let email = line.trim();
        if email.is_empty() {
            report.skipped += 1;
            continue;
        }
        if probe_and_report(prober, email, out).await? {
            report.processed += 1;
        } else {
            report.errors += 1;
        }
    }

    info!(
        "Batch complete: processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(report)
}
