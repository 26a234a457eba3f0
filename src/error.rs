//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and HTTP transport errors, and provides semantic
//! variants for invalid input and unexpected response shapes.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("'{email}' is not a valid email address")]
    InvalidEmail { email: String },

    #[error("no `{field}` field in response")]
    MissingField { field: &'static str },

    #[error("unexpected mfaSerial format: {serial}")]
    MalformedSerial { serial: String },

    #[error("cannot read input file '{}': {source}", path.display())]
    FileOpen {
        path: PathBuf,
        source: std::io::Error,
    },
}
