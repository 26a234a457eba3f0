use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// Enumerate the MFA type for AWS root accounts.
///
/// A reported type of `NONE` can mean either the account exists without MFA
/// or the account does not exist.
#[derive(Parser)]
#[command(name = "mfaenum", version, about)]
#[command(group(ArgGroup::new("input").required(true)))]
pub struct CliArgs {
    /// A single email address to enumerate
    #[arg(short, long, group = "input")]
    pub email: Option<String>,

    /// Path to a file containing email addresses (one per line)
    #[arg(short, long, group = "input")]
    pub file: Option<PathBuf>,
}
