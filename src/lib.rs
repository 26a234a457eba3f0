#![doc = r#"
mfaenum — enumerate the MFA method registered on AWS root accounts.

This crate probes the fixed AWS sign-in MFA endpoint with an email address
and classifies the response: the single registered MFA method, the list of
methods when several are registered, and — when a hardware security key
(U2F) is present and the service discloses its serial — the AWS account id
and passkey name encoded in that serial. It powers the `mfaenum` CLI and
can be embedded in other tooling via the library API.

Quick start: classify one email
-------------------------------
```rust,no_run
use mfaenum::{MfaReport, Prober};

#[tokio::main]
async fn main() -> mfaenum::Result<()> {
    let prober = Prober::new()?;
    let report = prober.enumerate("root@example.com").await?;

    match report {
        MfaReport::Single { method, key } => println!("method={method} key={key:?}"),
        MfaReport::Multi { methods, key } => println!("methods={methods:?} key={key:?}"),
    }
    Ok(())
}
```

Batch helper
------------
```rust,no_run
use std::io;
use std::path::Path;
use mfaenum::{run_file, Prober};

#[tokio::main]
async fn main() -> mfaenum::Result<()> {
    let prober = Prober::new()?;
    let report = run_file(&prober, Path::new("emails.txt"), &mut io::stdout()).await?;
    eprintln!("processed={} skipped={} errors={}", report.processed, report.skipped, report.errors);
    Ok(())
}
```

Error handling
--------------
All public functions return `mfaenum::Result<T>`; match on `mfaenum::Error`
to tell per-email conditions (invalid address, missing `mfaType`, malformed
serial, transport failure) apart from fatal input-file errors.

Useful modules
--------------
- [`probe`] — the `Prober` client and serial parsing.
- [`types`] — wire response and report types.
- [`batch`] — line-by-line file processing.
- [`validate`] — email syntax validation.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod batch;
pub mod error;
pub mod probe;
pub mod types;
pub mod validate;

// Curated public API surface
pub use batch::{BatchReport, run_file};
pub use error::{Error, Result};
pub use probe::{MFA_ENDPOINT, Prober, parse_u2f_serial, probe_and_report};
pub use types::{MfaReport, MfaResponse, U2fKey};
pub use validate::is_valid_email;
