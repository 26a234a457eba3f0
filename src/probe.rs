//! MFA probing against the AWS sign-in endpoint.
//!
//! One form-encoded POST per email classifies the registered MFA method; a
//! second POST selecting U2F is issued only when the account reports
//! multiple methods including a hardware key, since that response can carry
//! the key's `mfaSerial`.
use std::io::Write;

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{MfaReport, MfaResponse, U2fKey};
use crate::validate::is_valid_email;

/// Fixed endpoint queried for MFA registration data.
pub const MFA_ENDPOINT: &str = "https://signin.aws.amazon.com/mfa";

/// Client over the sign-in MFA endpoint.
pub struct Prober {
    client: reqwest::Client,
    endpoint: String,
}

impl Prober {
    /// Prober against the production endpoint.
    pub fn new() -> Result<Self> {
        Self::with_endpoint(MFA_ENDPOINT)
    }

    /// Prober against an arbitrary endpoint URL.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    async fn lookup(&self, email: &str, selected_option: Option<&str>) -> Result<MfaResponse> {
        let mut form = vec![("email", email)];
        if let Some(option) = selected_option {
            form.push(("selectedMfaOption", option));
        }
        debug!(email, ?selected_option, "querying MFA endpoint");
        let response = self.client.post(&self.endpoint).form(&form).send().await?;
        Ok(response.json().await?)
    }

    /// Classify the MFA registration for one email.
    ///
    /// Invalid addresses are rejected before any request is made. Exactly
    /// one request is issued unless the response is `MULTI` with U2F in the
    /// method list, in which case a second request selects U2F to recover
    /// the serial.
    pub async fn enumerate(&self, email: &str) -> Result<MfaReport> {
        if !is_valid_email(email) {
            return Err(Error::InvalidEmail {
                email: email.to_string(),
            });
        }

        let first = self.lookup(email, None).await?;
        let mfa_type = first
            .mfa_type
            .ok_or(Error::MissingField { field: "mfaType" })?;

        if mfa_type == "MULTI" {
            if let Some(methods) = first.mfa_type_list {
                let key = if methods.iter().any(|m| m == "U2F") {
                    let second = self.lookup(email, Some("U2F")).await?;
                    second
                        .mfa_serial
                        .as_deref()
                        .map(parse_u2f_serial)
                        .transpose()?
                } else {
                    None
                };
                return Ok(MfaReport::Multi { methods, key });
            }
            // MULTI without a method list degrades to a plain type line.
            return Ok(MfaReport::Single {
                method: mfa_type,
                key: None,
            });
        }

        if mfa_type == "U2F" {
            let key = first
                .mfa_serial
                .as_deref()
                .map(parse_u2f_serial)
                .transpose()?;
            return Ok(MfaReport::Single {
                method: mfa_type,
                key,
            });
        }

        Ok(MfaReport::Single {
            method: mfa_type,
            key: None,
        })
    }
}

/// Extract the account id and passkey name from a U2F `mfaSerial`.
///
/// The serial is ARN-shaped, e.g. `arn:aws:iam::123456789012:mfa/user/keyname`:
/// colon field 4 holds the account id and slash field 2 the passkey name
/// (both 0-based). The offsets are a fixed positional contract with the
/// remote service; a serial missing either field is reported as malformed.
pub fn parse_u2f_serial(serial: &str) -> Result<U2fKey> {
    let account_id = serial.split(':').nth(4);
    let passkey_name = serial.split('/').nth(2);
    match (account_id, passkey_name) {
        (Some(account_id), Some(passkey_name)) => Ok(U2fKey {
            account_id: account_id.to_string(),
            passkey_name: passkey_name.to_string(),
        }),
        _ => Err(Error::MalformedSerial {
            serial: serial.to_string(),
        }),
    }
}

/// Run one email end to end and write its result line to `out`.
///
/// Classification failures (invalid address, missing field, malformed
/// serial, transport errors) are written as error lines and never
/// propagate; only write failures bubble up. Returns whether the email was
/// classified, so batch callers can keep counts.
pub async fn probe_and_report(
    prober: &Prober,
    email: &str,
    out: &mut dyn Write,
) -> std::io::Result<bool> {
    match prober.enumerate(email).await {
        Ok(report) => {
            writeln!(out, "{email}: {report}")?;
            Ok(true)
        }
        Err(err @ Error::InvalidEmail { .. }) => {
            writeln!(out, "Error: {err}. Skipping.")?;
            Ok(false)
        }
        Err(err) => {
            writeln!(out, "Error checking MFA type for {email}: {err}")?;
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_arn_shaped_serial() {
        let key = parse_u2f_serial("arn:aws:iam::123456789012:mfa/user/keyname").unwrap();
        assert_eq!(key.account_id, "123456789012");
        assert_eq!(key.passkey_name, "keyname");
    }

    #[test]
    fn rejects_serial_with_too_few_colon_fields() {
        let err = parse_u2f_serial("arn:aws:iam").unwrap_err();
        assert!(matches!(err, Error::MalformedSerial { .. }));
    }

    #[test]
    fn rejects_serial_without_slash_fields() {
        let err = parse_u2f_serial("arn:aws:iam::123456789012:mfa").unwrap_err();
        assert!(matches!(err, Error::MalformedSerial { .. }));
    }

    #[test]
    fn rejects_empty_serial() {
        assert!(parse_u2f_serial("").is_err());
    }
}
