//! Shared types used across mfaenum.
//! Includes the wire response (`MfaResponse`) and the derived classification
//! (`MfaReport`, `U2fKey`) with its human-readable rendering.
use std::fmt;

use serde::Deserialize;

/// JSON body returned by the sign-in MFA endpoint.
///
/// Every field is optional on the wire: `mfaTypeList` only accompanies
/// `mfaType == "MULTI"`, and `mfaSerial` only appears when exactly one
/// hardware key is registered. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MfaResponse {
    pub mfa_type: Option<String>,
    pub mfa_type_list: Option<Vec<String>>,
    pub mfa_serial: Option<String>,
}

/// Account id and device name recovered from a U2F `mfaSerial`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct U2fKey {
    pub account_id: String,
    pub passkey_name: String,
}

/// Classification derived for one email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MfaReport {
    /// A single registered method; `key` is populated when the method is
    /// U2F and the service disclosed a serial.
    Single {
        method: String,
        key: Option<U2fKey>,
    },
    /// Multiple registered methods (`mfaType == "MULTI"`); `key` is
    /// populated when U2F is among them and a follow-up probe yielded a
    /// serial.
    Multi {
        methods: Vec<String>,
        key: Option<U2fKey>,
    },
}

impl fmt::Display for MfaReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            MfaReport::Single { method, key } => {
                write!(f, "{method}")?;
                key
            }
            MfaReport::Multi { methods, key } => {
                write!(f, "{}", methods.join(", "))?;
                key
            }
        };
        if let Some(key) = key {
            write!(f, " - {} - {}", key.account_id, key.passkey_name)?;
        }
        Ok(())
    }
}
