// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Severity levels understood by the adapter.
//!
//! Only four severities exist on the flat key-value side: Debug, Info, Warn and Error.
//! Anything the adapter cannot recognize is treated as [`Severity::Info`], so an entry is
//! never dropped because of a malformed level marker.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use serde_json::Value as JsonValue;
use tracing::error;

/// Severity of a single log entry, ordered from most to least verbose.
///
/// # Parsing
///
/// Severities parse from strings case-insensitively:
/// ```
/// use kvlog_bridge::severity::Severity;
/// use std::str::FromStr;
///
/// assert_eq!(Severity::from_str("debug").unwrap(), Severity::Debug);
/// assert_eq!(Severity::from_str("WARNING").unwrap(), Severity::Warn);
/// assert!(Severity::from_str("fatal").is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Severity {
    Debug,
    /// Used whenever no level, or an unrecognized level, is supplied.
    #[default]
    Info,
    Warn,
    Error,
}

impl Severity {
    /// All severities, most verbose first.
    pub const ALL: [Severity; 4] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
    ];
}

impl AsRef<str> for Severity {
    fn as_ref(&self) -> &str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warn" | "warning" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            _ => Err(format!(
                "Invalid severity: '{s}'. Valid severities are: debug, info, warn, error",
            )),
        }
    }
}

/// Lenient deserialization: invalid strings and non-string values log an error and
/// become [`Severity::Info`] instead of failing the surrounding document.
impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = JsonValue::deserialize(deserializer)?;

        if let JsonValue::String(s) = value {
            match Severity::from_str(&s) {
                Ok(severity) => Ok(severity),
                Err(e) => {
                    error!("{}", e);
                    Ok(Severity::Info)
                }
            }
        } else {
            error!("Expected a string for severity, got {:?}", value);
            Ok(Severity::Info)
        }
    }
}
