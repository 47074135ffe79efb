// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Level middleware for the flat key-value convention.
//!
//! [`debug`], [`info`], [`warn`] and [`error`] wrap a [`KvLogger`] so that every entry is
//! prefixed with a level pair. [`LevelFilter`] drops entries whose level is below a
//! threshold. Both only ever talk to the next logger through [`KvLogger::log`], so they
//! stack on top of an [`crate::adapter::Adapter`] or on each other.
//!
//! ```
//! use std::sync::Arc;
//! use kvlog_bridge::level::{self, Allow, LevelFilter};
//! use kvlog_bridge::{keyvals, observer, Adapter, KvLogger, Severity};
//!
//! let (logger, logs) = observer::new(Severity::Debug);
//! let adapter = Adapter::from_logger(Arc::new(logger)).unwrap();
//! let filtered = LevelFilter::new(adapter, Allow::Info);
//!
//! level::debug(&filtered).log(keyvals!["message", "dropped"]).unwrap();
//! level::warn(&filtered).log(keyvals!["message", "kept"]).unwrap();
//!
//! assert_eq!(logs.len(), 1);
//! assert_eq!(logs.all()[0].severity, Severity::Warn);
//! ```

use crate::config::DEFAULT_LEVEL_KEY;
use crate::error::AdapterError;
use crate::keyvals::find_value;
use crate::logger::KvLogger;
use crate::severity::Severity;
use crate::value::Value;

/// Prefixes every entry with a fixed level pair before forwarding it.
#[derive(Debug, Clone)]
pub struct WithLevel<L> {
    next: L,
    severity: Severity,
    key: String,
}

impl<L: KvLogger> WithLevel<L> {
    pub fn new(next: L, severity: Severity) -> Self {
        Self {
            next,
            severity,
            key: DEFAULT_LEVEL_KEY.to_string(),
        }
    }

    /// Uses `key` instead of the default level key. It must match the level key of the
    /// adapter at the end of the chain.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }
}

impl<L: KvLogger> KvLogger for WithLevel<L> {
    fn log(&self, keyvals: Vec<Value>) -> Result<(), AdapterError> {
        let mut prefixed = Vec::with_capacity(keyvals.len() + 2);
        prefixed.push(Value::from(self.key.as_str()));
        prefixed.push(Value::Level(self.severity));
        prefixed.extend(keyvals);
        self.next.log(prefixed)
    }
}

pub fn debug<L: KvLogger>(next: L) -> WithLevel<L> {
    WithLevel::new(next, Severity::Debug)
}

pub fn info<L: KvLogger>(next: L) -> WithLevel<L> {
    WithLevel::new(next, Severity::Info)
}

pub fn warn<L: KvLogger>(next: L) -> WithLevel<L> {
    WithLevel::new(next, Severity::Warn)
}

pub fn error<L: KvLogger>(next: L) -> WithLevel<L> {
    WithLevel::new(next, Severity::Error)
}

/// Which severities a [`LevelFilter`] lets through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Allow {
    #[default]
    All,
    /// Debug and above.
    Debug,
    /// Info and above.
    Info,
    /// Warn and above.
    Warn,
    /// Error only.
    Error,
    None,
}

impl Allow {
    pub fn permits(self, severity: Severity) -> bool {
        match self {
            Allow::All => true,
            Allow::Debug => severity >= Severity::Debug,
            Allow::Info => severity >= Severity::Info,
            Allow::Warn => severity >= Severity::Warn,
            Allow::Error => severity >= Severity::Error,
            Allow::None => false,
        }
    }
}

/// Forwards only entries whose level is allowed.
///
/// The filter does not remove the level pair; the adapter further down the chain does.
/// Entries without a recognizable level pass through unless
/// [`squelch_no_level`](Self::squelch_no_level) is set.
#[derive(Debug, Clone)]
pub struct LevelFilter<L> {
    next: L,
    allow: Allow,
    key: String,
    squelch_no_level: bool,
    error_not_allowed: bool,
}

impl<L: KvLogger> LevelFilter<L> {
    pub fn new(next: L, allow: Allow) -> Self {
        Self {
            next,
            allow,
            key: DEFAULT_LEVEL_KEY.to_string(),
            squelch_no_level: false,
            error_not_allowed: false,
        }
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Drops entries that carry no level at all.
    #[must_use]
    pub fn squelch_no_level(mut self, squelch: bool) -> Self {
        self.squelch_no_level = squelch;
        self
    }

    /// Returns [`AdapterError::NotAllowed`] for dropped entries instead of `Ok(())`.
    #[must_use]
    pub fn error_not_allowed(mut self) -> Self {
        self.error_not_allowed = true;
        self
    }

    fn reject(&self) -> Result<(), AdapterError> {
        if self.error_not_allowed {
            Err(AdapterError::NotAllowed)
        } else {
            Ok(())
        }
    }
}

impl<L: KvLogger> KvLogger for LevelFilter<L> {
    fn log(&self, keyvals: Vec<Value>) -> Result<(), AdapterError> {
        let allowed = match find_value(&keyvals, &self.key).and_then(Value::as_severity) {
            Some(severity) => self.allow.permits(severity),
            None => !self.squelch_no_level,
        };

        if !allowed {
            return self.reject();
        }
        self.next.log(keyvals)
    }
}
