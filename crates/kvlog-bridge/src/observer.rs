// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! In-memory [`SugaredLogger`] that records every entry it receives.
//!
//! Intended for tests: hand the [`ObservedLogger`] to the code under test and inspect the
//! [`ObservedLogs`] handle afterwards.
//!
//! ```
//! use kvlog_bridge::observer;
//! use kvlog_bridge::{SugaredLogger, Severity};
//!
//! let (logger, logs) = observer::new(Severity::Info);
//! logger.debugw("dropped", &[]);
//! logger.infow("kept", &[]);
//! assert_eq!(logs.len(), 1);
//! assert_eq!(logs.all()[0].message, "kept");
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::logger::SugaredLogger;
use crate::severity::Severity;
use crate::value::Value;

/// One recorded entry.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedEntry {
    pub severity: Severity,
    pub message: String,
    pub context: Vec<Value>,
}

/// Creates a logger recording entries at or above `min`, and the handle to read them back.
pub fn new(min: Severity) -> (ObservedLogger, ObservedLogs) {
    let logs = ObservedLogs::default();
    let logger = ObservedLogger {
        min,
        logs: logs.clone(),
    };
    (logger, logs)
}

#[derive(Debug, Clone)]
pub struct ObservedLogger {
    min: Severity,
    logs: ObservedLogs,
}

impl ObservedLogger {
    fn record(&self, severity: Severity, msg: &str, context: &[Value]) {
        if severity < self.min {
            return;
        }
        self.logs.lock().push(LoggedEntry {
            severity,
            message: msg.to_string(),
            context: context.to_vec(),
        });
    }
}

impl SugaredLogger for ObservedLogger {
    fn debugw(&self, msg: &str, context: &[Value]) {
        self.record(Severity::Debug, msg, context);
    }

    fn infow(&self, msg: &str, context: &[Value]) {
        self.record(Severity::Info, msg, context);
    }

    fn warnw(&self, msg: &str, context: &[Value]) {
        self.record(Severity::Warn, msg, context);
    }

    fn errorw(&self, msg: &str, context: &[Value]) {
        self.record(Severity::Error, msg, context);
    }
}

/// Shared view of the entries recorded by an [`ObservedLogger`].
#[derive(Debug, Clone, Default)]
pub struct ObservedLogs {
    entries: Arc<Mutex<Vec<LoggedEntry>>>,
}

impl ObservedLogs {
    // A panicking test thread must not hide the entries from the others.
    fn lock(&self) -> MutexGuard<'_, Vec<LoggedEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copies of all recorded entries, oldest first.
    pub fn all(&self) -> Vec<LoggedEntry> {
        self.lock().clone()
    }

    /// Returns all recorded entries and clears the log.
    pub fn take_all(&self) -> Vec<LoggedEntry> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Entries whose message equals `msg`.
    pub fn filter_message(&self, msg: &str) -> Vec<LoggedEntry> {
        self.lock()
            .iter()
            .filter(|e| e.message == msg)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyvals;

    #[test]
    fn test_records_in_order() {
        let (logger, logs) = new(Severity::Debug);
        logger.debugw("a", &[]);
        logger.errorw("b", &keyvals!["k", 1]);

        assert_eq!(
            logs.all(),
            vec![
                LoggedEntry {
                    severity: Severity::Debug,
                    message: "a".to_string(),
                    context: vec![],
                },
                LoggedEntry {
                    severity: Severity::Error,
                    message: "b".to_string(),
                    context: keyvals!["k", 1],
                },
            ]
        );
    }

    #[test]
    fn test_minimum_severity() {
        let (logger, logs) = new(Severity::Warn);
        for severity in Severity::ALL {
            logger.log_at(severity, "x", &[]);
        }
        let severities: Vec<_> = logs.all().into_iter().map(|e| e.severity).collect();
        assert_eq!(severities, vec![Severity::Warn, Severity::Error]);
    }

    #[test]
    fn test_take_all_clears() {
        let (logger, logs) = new(Severity::Debug);
        logger.infow("one", &[]);
        assert_eq!(logs.take_all().len(), 1);
        assert!(logs.is_empty());
        logger.infow("two", &[]);
        assert_eq!(logs.len(), 1);
    }

    #[test]
    fn test_filter_message() {
        let (logger, logs) = new(Severity::Debug);
        logger.infow("dup", &[]);
        logger.infow("other", &[]);
        logger.warnw("dup", &[]);
        assert_eq!(logs.filter_message("dup").len(), 2);
        assert!(logs.filter_message("missing").is_empty());
    }

    #[test]
    fn test_clones_share_entries() {
        let (logger, logs) = new(Severity::Debug);
        let cloned = logger.clone();
        logger.infow("1", &[]);
        cloned.infow("2", &[]);
        assert_eq!(logs.clone().len(), 2);
    }
}
