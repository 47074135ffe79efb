// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! The two logging conventions the adapter sits between.
//!
//! - [`SugaredLogger`] is the leveled destination: one entry point per severity, each taking
//!   a message and structured context.
//! - [`KvLogger`] is the flat convention: a single entry point taking one interleaved
//!   key-value sequence.

use std::sync::Arc;

use crate::error::AdapterError;
use crate::severity::Severity;
use crate::value::Value;

/// A leveled, sugared logger.
///
/// `context` is an interleaved key-value sequence with the message and level already
/// removed. Implementations must be `Send + Sync`; the adapter inherits its thread safety
/// from them.
pub trait SugaredLogger: Send + Sync {
    fn debugw(&self, msg: &str, context: &[Value]);

    fn infow(&self, msg: &str, context: &[Value]);

    fn warnw(&self, msg: &str, context: &[Value]);

    fn errorw(&self, msg: &str, context: &[Value]);

    /// Unleveled entry point; logs at the default severity.
    fn logw(&self, msg: &str, context: &[Value]) {
        self.log_at(Severity::default(), msg, context);
    }

    /// Routes to the entry point matching `severity`.
    fn log_at(&self, severity: Severity, msg: &str, context: &[Value]) {
        match severity {
            Severity::Debug => self.debugw(msg, context),
            Severity::Info => self.infow(msg, context),
            Severity::Warn => self.warnw(msg, context),
            Severity::Error => self.errorw(msg, context),
        }
    }
}

impl<T: SugaredLogger + ?Sized> SugaredLogger for Arc<T> {
    fn debugw(&self, msg: &str, context: &[Value]) {
        (**self).debugw(msg, context);
    }

    fn infow(&self, msg: &str, context: &[Value]) {
        (**self).infow(msg, context);
    }

    fn warnw(&self, msg: &str, context: &[Value]) {
        (**self).warnw(msg, context);
    }

    fn errorw(&self, msg: &str, context: &[Value]) {
        (**self).errorw(msg, context);
    }
}

impl<T: SugaredLogger + ?Sized> SugaredLogger for &T {
    fn debugw(&self, msg: &str, context: &[Value]) {
        (**self).debugw(msg, context);
    }

    fn infow(&self, msg: &str, context: &[Value]) {
        (**self).infow(msg, context);
    }

    fn warnw(&self, msg: &str, context: &[Value]) {
        (**self).warnw(msg, context);
    }

    fn errorw(&self, msg: &str, context: &[Value]) {
        (**self).errorw(msg, context);
    }
}

/// A logger following the flat key-value convention.
pub trait KvLogger: Send + Sync {
    /// Logs one entry. `keyvals` alternates keys and values.
    fn log(&self, keyvals: Vec<Value>) -> Result<(), AdapterError>;
}

impl<T: KvLogger + ?Sized> KvLogger for Arc<T> {
    fn log(&self, keyvals: Vec<Value>) -> Result<(), AdapterError> {
        (**self).log(keyvals)
    }
}

impl<T: KvLogger + ?Sized> KvLogger for &T {
    fn log(&self, keyvals: Vec<Value>) -> Result<(), AdapterError> {
        (**self).log(keyvals)
    }
}
