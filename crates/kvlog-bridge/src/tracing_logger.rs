// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! [`SugaredLogger`] backed by the `tracing` crate.

use tracing::Level;

use crate::keyvals::Logfmt;
use crate::logger::SugaredLogger;
use crate::value::Value;

// Callsite levels must be constants, hence one expansion per severity.
macro_rules! emit {
    ($level:expr, $msg:expr, $context:expr) => {
        if $context.is_empty() {
            tracing::event!($level, "{}", $msg)
        } else {
            tracing::event!($level, context = %Logfmt($context), "{}", $msg)
        }
    };
}

/// Emits one `tracing` event per call.
///
/// The message becomes the event message. Context pairs are rendered as `key=value` into a
/// single `context` field, since `tracing` field names must be known at compile time.
/// Whatever subscriber is installed (see [`crate::logging::init_logging`]) decides encoding
/// and output.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl SugaredLogger for TracingLogger {
    fn debugw(&self, msg: &str, context: &[Value]) {
        emit!(Level::DEBUG, msg, context);
    }

    fn infow(&self, msg: &str, context: &[Value]) {
        emit!(Level::INFO, msg, context);
    }

    fn warnw(&self, msg: &str, context: &[Value]) {
        emit!(Level::WARN, msg, context);
    }

    fn errorw(&self, msg: &str, context: &[Value]) {
        emit!(Level::ERROR, msg, context);
    }
}
