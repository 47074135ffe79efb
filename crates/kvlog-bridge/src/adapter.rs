// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Adapter from the flat key-value convention to a leveled, sugared logger.
//!
//! Each [`Adapter::log`] call:
//! 1. rejects odd-length input with [`AdapterError::UnmatchedKeyVals`];
//! 2. removes the first pair keyed by the message key and uses its value as the message;
//! 3. removes the first remaining pair keyed by the level key and decodes its value;
//! 4. forwards the message and the rest of the sequence, order intact, to the matching
//!    severity entry point of the wrapped logger.
//!
//! A message value that is not a string becomes the empty message, and a level value that
//! is not recognized becomes [`Severity::Info`](crate::severity::Severity::Info).

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::config::AdapterConfig;
use crate::error::AdapterError;
use crate::keyvals::take_pair;
use crate::logger::{KvLogger, SugaredLogger};
use crate::tracing_logger::TracingLogger;
use crate::value::Value;

/// Wraps a [`SugaredLogger`] and exposes it as a [`KvLogger`].
///
/// ```
/// use std::sync::Arc;
/// use kvlog_bridge::{keyvals, observer, Adapter, KvLogger, Severity};
///
/// let (logger, logs) = observer::new(Severity::Debug);
/// let adapter = Adapter::from_logger(Arc::new(logger)).unwrap();
///
/// adapter.log(keyvals!["message", "hello", "level", "warn", "foo", 22]).unwrap();
///
/// let entries = logs.all();
/// assert_eq!(entries[0].severity, Severity::Warn);
/// assert_eq!(entries[0].message, "hello");
/// assert_eq!(entries[0].context, keyvals!["foo", 22]);
/// ```
pub struct Adapter<L: ?Sized = dyn SugaredLogger> {
    logger: Arc<L>,
    config: AdapterConfig,
}

impl<L: SugaredLogger + ?Sized> Adapter<L> {
    /// Wraps `logger` with the default reserved keys.
    ///
    /// Fails with [`AdapterError::NilLogger`] when no logger is supplied.
    pub fn from_logger(logger: impl Into<Option<Arc<L>>>) -> Result<Self, AdapterError> {
        Self::with_config(logger, AdapterConfig::default())
    }

    /// Wraps `logger` with custom reserved keys.
    pub fn with_config(
        logger: impl Into<Option<Arc<L>>>,
        config: AdapterConfig,
    ) -> Result<Self, AdapterError> {
        let logger = logger.into().ok_or(AdapterError::NilLogger)?;
        config.validate()?;
        trace!(
            message_key = %config.message_key,
            level_key = %config.level_key,
            "Created key-value adapter"
        );
        Ok(Self { logger, config })
    }

    /// Changes the key the message is extracted from for all later calls.
    ///
    /// The key is rejected with [`AdapterError::InvalidConfig`], and the current one kept,
    /// if it is empty or equal to the level key.
    pub fn set_message_key(&mut self, key: impl Into<String>) -> Result<(), AdapterError> {
        self.replace_config(AdapterConfig {
            message_key: key.into(),
            ..self.config.clone()
        })
    }

    /// Changes the key the level is extracted from for all later calls.
    ///
    /// Same validation as [`set_message_key`](Self::set_message_key).
    pub fn set_level_key(&mut self, key: impl Into<String>) -> Result<(), AdapterError> {
        self.replace_config(AdapterConfig {
            level_key: key.into(),
            ..self.config.clone()
        })
    }

    fn replace_config(&mut self, config: AdapterConfig) -> Result<(), AdapterError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn message_key(&self) -> &str {
        &self.config.message_key
    }

    pub fn level_key(&self) -> &str {
        &self.config.level_key
    }

    /// The wrapped logger.
    pub fn logger(&self) -> &Arc<L> {
        &self.logger
    }

    /// Translates one flat key-value entry into a leveled call on the wrapped logger.
    pub fn log(&self, mut keyvals: Vec<Value>) -> Result<(), AdapterError> {
        if keyvals.is_empty() {
            return Ok(());
        }

        if keyvals.len() % 2 != 0 {
            return Err(AdapterError::UnmatchedKeyVals);
        }

        let msg = match take_pair(&mut keyvals, &self.config.message_key) {
            Some(Value::Str(msg)) => msg,
            _ => String::new(),
        };

        let severity = take_pair(&mut keyvals, &self.config.level_key)
            .and_then(|level| level.as_severity())
            .unwrap_or_default();

        self.logger.log_at(severity, &msg, &keyvals);
        Ok(())
    }
}

impl Adapter<TracingLogger> {
    /// Adapter forwarding to the `tracing` ecosystem.
    pub fn tracing() -> Self {
        Self {
            logger: Arc::new(TracingLogger::new()),
            config: AdapterConfig::default(),
        }
    }
}

impl<L: SugaredLogger + ?Sized> KvLogger for Adapter<L> {
    fn log(&self, keyvals: Vec<Value>) -> Result<(), AdapterError> {
        Adapter::log(self, keyvals)
    }
}

impl<L: ?Sized> Clone for Adapter<L> {
    fn clone(&self) -> Self {
        Self {
            logger: Arc::clone(&self.logger),
            config: self.config.clone(),
        }
    }
}

impl<L: ?Sized> fmt::Debug for Adapter<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Adapter")
            .field("message_key", &self.config.message_key)
            .field("level_key", &self.config.level_key)
            .finish_non_exhaustive()
    }
}
