// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Installs a global `tracing` subscriber for use with [`crate::tracing_logger::TracingLogger`].

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::error::AdapterError;

/// Builds the env filter for `log_level`, e.g. `"info"` or `"kvlog_bridge=debug,warn"`.
pub fn env_filter(log_level: &str) -> Result<EnvFilter, AdapterError> {
    EnvFilter::try_new(log_level).map_err(|e| {
        AdapterError::InvalidConfig(format!("could not parse log level '{log_level}': {e}"))
    })
}

/// Installs a fmt subscriber filtering at `log_level` as the global default.
///
/// Fails if the level does not parse or a global subscriber is already set.
pub fn init_logging(log_level: &str) -> Result<(), AdapterError> {
    tracing_subscriber::fmt::Subscriber::builder()
        .with_env_filter(env_filter(log_level)?)
        .with_level(true)
        .with_thread_names(false)
        .with_thread_ids(false)
        .with_line_number(false)
        .with_file(false)
        .with_target(true)
        .without_time()
        .try_init()
        .map_err(|e| AdapterError::InvalidConfig(format!("could not set subscriber: {e}")))?;

    debug!("Logging subsystem enabled");
    Ok(())
}
