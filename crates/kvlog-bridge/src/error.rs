// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

/// Errors returned by the adapter and the flat key-value middleware
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AdapterError {
    /// No destination logger was supplied at construction.
    #[error("provided logger is nil")]
    NilLogger,

    /// The key-value sequence had odd length, i.e. a key is missing its value.
    #[error("got unmatched keys/values")]
    UnmatchedKeyVals,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Returned by a level filter configured to report rejected entries.
    #[error("log level not allowed")]
    NotAllowed,
}
