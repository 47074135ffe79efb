// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Bridges flat key-value logging calls onto leveled, sugared loggers.
//!
//! Callers of the flat convention log one interleaved sequence of keys and values. The
//! [`Adapter`] pulls the message and the level out of that sequence and forwards the rest,
//! in order, to the matching severity entry point of a [`SugaredLogger`].
//!
//! ```
//! use kvlog_bridge::{keyvals, Adapter};
//!
//! let adapter = Adapter::tracing();
//! adapter
//!     .log(keyvals!["message", "request served", "level", "info", "status", 200])
//!     .unwrap();
//! ```

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

pub mod adapter;
pub mod config;
pub mod error;
pub mod keyvals;
pub mod level;
pub mod logger;
pub mod logging;
pub mod observer;
pub mod severity;
pub mod tracing_logger;
pub mod value;

pub use adapter::Adapter;
pub use config::AdapterConfig;
pub use error::AdapterError;
pub use logger::{KvLogger, SugaredLogger};
pub use severity::Severity;
pub use tracing_logger::TracingLogger;
pub use value::Value;
