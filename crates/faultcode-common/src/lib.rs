//! # Faultcode Common
//!
//! Shared error type, logging setup, and test utilities.
//!
//! This crate provides the foundational pieces used across all other crates
//! in the faultcode workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::*;
pub use logging::{init_logging, LogFormat, LoggingConfig};
