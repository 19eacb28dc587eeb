//! # Faultcode Config
//!
//! Configuration for the process-wide fault message context.
//!
//! This crate provides TOML loading with environment overrides, validation,
//! and an atomically swappable configuration cache.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use cache::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
