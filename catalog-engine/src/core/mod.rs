//! Core module - configuration and error definitions
//!
//! - [`Config`] - runtime configuration
//! - [`EngineError`] - engine error type

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{EngineError, Result};
