//! Application configuration and constants.
//!
//! This module provides:
//! - Panel endpoint paths and extraction defaults
//! - Session configuration and validation
//! - Logging option types

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, ConfigValidationError, LogFormat, LogLevel};
