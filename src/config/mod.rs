//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (hop limits, timeouts, retry and cache parameters)
//! - Browser request header values
//! - CLI option types and parsing

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{Config, LogFormat, LogLevel};
