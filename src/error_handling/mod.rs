//! Error handling for resolution calls.
//!
//! This module provides:
//! - The resolution failure taxonomy (`ResolutionError`, `FetchCause`)
//! - Initialization errors for the logger and HTTP session
//! - Transport error categorization and the retriable/fatal split
//! - Retry strategy configuration for whole-resolution retries

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, get_retry_strategy};
pub use types::{ErrorType, FetchCause, InitializationError, ResolutionError};
