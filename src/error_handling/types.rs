//! Error type definitions.
//!
//! This module defines the initialization errors and the failure taxonomy of a
//! resolution call.

use std::time::Duration;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;
use url::Url;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Why a single hop could not be fetched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchCause {
    /// The per-hop timeout fired.
    #[error("request timed out")]
    Timeout,

    /// TCP/TLS connection could not be established.
    #[error("connection failed: {0}")]
    Connect(String),

    /// Non-2xx, non-redirect status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// Redirect status without a `Location` header.
    #[error("redirect status {0} without Location header")]
    MissingLocation(u16),

    /// `Location` header that is not a usable http(s) URL.
    #[error("unusable Location header: {0}")]
    InvalidLocation(String),

    /// Body exceeded the configured limit.
    #[error("response body larger than {0} bytes")]
    BodyTooLarge(usize),

    /// Body could not be read or decoded.
    #[error("failed to read response body: {0}")]
    Body(String),

    /// Any other transport failure.
    #[error("request failed: {0}")]
    Request(String),
}

/// Failure of one resolution call.
///
/// All variants are local to the call that produced them; no partial result is
/// returned alongside. `is_retriable()` tells the caller whether starting a fresh
/// resolution is worthwhile.
#[derive(Error, Debug)]
pub enum ResolutionError {
    /// Transport failure at `hop` (0 = seed URL).
    #[error("fetch failed at hop {hop} ({url}): {cause}")]
    FetchFailed {
        hop: usize,
        url: Url,
        cause: FetchCause,
    },

    /// A navigation target was already visited during this call.
    #[error("navigation cycle detected: {url} was already visited")]
    CycleDetected { url: Url },

    /// Ran out of hops before reaching a terminal page.
    #[error("no terminal page reached within {max_hops} hops")]
    HopLimitExceeded { max_hops: usize },

    /// Terminal page reached but none of the image matchers fired.
    #[error("no result image found on terminal page {url}")]
    ResourceNotFound { url: Url },

    /// The wall-clock budget of the call ran out.
    #[error("resolution exceeded overall timeout of {}s", .budget.as_secs())]
    OverallTimeoutExceeded { budget: Duration },

    /// The seed URL could not be built or parsed.
    #[error("invalid seed URL: {0}")]
    InvalidSeedUrl(#[from] url::ParseError),

    /// The per-call HTTP session could not be created.
    #[error(transparent)]
    ClientInit(#[from] InitializationError),
}

/// Coarse classification of `ResolutionError`, used for log lines and counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    FetchFailed,
    CycleDetected,
    HopLimitExceeded,
    ResourceNotFound,
    OverallTimeoutExceeded,
    InvalidSeedUrl,
    ClientInit,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::FetchFailed => "Fetch failed",
            ErrorType::CycleDetected => "Cycle detected",
            ErrorType::HopLimitExceeded => "Hop limit exceeded",
            ErrorType::ResourceNotFound => "Resource not found",
            ErrorType::OverallTimeoutExceeded => "Overall timeout exceeded",
            ErrorType::InvalidSeedUrl => "Invalid seed URL",
            ErrorType::ClientInit => "Client initialization error",
        }
    }
}

impl ResolutionError {
    /// Returns the coarse kind of this error.
    pub fn error_type(&self) -> ErrorType {
        match self {
            ResolutionError::FetchFailed { .. } => ErrorType::FetchFailed,
            ResolutionError::CycleDetected { .. } => ErrorType::CycleDetected,
            ResolutionError::HopLimitExceeded { .. } => ErrorType::HopLimitExceeded,
            ResolutionError::ResourceNotFound { .. } => ErrorType::ResourceNotFound,
            ResolutionError::OverallTimeoutExceeded { .. } => ErrorType::OverallTimeoutExceeded,
            ResolutionError::InvalidSeedUrl(_) => ErrorType::InvalidSeedUrl,
            ResolutionError::ClientInit(_) => ErrorType::ClientInit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_all_error_types_have_string_representation() {
        for error_type in ErrorType::iter() {
            let str_repr = error_type.as_str();
            assert!(
                !str_repr.is_empty(),
                "{:?} should have non-empty string",
                error_type
            );
        }
    }

    #[test]
    fn test_fetch_failed_message_names_hop_and_cause() {
        let err = ResolutionError::FetchFailed {
            hop: 3,
            url: Url::parse("https://example.com/step").unwrap(),
            cause: FetchCause::Status(404),
        };
        let msg = err.to_string();
        assert!(msg.contains("hop 3"), "got: {}", msg);
        assert!(msg.contains("https://example.com/step"), "got: {}", msg);
        assert!(msg.contains("404"), "got: {}", msg);
        assert_eq!(err.error_type(), ErrorType::FetchFailed);
    }

    #[test]
    fn test_overall_timeout_message() {
        let err = ResolutionError::OverallTimeoutExceeded {
            budget: Duration::from_secs(90),
        };
        assert_eq!(err.to_string(), "resolution exceeded overall timeout of 90s");
        assert_eq!(err.error_type(), ErrorType::OverallTimeoutExceeded);
    }

    #[test]
    fn test_invalid_seed_url_from_parse_error() {
        let err: ResolutionError = url::ParseError::EmptyHost.into();
        assert_eq!(err.error_type(), ErrorType::InvalidSeedUrl);
    }
}
