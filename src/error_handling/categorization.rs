//! Error categorization and retry strategy.
//!
//! This module maps transport errors onto `FetchCause`, decides which resolution
//! failures are worth a fresh attempt, and configures the backoff used between
//! attempts.

use std::time::Duration;
use tokio_retry::strategy::ExponentialBackoff;

use super::types::{FetchCause, ResolutionError};
use crate::config::HTTP_STATUS_TOO_MANY_REQUESTS;

/// Creates an exponential backoff retry strategy.
///
/// Delays run `RETRY_INITIAL_DELAY_MS`, then multiply by `RETRY_FACTOR` per retry
/// (500 ms, 1 s, 2 s, ...), clamped to `RETRY_MAX_DELAY_SECS`. At most
/// `max_retries` delays are yielded, one per retry after the initial attempt.
///
/// `ExponentialBackoff` yields `factor * base^n`, so the growth rate is the base
/// and the initial delay is recovered through the factor.
pub fn get_retry_strategy(max_retries: usize) -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(crate::config::RETRY_FACTOR)
        .factor(crate::config::RETRY_INITIAL_DELAY_MS / crate::config::RETRY_FACTOR)
        .max_delay(Duration::from_secs(crate::config::RETRY_MAX_DELAY_SECS))
        .take(max_retries)
}

/// Categorizes a `reqwest::Error` into a `FetchCause`.
///
/// Status codes win over the error kind; the navigator never calls
/// `error_for_status`, but bodies read through other code paths may carry one.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FetchCause {
    if let Some(status) = error.status() {
        return FetchCause::Status(status.as_u16());
    }

    if error.is_timeout() {
        FetchCause::Timeout
    } else if error.is_connect() {
        FetchCause::Connect(error.to_string())
    } else if error.is_body() || error.is_decode() {
        FetchCause::Body(error.to_string())
    } else {
        FetchCause::Request(error.to_string())
    }
}

impl FetchCause {
    /// Whether a fresh attempt might fetch this hop successfully.
    ///
    /// Network failures, 429 and 5xx are transient; other statuses and malformed
    /// responses are properties of the target site.
    pub fn is_retriable(&self) -> bool {
        match self {
            FetchCause::Timeout | FetchCause::Connect(_) | FetchCause::Request(_) => true,
            FetchCause::Body(_) => true,
            FetchCause::Status(code) => {
                *code == HTTP_STATUS_TOO_MANY_REQUESTS || (500..600).contains(code)
            }
            FetchCause::MissingLocation(_)
            | FetchCause::InvalidLocation(_)
            | FetchCause::BodyTooLarge(_) => false,
        }
    }
}

impl ResolutionError {
    /// Whether the caller may retry the whole resolution from a fresh state.
    ///
    /// Cycles, hop-limit overruns and missing resources reflect the target site's
    /// current flow or markup, so repeating the call would fail the same way.
    pub fn is_retriable(&self) -> bool {
        match self {
            ResolutionError::FetchFailed { cause, .. } => cause.is_retriable(),
            ResolutionError::OverallTimeoutExceeded { .. } => true,
            ResolutionError::CycleDetected { .. }
            | ResolutionError::HopLimitExceeded { .. }
            | ResolutionError::ResourceNotFound { .. }
            | ResolutionError::InvalidSeedUrl(_)
            | ResolutionError::ClientInit(_) => false,
        }
    }
}
