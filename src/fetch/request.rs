//! HTTP request building for each hop.

use reqwest::header::HeaderName;

use crate::config::BROWSER_HEADERS;

/// Browser request headers sent on every hop.
///
/// The target service gates responses by client fingerprint, so requests mimic a
/// desktop Chrome navigation. `User-Agent` is set on the session client.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    /// Returns headers as a vector of (name, value) tuples for logging.
    pub(crate) fn as_vec() -> Vec<(String, String)> {
        BROWSER_HEADERS
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    /// Applies the standard request headers to a `reqwest::RequestBuilder`.
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        BROWSER_HEADERS
            .iter()
            .fold(builder, |builder, (name, value)| {
                builder.header(HeaderName::from_static(*name), *value)
            })
    }
}
