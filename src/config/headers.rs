//! Browser request header values.
//!
//! The target service serves different content (or nothing) to clients that do not
//! look like a browser, so every hop carries these values. `User-Agent` is set on the
//! client itself from `Config::user_agent`.

/// `Accept` value of a desktop Chrome navigation request
pub const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8";
/// `Accept-Language` value
pub const ACCEPT_LANGUAGE_VALUE: &str = "en-US,en;q=0.9";
/// `Sec-Fetch-Dest` value
pub const SEC_FETCH_DEST_VALUE: &str = "document";
/// `Sec-Fetch-Mode` value
pub const SEC_FETCH_MODE_VALUE: &str = "navigate";
/// `Upgrade-Insecure-Requests` value
pub const UPGRADE_INSECURE_REQUESTS_VALUE: &str = "1";

/// Headers sent on every hop, as (name, value) pairs.
///
/// `Accept-Encoding` is deliberately absent: reqwest negotiates it itself and only
/// decompresses bodies when it set the header.
pub const BROWSER_HEADERS: &[(&str, &str)] = &[
    ("accept", ACCEPT_HTML),
    ("accept-language", ACCEPT_LANGUAGE_VALUE),
    ("sec-fetch-dest", SEC_FETCH_DEST_VALUE),
    ("sec-fetch-mode", SEC_FETCH_MODE_VALUE),
    ("upgrade-insecure-requests", UPGRADE_INSECURE_REQUESTS_VALUE),
];
