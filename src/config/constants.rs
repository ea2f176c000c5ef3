//! Configuration constants.
//!
//! This module defines all configuration constants used throughout the resolver,
//! including hop limits, timeouts, size limits, and retry parameters.

use std::time::Duration;

/// Default page the prompt is submitted to.
///
/// The prompt is appended as the `prompt` query parameter (see `app::build_seed_url`).
pub const DEFAULT_BASE_URL: &str = "https://www.lastroom.ct.ws/ai-image/";

/// Query parameter carrying the user prompt on the seed URL.
pub const PROMPT_QUERY_PARAM: &str = "prompt";

// Hop navigation
/// Maximum number of navigation hops to follow
/// Prevents infinite redirect loops and excessive request chains
pub const DEFAULT_MAX_HOPS: usize = 10;

// Network operation timeouts
/// Per-hop HTTP timeout in seconds (connect + headers + body)
pub const HOP_TIMEOUT_SECS: u64 = 30;
/// Wall-clock budget for a whole resolution, measured from call start
/// Formula: three slow hops at the per-hop timeout
pub const OVERALL_TIMEOUT_SECS: u64 = 90;
/// Convenience form of `OVERALL_TIMEOUT_SECS`
pub const OVERALL_TIMEOUT: Duration = Duration::from_secs(OVERALL_TIMEOUT_SECS);

/// Default User-Agent string for HTTP requests.
///
/// The target service gates responses by client fingerprint, so every hop is sent
/// with a desktop Chrome User-Agent together with the headers in `config::headers`.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Response and body size limits
/// Maximum response body size in bytes (2MB)
/// Hops returning more than this fail instead of being buffered
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;
/// Maximum HTML preview length in characters for debugging (200 chars)
/// Used when logging the body of each hop
pub const MAX_HTML_PREVIEW_CHARS: usize = 200;

/// File-hosting domains whose links, found anywhere in a page body, are followed
/// as a last-resort navigation signal.
///
/// Subdomains match too (`i.ibb.co` matches `ibb.co`).
pub const DEFAULT_FILE_HOSTS: &[&str] = &[
    "ibb.co",
    "imgbb.com",
    "postimg.cc",
    "catbox.moe",
    "files.fm",
    "gofile.io",
];

// Resource extraction markers
/// Class carried by the `<img>` that renders the generated result
pub const RESULT_IMAGE_CLASS: &str = "result-image";
/// `id` of the `<img>` on the file-hosting viewer page
pub const VIEWER_IMAGE_ID: &str = "img";
/// Substrings of an `<img src>` that suggest a generated image (case-insensitive)
pub const RESULT_SRC_KEYWORDS: &[&str] = &["result", "output", "generated"];

// Retry strategy (whole-resolution retries, driven by the caller)
/// Delay in milliseconds before the first retry
pub const RETRY_INITIAL_DELAY_MS: u64 = 500;
/// Each retry waits this many times longer than the previous one
pub const RETRY_FACTOR: u64 = 2;
/// Maximum delay between retries in seconds
pub const RETRY_MAX_DELAY_SECS: u64 = 15;
/// Maximum number of retries after the initial attempt
pub const RETRY_MAX_ATTEMPTS: usize = 2;

// Result cache
/// How long a resolved image URL stays valid in `ResolutionCache`
pub const CACHE_TTL_SECS: u64 = 60 * 60;
/// Maximum number of prompts held by `ResolutionCache`
pub const CACHE_MAX_ENTRIES: usize = 256;

// HTTP status codes (for clarity and consistency)
pub const HTTP_STATUS_TOO_MANY_REQUESTS: u16 = 429;
/// Status codes treated as HTTP-level redirects
pub const REDIRECT_STATUS_CODES: &[u16] = &[301, 302, 303, 307, 308];
