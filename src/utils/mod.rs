//! Utility functions shared by the navigator and the extractor.
//!
//! This module provides:
//! - CSS selector and regex compilation utilities
//! - URL resolution against a base page
//! - Log-safe body previews

mod sanitize;
mod selector;
mod url;

pub use self::url::{host_matches_domain, resolve_http_url};
pub use sanitize::body_preview;
pub use selector::{compile_regex_unsafe, parse_selector_unsafe, parse_selector_with_fallback};
