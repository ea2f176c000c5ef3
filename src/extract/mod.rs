//! Resource extraction from a terminal page.
//!
//! The terminal page of a chain is scanned for the generated image with an ordered
//! list of `ImageMatcher`s. The first matcher that yields a usable `http(s)` URL
//! wins; later matchers are only consulted when earlier ones find nothing.

use log::debug;
use scraper::Html;
use url::Url;

use crate::utils::resolve_http_url;

mod matchers;

pub use matchers::ImageMatcher;

/// Finds the resource URL in a page's HTML.
///
/// Extraction is pure: the same `html` and `base` always give the same result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceExtractor {
    matchers: Vec<ImageMatcher>,
}

impl Default for ResourceExtractor {
    fn default() -> Self {
        Self::with_matchers(ImageMatcher::default_order())
    }
}

impl ResourceExtractor {
    /// Extractor with the standard matcher order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extractor checking `matchers` in the given order.
    pub fn with_matchers(matchers: Vec<ImageMatcher>) -> Self {
        Self { matchers }
    }

    pub fn matchers(&self) -> &[ImageMatcher] {
        &self.matchers
    }

    /// Returns the first matching image URL, resolved against `base`.
    ///
    /// Candidates that do not resolve to an `http`/`https` URL (`data:` URIs, empty
    /// `src`) are skipped. `None` means no matcher found anything usable.
    ///
    /// Relative `src` values resolve per RFC 3986 against the full page URL, not its
    /// origin: on `https://host/v/abc`, `view/abc.png` becomes
    /// `https://host/v/view/abc.png` while `/view/abc.png` stays at the site root.
    pub fn extract(&self, html: &str, base: &Url) -> Option<Url> {
        let document = Html::parse_document(html);
        for matcher in &self.matchers {
            if let Some(url) = matcher
                .candidate_srcs(&document)
                .find_map(|src| resolve_http_url(base, src))
            {
                debug!("Resource matched by {}: {}", matcher, url);
                return Some(url);
            }
        }
        debug!("No resource found on {}", base);
        None
    }
}
