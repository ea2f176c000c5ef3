//! Image matchers for terminal pages.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::config::{RESULT_IMAGE_CLASS, RESULT_SRC_KEYWORDS, VIEWER_IMAGE_ID};
use crate::utils::parse_selector_with_fallback;

const IMG_WITH_SRC_SELECTOR_STR: &str = "img[src]";

static IMG_WITH_SRC_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_with_fallback(IMG_WITH_SRC_SELECTOR_STR, "IMG_WITH_SRC_SELECTOR")
});

/// One way of recognizing the generated image among a page's `<img>` elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageMatcher {
    /// `<img>` whose class list contains this class.
    ClassMarker(String),
    /// `<img>` with exactly this `id`.
    ElementId(String),
    /// `<img>` whose `src` contains any of these keywords, case-insensitively.
    SrcKeywords(Vec<String>),
}

impl ImageMatcher {
    /// Generator result class, then file-host viewer id, then src keywords.
    pub fn default_order() -> Vec<ImageMatcher> {
        vec![
            ImageMatcher::ClassMarker(RESULT_IMAGE_CLASS.to_string()),
            ImageMatcher::ElementId(VIEWER_IMAGE_ID.to_string()),
            ImageMatcher::SrcKeywords(RESULT_SRC_KEYWORDS.iter().map(|k| k.to_string()).collect()),
        ]
    }

    /// `src` attributes of matching images, in document order.
    pub fn candidate_srcs<'a>(&'a self, document: &'a Html) -> impl Iterator<Item = &'a str> + 'a {
        document
            .select(&IMG_WITH_SRC_SELECTOR)
            .filter(move |img| self.matches(img))
            .filter_map(|img| img.value().attr("src"))
    }

    fn matches(&self, img: &ElementRef<'_>) -> bool {
        let element = img.value();
        match self {
            ImageMatcher::ClassMarker(class) => element.classes().any(|c| c == class),
            ImageMatcher::ElementId(id) => element.id() == Some(id.as_str()),
            ImageMatcher::SrcKeywords(keywords) => {
                let src = element.attr("src").unwrap_or_default().to_ascii_lowercase();
                keywords
                    .iter()
                    .any(|k| !k.is_empty() && src.contains(&k.to_ascii_lowercase()))
            }
        }
    }
}

impl std::fmt::Display for ImageMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageMatcher::ClassMarker(class) => write!(f, "img.{}", class),
            ImageMatcher::ElementId(id) => write!(f, "img#{}", id),
            ImageMatcher::SrcKeywords(keywords) => write!(f, "img[src~{}]", keywords.join("|")),
        }
    }
}
