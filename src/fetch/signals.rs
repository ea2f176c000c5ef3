//! Body-level navigation signals.
//!
//! A 2xx page can still send the browser elsewhere. The navigator checks an ordered
//! list of `BodySignal`s and takes the first one that yields a target:
//!
//! 1. `<meta http-equiv="refresh">`
//! 2. inline `<script>` assigning the page location
//! 3. a link to a known file-hosting site anywhere in the raw body
//!
//! HTTP-level redirects are handled before any of these, in the navigator itself.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};
use url::Url;

use super::instruction::RedirectInstruction;
use crate::utils::{
    compile_regex_unsafe, host_matches_domain, parse_selector_unsafe, resolve_http_url,
};

const META_REFRESH_SELECTOR_STR: &str = "meta[http-equiv]";
const INLINE_SCRIPT_SELECTOR_STR: &str = "script:not([src])";

// `location.href = "..."`, `window.location = '...'`, `document.location.href="..."`
const LOCATION_ASSIGN_PATTERN: &str =
    r#"(?:\b(?:window|document|self|top)\s*\.\s*)?\blocation(?:\s*\.\s*href)?\s*=\s*["']([^"']+)["']"#;
// `location.replace("...")`, `window.location.assign('...')`
const LOCATION_CALL_PATTERN: &str =
    r#"\blocation\s*\.\s*(?:replace|assign)\s*\(\s*["']([^"']+)["']\s*\)"#;
// Absolute http(s) URL in free text; the host is checked against the file-host list.
// Trailing sentence punctuation is trimmed after matching.
const ABSOLUTE_URL_PATTERN: &str = r#"(?i)https?://[a-z0-9.-]+(?::\d+)?(?:[/?#][^\s"'<>\\]*)?"#;

static META_REFRESH_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(META_REFRESH_SELECTOR_STR, "META_REFRESH_SELECTOR")
});
static INLINE_SCRIPT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(INLINE_SCRIPT_SELECTOR_STR, "INLINE_SCRIPT_SELECTOR")
});
static LOCATION_ASSIGN_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(LOCATION_ASSIGN_PATTERN, "LOCATION_ASSIGN_RE"));
static LOCATION_CALL_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(LOCATION_CALL_PATTERN, "LOCATION_CALL_RE"));
static ABSOLUTE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(ABSOLUTE_URL_PATTERN, "ABSOLUTE_URL_RE"));

/// A fetched 2xx page as seen by the body signals.
pub struct PageView<'a> {
    pub url: &'a Url,
    pub body: &'a str,
    pub document: &'a Html,
}

/// One body-level navigation heuristic.
#[derive(Debug, Clone)]
pub enum BodySignal {
    MetaRefresh,
    ScriptNavigation,
    EmbeddedResourceHost(FileHostPattern),
}

impl BodySignal {
    /// The standard priority order: meta refresh, script, file-host link.
    pub fn default_order(file_hosts: &[String]) -> Vec<BodySignal> {
        let mut signals = vec![BodySignal::MetaRefresh, BodySignal::ScriptNavigation];
        if let Some(pattern) = FileHostPattern::new(file_hosts) {
            signals.push(BodySignal::EmbeddedResourceHost(pattern));
        }
        signals
    }

    /// Runs this heuristic against a page.
    pub fn detect(&self, page: &PageView<'_>) -> Option<RedirectInstruction> {
        match self {
            BodySignal::MetaRefresh => {
                detect_meta_refresh(page.document, page.url).map(RedirectInstruction::MetaRefresh)
            }
            BodySignal::ScriptNavigation => detect_script_navigation(page.document, page.url)
                .map(RedirectInstruction::ScriptNavigation),
            BodySignal::EmbeddedResourceHost(pattern) => pattern
                .find_link(page.body, page.url)
                .map(RedirectInstruction::EmbeddedResourceHost),
        }
    }
}

/// Inspects a 2xx body and returns the first instruction produced by `signals`,
/// or `Terminal`.
///
/// The document is parsed once here and dropped before returning.
pub fn inspect_body(signals: &[BodySignal], body: &str, url: &Url) -> RedirectInstruction {
    let document = Html::parse_document(body);
    let page = PageView {
        url,
        body,
        document: &document,
    };
    signals
        .iter()
        .find_map(|signal| signal.detect(&page))
        .unwrap_or(RedirectInstruction::Terminal)
}

/// Finds the target of the first `<meta http-equiv="refresh">` carrying a URL.
pub fn detect_meta_refresh(document: &Html, base: &Url) -> Option<Url> {
    document
        .select(&META_REFRESH_SELECTOR)
        .filter(|element| {
            element
                .value()
                .attr("http-equiv")
                .is_some_and(|v| v.trim().eq_ignore_ascii_case("refresh"))
        })
        .filter_map(|element| element.value().attr("content"))
        .filter_map(refresh_target)
        .find_map(|target| resolve_http_url(base, target))
}

/// Extracts the URL part of a refresh `content` value such as
/// `0; URL='https://example.com/next'`. A bare delay has no target.
fn refresh_target(content: &str) -> Option<&str> {
    let (_, rest) = content.split_once([';', ','])?;
    let rest = rest.trim_start();
    if !rest.get(..3)?.eq_ignore_ascii_case("url") {
        return None;
    }
    let value = rest[3..].trim_start().strip_prefix('=')?.trim();
    let value = value.trim_matches(|c| c == '"' || c == '\'').trim();
    (!value.is_empty()).then_some(value)
}

/// Finds the first location assignment in an inline script.
///
/// Only the script source is matched; nothing is executed.
pub fn detect_script_navigation(document: &Html, base: &Url) -> Option<Url> {
    document.select(&INLINE_SCRIPT_SELECTOR).find_map(|script| {
        let source: String = script.text().collect();
        script_target(&source).and_then(|target| resolve_http_url(base, target))
    })
}

/// Earliest location assignment or `location.replace/assign` call in `source`.
fn script_target(source: &str) -> Option<&str> {
    let assign = LOCATION_ASSIGN_RE.captures(source).and_then(|c| c.get(1));
    let call = LOCATION_CALL_RE.captures(source).and_then(|c| c.get(1));
    match (assign, call) {
        (Some(a), Some(c)) => Some(if a.start() <= c.start() { a } else { c }),
        (a, c) => a.or(c),
    }
    .map(|m| m.as_str())
}

/// Matches absolute links whose host belongs to a fixed set of file-hosting domains.
#[derive(Debug, Clone)]
pub struct FileHostPattern {
    domains: Vec<String>,
}

impl FileHostPattern {
    /// Builds the pattern, or `None` when no domains are configured.
    pub fn new(domains: &[String]) -> Option<Self> {
        let domains: Vec<String> = domains
            .iter()
            .map(|d| d.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|d| !d.is_empty())
            .collect();
        (!domains.is_empty()).then_some(Self { domains })
    }

    /// Configured domain that `host` belongs to, if any.
    fn domain_of(&self, host: &str) -> Option<&str> {
        self.domains
            .iter()
            .find(|d| host_matches_domain(host, d))
            .map(String::as_str)
    }

    /// First linked file-host URL worth navigating to.
    ///
    /// Links into the file host the page is already on are skipped, so a file-host
    /// page linking to itself is terminal. A link to a page visited earlier in the
    /// call is still returned and the navigator reports it as a cycle.
    pub fn find_link(&self, body: &str, page_url: &Url) -> Option<Url> {
        let current_domain = page_url.host_str().and_then(|h| self.domain_of(h));

        ABSOLUTE_URL_RE
            .find_iter(body)
            .filter_map(|m| resolve_http_url(page_url, &clean_text_link(m.as_str())))
            .filter(|candidate| candidate != page_url)
            .find(|candidate| {
                let candidate_domain = candidate.host_str().and_then(|h| self.domain_of(h));
                candidate_domain.is_some() && candidate_domain != current_domain
            })
    }
}

/// Undoes HTML escaping of `&` and drops punctuation that ends the surrounding
/// sentence rather than the URL.
fn clean_text_link(raw: &str) -> String {
    raw.replace("&amp;", "&")
        .trim_end_matches(['.', ',', ';', ':', '!', '?', ')', ']', '}', '\''])
        .to_string()
}
