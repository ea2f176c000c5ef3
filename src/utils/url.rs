//! URL normalization helpers shared by the navigator and the extractor.

use url::Url;

/// Resolves `reference` against `base` and keeps it only if it is an http(s) URL.
///
/// Absolute references are parsed as-is; relative ones (`/x.png`, `x.png`,
/// `//cdn/x.png`, `?q=1`) are joined per RFC 3986. Surrounding whitespace and
/// quotes left over from attribute or script scraping are stripped first.
/// Returns `None` for empty references, fragments-only references, and non-HTTP
/// schemes (`data:`, `javascript:`, `mailto:`).
pub fn resolve_http_url(base: &Url, reference: &str) -> Option<Url> {
    let reference = reference
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .trim();
    if reference.is_empty() || reference.starts_with('#') {
        return None;
    }

    let resolved = Url::parse(reference).or_else(|_| base.join(reference)).ok()?;
    match resolved.scheme() {
        "http" | "https" => Some(resolved),
        _ => None,
    }
}

/// Returns true when `host` equals `domain` or is one of its subdomains.
pub fn host_matches_domain(host: &str, domain: &str) -> bool {
    let host = host.trim_end_matches('.').to_ascii_lowercase();
    let domain = domain.to_ascii_lowercase();
    host == domain || host.ends_with(&format!(".{domain}"))
}
