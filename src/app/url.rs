//! Seed URL construction and validation.

use log::warn;
use url::Url;

use crate::config::PROMPT_QUERY_PARAM;
use crate::error_handling::ResolutionError;

/// Maximum URL length (2048 characters), matching common browser and server limits.
const MAX_URL_LENGTH: usize = 2048;

/// Validates and normalizes a base URL.
///
/// Adds an `https://` prefix if no scheme is present, then checks that the result
/// parses and uses http/https. Logs a warning and returns `None` otherwise.
pub fn validate_and_normalize_url(url: &str) -> Option<Url> {
    let url = url.trim();
    if url.len() > MAX_URL_LENGTH {
        warn!(
            "Rejecting URL exceeding maximum length ({} > {})",
            url.len(),
            MAX_URL_LENGTH
        );
        return None;
    }

    let normalized = if !url.starts_with("http://") && !url.starts_with("https://") {
        format!("https://{url}")
    } else {
        url.to_string()
    };

    match Url::parse(&normalized) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") && parsed.has_host() => {
            Some(parsed)
        }
        Ok(_) => {
            warn!("Rejecting unsupported URL: {url}");
            None
        }
        Err(e) => {
            warn!("Rejecting invalid URL {url}: {e}");
            None
        }
    }
}

/// Builds the page a prompt is submitted to: `base_url` with `prompt` set as its
/// URL-encoded `prompt` query parameter.
///
/// Existing query parameters on `base_url` are kept; an existing `prompt`
/// parameter is replaced.
///
/// # Errors
///
/// Returns `ResolutionError::InvalidSeedUrl` if `base_url` is not a usable
/// http(s) URL.
pub fn build_seed_url(base_url: &str, prompt: &str) -> Result<Url, ResolutionError> {
    // Bases that parse but are not http(s) report EmptyHost
    let mut seed = validate_and_normalize_url(base_url).ok_or_else(|| {
        ResolutionError::InvalidSeedUrl(
            Url::parse(base_url.trim())
                .err()
                .unwrap_or(url::ParseError::EmptyHost),
        )
    })?;

    let kept: Vec<(String, String)> = seed
        .query_pairs()
        .filter(|(name, _)| name != PROMPT_QUERY_PARAM)
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect();
    seed.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair(PROMPT_QUERY_PARAM, prompt.trim());
    Ok(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_and_normalize_url_adds_https() {
        let result = validate_and_normalize_url("example.com/ai-image/");
        assert_eq!(result.unwrap().as_str(), "https://example.com/ai-image/");
    }

    #[test]
    fn test_validate_and_normalize_url_preserves_http() {
        let result = validate_and_normalize_url("http://127.0.0.1:8080/gen");
        assert_eq!(result.unwrap().as_str(), "http://127.0.0.1:8080/gen");
    }

    #[test]
    fn test_validate_and_normalize_url_rejects_invalid_url() {
        assert_eq!(validate_and_normalize_url("not a valid url!!!"), None);
    }

    #[test]
    fn test_validate_and_normalize_url_rejects_too_long() {
        let long = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH));
        assert_eq!(validate_and_normalize_url(&long), None);
    }

    #[test]
    fn test_build_seed_url_encodes_prompt() {
        let seed = build_seed_url("https://gen.example/ai-image/", "a cat & a dog").unwrap();
        assert_eq!(
            seed.as_str(),
            "https://gen.example/ai-image/?prompt=a+cat+%26+a+dog"
        );
        let prompt: Vec<_> = seed.query_pairs().collect();
        assert_eq!(prompt[0].1, "a cat & a dog");
    }

    #[test]
    fn test_build_seed_url_keeps_other_params_and_replaces_prompt() {
        let seed = build_seed_url("https://gen.example/?size=512&prompt=old", "new").unwrap();
        assert_eq!(seed.as_str(), "https://gen.example/?size=512&prompt=new");
    }

    #[test]
    fn test_build_seed_url_unicode_prompt() {
        let seed = build_seed_url("https://gen.example/", "café au lait").unwrap();
        assert_eq!(
            seed.as_str(),
            "https://gen.example/?prompt=caf%C3%A9+au+lait"
        );
    }

    #[test]
    fn test_build_seed_url_invalid_base() {
        let err = build_seed_url("not a valid url!!!", "cat").unwrap_err();
        assert!(matches!(err, ResolutionError::InvalidSeedUrl(_)));
    }
}
