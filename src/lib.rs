//! chain_resolver library: follows an image generator's navigation chain to the
//! generated image.
//!
//! A prompt is submitted to the generator page, the resulting chain of HTTP
//! redirects, meta refreshes, script navigations and file-host links is followed
//! hop by hop with a per-call cookie session, and the image URL is extracted from
//! the terminal page.
//!
//! # Example
//!
//! ```no_run
//! use chain_resolver::{resolve_prompt_with_retry, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     max_hops: 5,
//!     ..Default::default()
//! };
//!
//! let image = resolve_prompt_with_retry("a lighthouse at dusk", &config).await?;
//! println!("{} ({} hops)", image.resource_url, image.hop_count);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

mod app;
pub mod cache;
pub mod config;
pub mod error_handling;
pub mod extract;
pub mod fetch;
pub mod initialization;
mod utils;

use log::{info, warn};
use tokio_retry::RetryIf;
use url::Url;

// Re-export public API
pub use app::{build_seed_url, validate_and_normalize_url};
pub use cache::ResolutionCache;
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{FetchCause, ResolutionError};
pub use extract::{ImageMatcher, ResourceExtractor};
pub use fetch::{Navigator, NavigatorConfig, Resolution};

use error_handling::get_retry_strategy;

/// Outcome of resolving one prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImage {
    /// Prompt as submitted.
    pub prompt: String,
    /// Generator page the chain started from.
    pub seed_url: Url,
    /// Absolute URL of the generated image.
    pub resource_url: Url,
    /// Navigations followed before the terminal page.
    pub hop_count: usize,
}

/// Resolves `prompt` once with the standard image matchers.
///
/// # Errors
///
/// Any `ResolutionError` from building the seed URL, navigating the chain, or
/// `ResourceNotFound` when the terminal page has no recognizable image.
pub async fn resolve_prompt(
    prompt: &str,
    config: &Config,
) -> Result<ResolvedImage, ResolutionError> {
    resolve_prompt_with(prompt, config, &ResourceExtractor::default()).await
}

/// Resolves `prompt` once, extracting the image with `extractor`.
pub async fn resolve_prompt_with(
    prompt: &str,
    config: &Config,
    extractor: &ResourceExtractor,
) -> Result<ResolvedImage, ResolutionError> {
    let seed_url = build_seed_url(&config.base_url, prompt)?;
    info!("Resolving prompt '{}' from {}", prompt.trim(), seed_url);

    let navigator = Navigator::new(config.navigator_config());
    let resolution = navigator.resolve(&seed_url).await?;

    let resource_url = extractor
        .extract(&resolution.body, &resolution.terminal_url)
        .ok_or_else(|| {
            warn!("No image found on terminal page {}", resolution.terminal_url);
            ResolutionError::ResourceNotFound {
                url: resolution.terminal_url.clone(),
            }
        })?;

    info!(
        "Resolved '{}' to {} after {} hop(s)",
        prompt.trim(),
        resource_url,
        resolution.hop_count
    );
    Ok(ResolvedImage {
        prompt: prompt.trim().to_string(),
        seed_url,
        resource_url,
        hop_count: resolution.hop_count,
    })
}

/// Resolves `prompt`, retrying the whole resolution with a fresh session after
/// retriable failures (timeouts, connection errors, 429 and 5xx responses).
///
/// At most `config.retries` retries are made, spaced by exponential backoff.
/// Non-retriable errors are returned immediately.
pub async fn resolve_prompt_with_retry(
    prompt: &str,
    config: &Config,
) -> Result<ResolvedImage, ResolutionError> {
    RetryIf::start(
        get_retry_strategy(config.retries),
        || resolve_prompt(prompt, config),
        |e: &ResolutionError| {
            let retriable = e.is_retriable();
            if retriable {
                warn!(
                    "{} for '{}' (retriable): {}",
                    e.error_type(),
                    prompt.trim(),
                    e
                );
            }
            retriable
        },
    )
    .await
}

/// Like `resolve_prompt_with_retry`, but answers from `cache` when it holds a live
/// entry for `prompt` on `config.base_url`, and stores fresh results in it.
pub async fn resolve_prompt_cached(
    prompt: &str,
    config: &Config,
    cache: &mut ResolutionCache,
) -> Result<ResolvedImage, ResolutionError> {
    let seed_url = build_seed_url(&config.base_url, prompt)?;
    if let Some(image) = cache.get(&seed_url) {
        info!("Cache hit for '{}': {}", prompt.trim(), image.resource_url);
        return Ok(image);
    }
    let image = resolve_prompt_with_retry(prompt, config).await?;
    cache.insert(image.clone());
    Ok(image)
}
