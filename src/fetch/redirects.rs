//! Hop-by-hop navigation from a seed URL to a terminal page.
//!
//! Transport-level redirect following is disabled; every hop is fetched, counted and
//! logged here. A hop navigates on:
//! - 301/302/303/307/308 with a `Location` header
//! - a 2xx body carrying one of the `BodySignal`s
//!
//! Anything else ends the chain (`Terminal`) or fails the call.

use log::{debug, info, trace, warn};
use reqwest::header::LOCATION;
use url::Url;

use super::instruction::InstructionKind;
use super::request::RequestHeaders;
use super::signals::{inspect_body, BodySignal};
use super::state::{Hop, NavigationState};
use super::NavigatorConfig;
use crate::config::{MAX_HTML_PREVIEW_CHARS, REDIRECT_STATUS_CODES};
use crate::error_handling::{categorize_reqwest_error, FetchCause, ResolutionError};
use crate::initialization::init_session_client;
use crate::utils::{body_preview, resolve_http_url};

/// Successful outcome of `Navigator::resolve`.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// URL of the page that ended the chain.
    pub terminal_url: Url,
    /// Body of the terminal page.
    pub body: String,
    /// Number of accepted navigations (0 when the seed itself is terminal).
    pub hop_count: usize,
    /// Every accepted navigation, in order.
    pub chain: Vec<Hop>,
}

/// What a single fetch produced before body inspection.
enum FetchedPage {
    Redirect(Url),
    Document(String),
}

/// Walks navigation chains.
///
/// A `Navigator` holds only configuration; each `resolve` call creates its own
/// session (client + cookie jar) and `NavigationState`, so one navigator can serve
/// concurrent calls.
#[derive(Debug, Clone)]
pub struct Navigator {
    config: NavigatorConfig,
    signals: Vec<BodySignal>,
}

impl Navigator {
    /// Creates a navigator using the standard body-signal order.
    pub fn new(config: NavigatorConfig) -> Self {
        let signals = BodySignal::default_order(&config.file_hosts);
        Self { config, signals }
    }

    /// Creates a navigator with a custom body-signal list, checked in order.
    pub fn with_signals(config: NavigatorConfig, signals: Vec<BodySignal>) -> Self {
        Self { config, signals }
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// Follows the chain starting at `seed` until a terminal page.
    ///
    /// # Errors
    ///
    /// - `FetchFailed` on transport errors, unusable statuses or oversized bodies
    /// - `CycleDetected` when a target was already visited in this call
    /// - `HopLimitExceeded` when a navigation is found after `max_hops` hops
    /// - `OverallTimeoutExceeded` when the call outlives `overall_timeout`
    pub async fn resolve(&self, seed: &Url) -> Result<Resolution, ResolutionError> {
        let budget = self.config.overall_timeout;
        match tokio::time::timeout(budget, self.walk(seed.clone())).await {
            Ok(result) => result,
            Err(_) => {
                warn!(
                    "Resolution of {} exceeded overall timeout of {}s",
                    seed,
                    budget.as_secs()
                );
                Err(ResolutionError::OverallTimeoutExceeded { budget })
            }
        }
    }

    async fn walk(&self, seed: Url) -> Result<Resolution, ResolutionError> {
        let (client, jar) = init_session_client(&self.config)?;
        trace!("Session headers: {:?}", RequestHeaders::as_vec());
        let mut state = NavigationState::new(seed, jar);

        loop {
            let hop = state.hop_count();
            let url = state.current_url().clone();
            debug!(
                "Hop {}: GET {} (cookies: {})",
                hop,
                url,
                if state.carries_cookies() { "yes" } else { "no" }
            );

            let (kind, target) = match self.fetch(&client, hop, &url).await? {
                FetchedPage::Redirect(target) => (InstructionKind::HttpLocation, target),
                FetchedPage::Document(body) => {
                    let instruction = inspect_body(&self.signals, &body, &url);
                    let kind = instruction.kind();
                    match instruction.into_target() {
                        Some(target) => (kind, target),
                        None => {
                            info!("Reached terminal page {} after {} hop(s)", url, hop);
                            let (terminal_url, chain) = state.finish();
                            return Ok(Resolution {
                                terminal_url,
                                body,
                                hop_count: hop,
                                chain,
                            });
                        }
                    }
                }
            };

            info!("Hop {}: {} -> {} ({})", hop, url, target, kind);
            state.advance(kind, target)?;
            if state.hop_count() > self.config.max_hops {
                warn!(
                    "Giving up on {} after {} hops without a terminal page",
                    url, self.config.max_hops
                );
                return Err(ResolutionError::HopLimitExceeded {
                    max_hops: self.config.max_hops,
                });
            }
        }
    }

    /// Fetches one hop and classifies the raw response.
    async fn fetch(
        &self,
        client: &reqwest::Client,
        hop: usize,
        url: &Url,
    ) -> Result<FetchedPage, ResolutionError> {
        let fail = |cause: FetchCause| ResolutionError::FetchFailed {
            hop,
            url: url.clone(),
            cause,
        };

        let response = RequestHeaders::apply_to_request_builder(client.get(url.clone()))
            .send()
            .await
            .map_err(|e| fail(categorize_reqwest_error(&e)))?;

        let status = response.status();
        let status_code = status.as_u16();
        debug!("Hop {}: {} responded {}", hop, url, status_code);

        if REDIRECT_STATUS_CODES.contains(&status_code) {
            let location = response
                .headers()
                .get(LOCATION)
                .ok_or_else(|| fail(FetchCause::MissingLocation(status_code)))?;
            let location = location.to_str().map_err(|_| {
                fail(FetchCause::InvalidLocation(
                    String::from_utf8_lossy(location.as_bytes()).into_owned(),
                ))
            })?;
            let target = resolve_http_url(url, location)
                .ok_or_else(|| fail(FetchCause::InvalidLocation(location.to_string())))?;
            return Ok(FetchedPage::Redirect(target));
        }

        if !status.is_success() {
            warn!("Hop {}: {} returned status {}", hop, url, status_code);
            return Err(fail(FetchCause::Status(status_code)));
        }

        let body = read_body_limited(response, self.config.max_body_size)
            .await
            .map_err(fail)?;
        debug!(
            "Hop {}: body preview: {}",
            hop,
            body_preview(&body, MAX_HTML_PREVIEW_CHARS)
        );
        Ok(FetchedPage::Document(body))
    }
}

/// Reads a response body, failing once it grows past `limit` bytes.
///
/// Bytes are decoded lossily as UTF-8; every signal and matcher works on ASCII
/// markup.
async fn read_body_limited(
    mut response: reqwest::Response,
    limit: usize,
) -> Result<String, FetchCause> {
    if response
        .content_length()
        .is_some_and(|len| len > limit as u64)
    {
        return Err(FetchCause::BodyTooLarge(limit));
    }

    let mut bytes: Vec<u8> = Vec::new();
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| categorize_reqwest_error(&e))?
    {
        if bytes.len() + chunk.len() > limit {
            return Err(FetchCause::BodyTooLarge(limit));
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
