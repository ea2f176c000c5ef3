//! HTTP session initialization.
//!
//! Every resolution call gets its own client and cookie jar; nothing is shared
//! between calls.

use std::sync::Arc;

use reqwest::cookie::Jar;
use reqwest::ClientBuilder;

use crate::error_handling::InitializationError;
use crate::fetch::NavigatorConfig;

/// Initializes a cookie-bearing HTTP session for one resolution call.
///
/// Creates a `reqwest::Client` configured with:
/// - Redirects disabled, so each hop is inspected and counted by the navigator
/// - A fresh cookie jar, so cookies set by hop N are sent on hop N+1
/// - The per-hop timeout and User-Agent from `config`
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_session_client(
    config: &NavigatorConfig,
) -> Result<(reqwest::Client, Arc<Jar>), InitializationError> {
    let jar = Arc::new(Jar::default());
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .cookie_provider(Arc::clone(&jar))
        .timeout(config.hop_timeout)
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok((client, jar))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::cookie::CookieStore;
    use url::Url;

    #[test]
    fn test_session_jars_are_independent() {
        let config = crate::Config::default().navigator_config();
        let (_, jar_a) = init_session_client(&config).unwrap();
        let (_, jar_b) = init_session_client(&config).unwrap();

        let url = Url::parse("https://example.com/").unwrap();
        jar_a.add_cookie_str("session=abc", &url);

        assert!(jar_a.cookies(&url).is_some());
        assert!(jar_b.cookies(&url).is_none());
    }
}
