//! Whole-resolution retries and the prompt cache.

mod helpers;

use chain_resolver::{
    resolve_prompt_cached, resolve_prompt_with_retry, FetchCause, ResolutionCache,
    ResolutionError,
};
use helpers::{create_test_config, html_page};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const RESULT_PAGE: &str = r#"<html><body><img class="result-image" src="/out/1.png"></body></html>"#;

#[tokio::test]
async fn test_transient_failure_retried_with_fresh_session() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ai-image/"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ai-image/"))
        .respond_with(html_page(RESULT_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let config = chain_resolver::Config {
        retries: 2,
        ..create_test_config(&server)
    };
    let image = resolve_prompt_with_retry("retry me", &config).await.unwrap();

    assert_eq!(image.resource_url.path(), "/out/1.png");
    assert_eq!(image.hop_count, 0);
}

#[tokio::test]
async fn test_client_error_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ai-image/"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let config = chain_resolver::Config {
        retries: 2,
        ..create_test_config(&server)
    };
    let err = resolve_prompt_with_retry("missing", &config)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ResolutionError::FetchFailed {
            hop: 0,
            cause: FetchCause::Status(404),
            ..
        }
    ));
}

#[tokio::test]
async fn test_retries_exhausted_returns_last_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ai-image/"))
        .respond_with(ResponseTemplate::new(502))
        .expect(2)
        .mount(&server)
        .await;

    let config = chain_resolver::Config {
        retries: 1,
        ..create_test_config(&server)
    };
    let err = resolve_prompt_with_retry("flaky", &config)
        .await
        .unwrap_err();

    assert!(err.is_retriable());
    assert!(err.to_string().contains("502"), "unexpected message: {err}");
}

#[tokio::test]
async fn test_cached_prompt_skips_network() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ai-image/"))
        .respond_with(html_page(RESULT_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let config = create_test_config(&server);
    let mut cache = ResolutionCache::new(Duration::from_secs(60), 4);

    let first = resolve_prompt_cached("a cat", &config, &mut cache)
        .await
        .unwrap();
    let second = resolve_prompt_cached("a cat", &config, &mut cache)
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(cache.len(), 1);
}

#[tokio::test]
async fn test_failures_not_cached() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ai-image/"))
        .respond_with(html_page("<p>no image yet</p>"))
        .expect(2)
        .mount(&server)
        .await;

    let config = create_test_config(&server);
    let mut cache = ResolutionCache::default();

    for _ in 0..2 {
        let err = resolve_prompt_cached("a cat", &config, &mut cache)
            .await
            .unwrap_err();
        assert!(matches!(err, ResolutionError::ResourceNotFound { .. }));
    }
    assert!(cache.is_empty());
}

#[tokio::test]
async fn test_shared_cache_keeps_generators_apart() {
    let first_site = MockServer::start().await;
    let second_site = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ai-image/"))
        .respond_with(html_page(RESULT_PAGE))
        .expect(1)
        .mount(&first_site)
        .await;
    Mock::given(method("GET"))
        .and(path("/ai-image/"))
        .respond_with(html_page(
            r#"<html><body><img class="result-image" src="/out/2.png"></body></html>"#,
        ))
        .expect(1)
        .mount(&second_site)
        .await;

    let mut cache = ResolutionCache::new(Duration::from_secs(60), 4);
    let first = resolve_prompt_cached("a cat", &create_test_config(&first_site), &mut cache)
        .await
        .unwrap();
    let second = resolve_prompt_cached("a cat", &create_test_config(&second_site), &mut cache)
        .await
        .unwrap();

    assert_eq!(first.resource_url.path(), "/out/1.png");
    assert_eq!(second.resource_url.path(), "/out/2.png");
    assert_ne!(first.seed_url, second.seed_url);
    assert_eq!(cache.len(), 2);
}
