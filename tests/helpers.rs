// Shared test helpers for mock generator sites.
//
// Each test file pulls this in with `mod helpers;`, so not every helper is used
// everywhere.

use chain_resolver::{Config, LogFormat, LogLevel};
use wiremock::{MockServer, ResponseTemplate};

/// Config pointing at `server`'s `/ai-image/` page, with `localhost` treated as a
/// file host.
///
/// The mock server listens on 127.0.0.1, so links to `localhost:<port>` reach the
/// same server under a different host name.
#[allow(dead_code)]
pub fn create_test_config(server: &MockServer) -> Config {
    Config {
        base_url: format!("{}/ai-image/", server.uri()),
        timeout_seconds: 5,
        overall_timeout_seconds: 15,
        extra_file_hosts: vec!["localhost".to_string()],
        retries: 0,
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
        ..Default::default()
    }
}

/// `http://localhost:<port>` for `server`.
#[allow(dead_code)]
pub fn file_host_origin(server: &MockServer) -> String {
    format!("http://localhost:{}", server.address().port())
}

/// 200 response with an HTML body.
#[allow(dead_code)]
pub fn html_page(body: impl Into<String>) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "text/html; charset=utf-8")
        .set_body_string(body.into())
}

/// 302 response pointing at `location`.
#[allow(dead_code)]
pub fn redirect(location: &str) -> ResponseTemplate {
    ResponseTemplate::new(302).insert_header("location", location)
}

/// Page that refreshes to `target` immediately.
#[allow(dead_code)]
pub fn meta_refresh_page(target: &str) -> ResponseTemplate {
    html_page(format!(
        r#"<!DOCTYPE html><html><head><meta http-equiv="refresh" content="0; url={target}"><title>Generating...</title></head><body><p>Please wait</p></body></html>"#
    ))
}
