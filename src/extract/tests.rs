// Resource extractor tests.

use super::*;

fn base() -> Url {
    Url::parse("https://h.example").unwrap()
}

#[test]
fn test_class_marker_relative_src_resolved() {
    let html = r#"<html><body><img class="result-image" src="/x.png"></body></html>"#;
    let url = ResourceExtractor::default().extract(html, &base()).unwrap();
    assert_eq!(url.as_str(), "https://h.example/x.png");
}

#[test]
fn test_unmarked_banner_not_found() {
    let html = r#"<html><body><img src="https://cdn.example/banner.jpg"></body></html>"#;
    assert_eq!(ResourceExtractor::default().extract(html, &base()), None);
}

#[test]
fn test_path_relative_src_resolves_under_page_directory() {
    let page = Url::parse("https://files.example/v/abc").unwrap();
    let extractor = ResourceExtractor::default();

    let relative = r#"<img class="result-image" src="view/abc.png">"#;
    assert_eq!(
        extractor.extract(relative, &page).unwrap().as_str(),
        "https://files.example/v/view/abc.png"
    );

    let rooted = r#"<img class="result-image" src="/view/abc.png">"#;
    assert_eq!(
        extractor.extract(rooted, &page).unwrap().as_str(),
        "https://files.example/view/abc.png"
    );
}

#[test]
fn test_extract_is_idempotent() {
    let html = r#"<div><img id="img" src="view/abc.png"><img src="/output/1.png"></div>"#;
    let extractor = ResourceExtractor::default();
    let page = Url::parse("https://files.example/v/abc").unwrap();
    let first = extractor.extract(html, &page);
    let second = extractor.extract(html, &page);
    assert_eq!(first, second);
    assert_eq!(
        first.unwrap().as_str(),
        "https://files.example/v/view/abc.png"
    );
}

#[test]
fn test_matcher_priority_beats_document_order() {
    let html = r#"
        <img src="/output/early.png">
        <img id="img" src="/viewer.png">
        <img class="result-image" src="/result.png">
    "#;
    let url = ResourceExtractor::default().extract(html, &base()).unwrap();
    assert_eq!(url.as_str(), "https://h.example/result.png");
}

#[test]
fn test_falls_through_to_keyword_matcher() {
    let html = r#"<img src="/logo.svg"><img src="https://cdn.h.example/OUTPUT/77.jpg">"#;
    let url = ResourceExtractor::default().extract(html, &base()).unwrap();
    assert_eq!(url.as_str(), "https://cdn.h.example/OUTPUT/77.jpg");
}

#[test]
fn test_non_http_candidates_skipped() {
    let html = r#"
        <img class="result-image" src="data:image/png;base64,AAAA">
        <img class="result-image" src="/real.png">
    "#;
    let url = ResourceExtractor::default().extract(html, &base()).unwrap();
    assert_eq!(url.as_str(), "https://h.example/real.png");
}

#[test]
fn test_custom_matchers() {
    let extractor =
        ResourceExtractor::with_matchers(vec![ImageMatcher::ClassMarker("hero".to_string())]);
    let html = r#"<img class="result-image" src="/x.png"><img class="hero" src="/hero.png">"#;
    let url = extractor.extract(html, &base()).unwrap();
    assert_eq!(url.as_str(), "https://h.example/hero.png");
    assert_eq!(extractor.matchers().len(), 1);
}

#[test]
fn test_empty_page() {
    assert_eq!(ResourceExtractor::new().extract("", &base()), None);
}
