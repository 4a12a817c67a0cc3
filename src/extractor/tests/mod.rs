use bytes::Bytes;
use chrono::Utc;
use std::fs;
use url::Url;

use crate::extractor::{ExtractError, extract};
use crate::fetcher::types::{Charset, PageResponse};

#[test]
fn test_extract_article() {
    let html = fs::read_to_string("src/extractor/tests/fixtures/article.html")
        .expect("Failed to read test fixture");

    let response = create_test_response(html, "https://example.com/article");
    let content = extract(&response).expect("article should be extracted");

    assert!(content.title.contains("Sample Article"));
    assert_eq!(content.site_name, Some("News Site".to_string()));
    assert!(content.text.contains("first paragraph"));
    assert!(content.text.contains("second paragraph"));
    assert!(!content.text.contains("window.analytics"));
    assert!(!content.text.contains("font-family"));
    assert!(!content.text.contains("Home"));
    assert!(!content.text.contains("Buy one"));
    assert!(!content.text.contains("Other stories"));
    assert!(!content.text.contains("Copyright"));
    assert_eq!(content.language, Some("en".to_string()));
    assert_eq!(content.url.as_str(), "https://example.com/article");
}

#[test]
fn test_reject_empty_page() {
    let html = fs::read_to_string("src/extractor/tests/fixtures/empty.html")
        .expect("Failed to read test fixture");

    let response = create_test_response(html, "https://example.com/empty");
    let err = extract(&response).unwrap_err();

    assert!(matches!(err, ExtractError::NoContent { .. }));
    assert!(err.to_string().starts_with("extraction failed"));
    assert!(err.to_string().contains("https://example.com/empty"));
}

#[test]
fn test_reject_zero_length_body() {
    let response = create_test_response(String::new(), "https://example.com/blank");
    assert!(extract(&response).is_err());
}

#[test]
fn test_reject_script_only_page() {
    let html = "<html><body><script>document.write('hello')</script></body></html>".to_string();
    let response = create_test_response(html, "https://example.com/spa");
    assert!(extract(&response).is_err());
}

fn link_list_page(story: &str) -> String {
    let links = "<a href=\"/section\">Link item</a>".repeat(40);
    format!(
        "<html><head><title>Portal</title></head><body><nav>{links}</nav>{story}<footer>{links}</footer></body></html>"
    )
}

#[test]
fn test_reject_navigation_only_page() {
    let response = create_test_response(link_list_page(""), "https://example.com/portal");
    let err = extract(&response).unwrap_err();

    assert!(matches!(err, ExtractError::NoContent { .. }));
}

#[test]
fn test_short_story_wins_over_navigation() {
    let html = link_list_page("<p>Short real story text here.</p>");
    let response = create_test_response(html, "https://example.com/story");
    let content = extract(&response).unwrap();

    assert!(content.text.contains("Short real story text here."));
    assert!(!content.text.contains("Link item"));
}

#[test]
fn test_minimal_valid_content() {
    let html = format!(
        r#"<!DOCTYPE html><html><head><title>Valid Article</title></head><body><article><h1>Valid Article</h1><p>{}</p></article></body></html>"#,
        "This is a valid article with enough content to pass the minimum requirements for extraction. ".repeat(20)
    );

    let response = create_test_response(html, "https://example.com/valid");
    let content = extract(&response).unwrap();

    assert_eq!(content.title, "Valid Article");
    assert!(content.text.contains("valid article with enough content"));
}

#[test]
fn test_short_page_still_extracts() {
    let html = "<html><head><title>Note</title></head><body><p>Short but real text.</p></body></html>"
        .to_string();

    let response = create_test_response(html, "https://example.com/note");
    let content = extract(&response).unwrap();

    assert!(content.text.contains("Short but real text."));
    assert_eq!(content.language, None);
}

#[test]
fn test_malformed_html() {
    let html =
        "<html><head><title>Broken</title><body><p>Unclosed tags<div>More content".to_string();

    let response = create_test_response(html, "https://example.com/broken");

    // Should handle malformed HTML gracefully
    if let Ok(content) = extract(&response) {
        assert!(content.text.contains("Unclosed tags") || content.text.contains("More content"));
    }
}

pub(crate) fn create_test_response(html: String, url: &str) -> PageResponse {
    PageResponse {
        url_final: Url::parse(url).unwrap(),
        body_raw: Bytes::from(html.clone()),
        body_utf8: html,
        charset: Charset::Utf8,
        fetched_at: Utc::now(),
    }
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_extract_never_panics(
            html in ".*",
            url in "https://[a-z]+\\.com/[a-z]*"
        ) {
            let response = create_test_response(html, &url);
            let _ = extract(&response);
        }

        #[test]
        fn test_extracted_text_is_never_blank(html in ".*") {
            let response = create_test_response(html, "https://example.com");
            if let Ok(content) = extract(&response) {
                prop_assert!(!content.text.trim().is_empty());
            }
        }
    }
}
