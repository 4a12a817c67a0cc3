#![no_main]

use bytes::Bytes;
use chrono::Utc;
use libfuzzer_sys::fuzz_target;
use url::Url;

use summary::extractor::extract;
use summary::fetcher::types::{Charset, PageResponse};

fuzz_target!(|data: &[u8]| {
    let html = String::from_utf8_lossy(data).to_string();

    let response = PageResponse {
        url_final: Url::parse("https://example.com").unwrap(),
        body_raw: Bytes::from(html.clone()),
        body_utf8: html,
        charset: Charset::Utf8,
        fetched_at: Utc::now(),
    };

    // Any input either extracts non-blank text or reports no content.
    if let Ok(content) = extract(&response) {
        assert!(!content.text.trim().is_empty());
    }
});
