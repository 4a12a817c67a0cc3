use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static SPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t\u{3000}]+").unwrap());
static BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n+").unwrap());

/// Main readable content of a page.
#[derive(Debug, Clone)]
pub struct ExtractedContent {
    pub url: Url,
    pub title: String,
    pub site_name: Option<String>,
    pub language: Option<String>,
    pub text: String,
    pub fetched_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct ReadabilityResult {
    pub title: String,
    pub site_name: Option<String>,
    pub text: String,
}

/// Collapses runs of spaces (including ideographic spaces) and squeezes
/// blank-line runs to a single paragraph break.
pub fn normalize_whitespace(text: &str) -> String {
    let text = text.trim();
    let spaced = SPACE_RUN.replace_all(text, " ");
    BLANK_LINES.replace_all(&spaced, "\n\n").trim().to_string()
}
