pub mod gemini;
pub mod prompt;
pub mod response;

pub use gemini::GeminiClient;
pub use response::GeneratedText;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Hard cap on the summary length, in characters.
pub const SUMMARY_MAX_CHARS: usize = 120;

#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error("summarization failed: request to the generative API failed: {0}")]
    Request(String),

    #[error("summarization failed: generative API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("summarization failed: could not decode API response: {0}")]
    Decode(String),

    #[error("summarization failed: prompt blocked ({0})")]
    Blocked(String),

    #[error("summarization failed: API response contained no text")]
    EmptyResponse,

    #[error("summarization failed: client setup failed: {0}")]
    Client(String),
}

/// A one-line summary of at most [`SUMMARY_MAX_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Summary(String);

impl Summary {
    /// Trim and hard-truncate generated text. Blank text is an error, never
    /// an empty summary.
    pub fn from_generated(text: &str) -> Result<Self, SummarizeError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(SummarizeError::EmptyResponse);
        }
        Ok(Self(truncate_chars(trimmed, SUMMARY_MAX_CHARS).to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// First `max` characters of `text`; no word-boundary handling.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<Summary, SummarizeError>;
}
