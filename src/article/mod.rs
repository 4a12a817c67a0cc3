//! Page text retrieval: one GET, then main-content extraction.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, instrument};

use crate::extractor::{self, ExtractError, ExtractedContent};
use crate::fetcher::{FetchError, Fetcher};

#[derive(Error, Debug)]
pub enum ArticleError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extract(#[from] ExtractError),
}

/// Something that can turn a URL into its main readable text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleSource: Send + Sync {
    async fn main_text(&self, url: &str) -> Result<ExtractedContent, ArticleError>;
}

/// [`ArticleSource`] backed by a live HTTP fetch.
#[derive(Debug, Clone)]
pub struct WebArticleSource {
    fetcher: Fetcher,
}

impl WebArticleSource {
    pub fn new(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl ArticleSource for WebArticleSource {
    #[instrument(skip_all, fields(url = %url))]
    async fn main_text(&self, url: &str) -> Result<ExtractedContent, ArticleError> {
        let page = self.fetcher.fetch(url).await?;
        let content = extractor::extract(&page)?;

        info!(
            final_url = %content.url,
            title = %content.title,
            language = content.language.as_deref().unwrap_or("unknown"),
            chars = content.text.chars().count(),
            "article extracted"
        );
        Ok(content)
    }
}
