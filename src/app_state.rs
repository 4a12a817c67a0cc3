use std::sync::Arc;

use crate::{
    article::{ArticleSource, WebArticleSource},
    config::Config,
    fetcher::Fetcher,
    summarizer::{GeminiClient, Summarizer},
};

/// Shared, immutable-after-startup dependencies of the request handlers.
#[derive(Clone)]
pub struct AppState {
    pub articles: Arc<dyn ArticleSource>,
    pub summarizer: Arc<dyn Summarizer>,
}

impl AppState {
    pub fn new(articles: Arc<dyn ArticleSource>, summarizer: Arc<dyn Summarizer>) -> Self {
        Self {
            articles,
            summarizer,
        }
    }

    /// Wire the live page fetcher and Gemini client.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let articles = WebArticleSource::new(Fetcher::new()?);
        let summarizer = GeminiClient::new(config)?;
        Ok(Self::new(Arc::new(articles), Arc::new(summarizer)))
    }
}
