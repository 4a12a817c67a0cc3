pub mod language;
pub mod model;
pub mod reader;

#[cfg(test)]
mod tests;

pub use model::ExtractedContent;

use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::fetcher::types::PageResponse;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("extraction failed: no readable content found at {url}")]
    NoContent { url: Url },
}

/// Reduce a fetched page to its main readable text.
pub fn extract(resp: &PageResponse) -> Result<ExtractedContent, ExtractError> {
    let no_content = || ExtractError::NoContent {
        url: resp.url_final.clone(),
    };

    let result = reader::extract(&resp.body_utf8, &resp.url_final).ok_or_else(no_content)?;

    let text = model::normalize_whitespace(&result.text);
    if text.is_empty() {
        return Err(no_content());
    }

    let language = language::detect_language(&text);
    debug!(
        url = %resp.url_final,
        chars = text.chars().count(),
        language = language.as_deref().unwrap_or("unknown"),
        "main text extracted"
    );

    Ok(ExtractedContent {
        url: resp.url_final.clone(),
        title: result.title.trim().to_string(),
        site_name: result.site_name,
        language,
        text,
        fetched_at: resp.fetched_at,
    })
}
