use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::config::Config;
use crate::summarizer::{
    SummarizeError, Summarizer, Summary,
    prompt::build_prompt,
    response::{ApiErrorBody, GenerateContentRequest, GenerateContentResponse, GeneratedText},
};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Google Gemini `generateContent` client.
///
/// Built once at startup from [`Config`] and shared by every request.
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    language: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Result<Self, SummarizeError> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| SummarizeError::Client(e.to_string()))?;

        Ok(Self {
            client,
            api_key: config.gemini_api_key().to_string(),
            model: config.gemini_model().to_string(),
            base_url: config.gemini_base_url().to_string(),
            language: config.summary_language().to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    async fn generate(&self, prompt: String) -> Result<GenerateContentResponse, SummarizeError> {
        let url = self.endpoint();
        debug!(model = %self.model, "sending generateContent request");

        let resp = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&GenerateContentRequest::user_prompt(prompt))
            .send()
            .await
            .map_err(|e| SummarizeError::Request(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|parsed| parsed.error.message)
                .unwrap_or(body);
            return Err(SummarizeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        resp.json::<GenerateContentResponse>()
            .await
            .map_err(|e| SummarizeError::Decode(e.to_string()))
    }
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Summarizer for GeminiClient {
    #[instrument(skip_all, fields(input_chars = text.chars().count()))]
    async fn summarize(&self, text: &str) -> Result<Summary, SummarizeError> {
        let response = self.generate(build_prompt(text, &self.language)).await?;

        let Some(generated) = GeneratedText::from_response(&response) else {
            if let Some(reason) = response
                .prompt_feedback
                .as_ref()
                .and_then(|feedback| feedback.block_reason.clone())
            {
                return Err(SummarizeError::Blocked(reason));
            }
            warn!("generateContent response had no text in either shape");
            return Err(SummarizeError::EmptyResponse);
        };

        if matches!(generated, GeneratedText::Flat(_)) {
            debug!("summary read from flat response shape");
        }
        Summary::from_generated(generated.as_str())
    }
}
