use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const URL_REQUIRED: &str = "url is required";

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SummarizeRequest {
    /// Page to summarize. Kept untyped so a wrong type is a validation
    /// error rather than a deserialization failure.
    #[serde(default)]
    #[schema(value_type = String, example = "https://example.com/article")]
    pub url: Option<serde_json::Value>,
}

impl SummarizeRequest {
    /// Lenient parse: anything that is not a JSON object yields an empty
    /// request, which then fails validation.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<&str, String> {
        match &self.url {
            Some(serde_json::Value::String(url)) if !url.is_empty() => Ok(url),
            _ => Err(URL_REQUIRED.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SummarizeResponse {
    /// At most 120 characters.
    pub summary: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
