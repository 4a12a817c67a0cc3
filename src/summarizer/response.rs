//! Wire types for the Gemini `generateContent` call, and the two response
//! shapes a summary can be read from.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize)]
pub struct RequestContent {
    pub role: &'static str,
    pub parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
pub struct RequestPart {
    pub text: String,
}

impl GenerateContentRequest {
    pub fn user_prompt(prompt: String) -> Self {
        Self {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
    /// Convenience field some SDKs and proxies flatten the output into.
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

/// Error envelope returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub message: String,
}

/// Generated text, tagged with the response shape it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedText {
    /// `candidates[0].content.parts[*].text`
    Structured(String),
    /// top-level `text`
    Flat(String),
}

impl GeneratedText {
    /// Reads the structured shape first and falls back to the flat one.
    /// Whitespace-only text counts as absent.
    pub fn from_response(response: &GenerateContentResponse) -> Option<Self> {
        from_candidates(response)
            .map(Self::Structured)
            .or_else(|| from_flat(response).map(Self::Flat))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Structured(text) | Self::Flat(text) => text,
        }
    }
}

/// Joined text parts of the first candidate.
pub fn from_candidates(response: &GenerateContentResponse) -> Option<String> {
    let content = response.candidates.as_ref()?.first()?.content.as_ref()?;
    let text: String = content
        .parts
        .iter()
        .filter_map(|part| part.text.as_deref())
        .collect();
    non_blank(text)
}

pub fn from_flat(response: &GenerateContentResponse) -> Option<String> {
    non_blank(response.text.clone()?)
}

fn non_blank(text: String) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_structured_shape() {
        let response = parse(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "  A short summary.\n" }] },
                "finishReason": "STOP"
            }],
            "usageMetadata": { "totalTokenCount": 42 }
        }));

        assert_eq!(
            GeneratedText::from_response(&response),
            Some(GeneratedText::Structured("A short summary.".to_string()))
        );
    }

    #[test]
    fn test_structured_parts_are_joined() {
        let response = parse(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "First half, " }, { "text": "second half." }] }
            }]
        }));

        assert_eq!(
            from_candidates(&response).as_deref(),
            Some("First half, second half.")
        );
    }

    #[test]
    fn test_flat_shape() {
        let response = parse(json!({ "text": "Flat summary" }));

        assert_eq!(
            GeneratedText::from_response(&response),
            Some(GeneratedText::Flat("Flat summary".to_string()))
        );
    }

    #[test]
    fn test_structured_preferred_over_flat() {
        let response = parse(json!({
            "candidates": [{ "content": { "parts": [{ "text": "structured" }] } }],
            "text": "flat"
        }));

        assert_eq!(
            GeneratedText::from_response(&response).unwrap().as_str(),
            "structured"
        );
    }

    #[test]
    fn test_empty_candidates_fall_back_to_flat() {
        let response = parse(json!({
            "candidates": [{ "content": { "parts": [{ "text": "   " }] } }],
            "text": "flat"
        }));

        assert_eq!(
            GeneratedText::from_response(&response),
            Some(GeneratedText::Flat("flat".to_string()))
        );
    }

    #[test]
    fn test_no_text_anywhere() {
        let response = parse(json!({ "candidates": [{ "finishReason": "SAFETY" }] }));
        assert_eq!(GeneratedText::from_response(&response), None);

        let response = parse(json!({}));
        assert_eq!(GeneratedText::from_response(&response), None);
    }

    #[test]
    fn test_request_serialization() {
        let request = GenerateContentRequest::user_prompt("hello".to_string());
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "contents": [{ "role": "user", "parts": [{ "text": "hello" }] }] })
        );
    }
}
