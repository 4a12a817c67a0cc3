use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use serde_json::json;
use std::sync::Arc;
use wiremock::MockServer;

use summary::{
    api,
    app_state::AppState,
    article::WebArticleSource,
    config::Config,
    fetcher::Fetcher,
    summarizer::GeminiClient,
};

pub const GENERATE_PATH: &str = "/v1beta/models/gemini-1.5-pro-latest:generateContent";

/// Router wired to live components, with the generative API at `gemini`.
pub fn test_app(gemini: &MockServer) -> Router {
    let config = Config::new("test-key").with_gemini_base_url(format!("{}/v1beta", gemini.uri()));
    let state = AppState::new(
        Arc::new(WebArticleSource::new(Fetcher::new().unwrap())),
        Arc::new(GeminiClient::new(&config).unwrap()),
    );
    api::router(state)
}

pub fn summarize_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/summarize")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn gemini_reply(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }]
    })
}

pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
