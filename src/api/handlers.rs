use axum::{Json, body::Bytes, extract::State, http::Method};
use tracing::{info, instrument};

use crate::{
    api::{
        dtos::{ErrorResponse, SummarizeRequest, SummarizeResponse},
        errors::ApiError,
    },
    app_state::AppState,
};

#[utoipa::path(
    post,
    path = "/summarize",
    tag = "summary",
    request_body = SummarizeRequest,
    responses(
        (status = 200, description = "One-line summary of the page", body = SummarizeResponse),
        (status = 400, description = "Missing, empty or non-string url", body = ErrorResponse),
        (status = 405, description = "Any verb other than POST", body = ErrorResponse),
        (status = 500, description = "Fetch, extraction or summarizing failed", body = ErrorResponse)
    )
)]
pub async fn summarize(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SummarizeResponse>, ApiError> {
    let request = SummarizeRequest::from_body(&body);
    let url = request.validate().map_err(ApiError::InvalidInput)?;

    run_pipeline(&state, url).await.map(Json)
}

/// Fallback for non-POST verbs on `/summarize`.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Single entry point for the platform-function deployment, where routing
/// is done by the platform and every verb reaches this handler.
pub async fn function_entry(
    method: Method,
    state: State<AppState>,
    body: Bytes,
) -> Result<Json<SummarizeResponse>, ApiError> {
    if method != Method::POST {
        return Err(ApiError::MethodNotAllowed);
    }
    summarize(state, body).await
}

#[instrument(skip_all, fields(url = %url))]
async fn run_pipeline(state: &AppState, url: &str) -> Result<SummarizeResponse, ApiError> {
    let article = state.articles.main_text(url).await?;
    let summary = state.summarizer.summarize(&article.text).await?;

    info!(chars = summary.as_str().chars().count(), "summary generated");
    Ok(SummarizeResponse {
        summary: summary.into_inner(),
    })
}
