use axum::{
    Json,
    http::{StatusCode, header::ALLOW},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::{api::dtos::ErrorResponse, article::ArticleError, summarizer::SummarizeError};

const GENERIC_ERROR: &str = "Internal Server Error";

/// Every way a summarize request can fail, mapped onto one JSON envelope.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error(transparent)]
    Article(#[from] ArticleError),

    #[error(transparent)]
    Summarize(#[from] SummarizeError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Article(_) | ApiError::Summarize(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut message = self.to_string();
        if message.trim().is_empty() {
            message = GENERIC_ERROR.to_string();
        }

        if status.is_server_error() {
            error!(%status, error = %message, "summarize request failed");
        } else {
            warn!(%status, error = %message, "summarize request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        match self {
            ApiError::MethodNotAllowed => (status, [(ALLOW, "POST")], body).into_response(),
            _ => (status, body).into_response(),
        }
    }
}
