use axum::{
    Json, Router,
    extract::Request,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    api::{
        dtos::{ErrorResponse, SummarizeRequest, SummarizeResponse},
        handlers,
    },
    app_state::AppState,
    health::{self, HealthResponse},
};

#[derive(OpenApi)]
#[openapi(
    paths(handlers::summarize, health::health_check),
    components(schemas(SummarizeRequest, SummarizeResponse, ErrorResponse, HealthResponse)),
    tags(
        (name = "summary", description = "One-line web page summaries"),
        (name = "health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Routes for the standalone server.
pub fn router(state: AppState) -> Router {
    let router = Router::new()
        .route(
            "/summarize",
            post(handlers::summarize).fallback(handlers::method_not_allowed),
        )
        .route("/healthz", get(health::health_check))
        .route("/api-docs/openapi.json", get(openapi_json))
        .with_state(state);
    with_http_layers(router)
}

/// Every path and verb goes to one entry point; the hosting platform owns
/// routing.
pub fn function_router(state: AppState) -> Router {
    let router = Router::new()
        .fallback(handlers::function_entry)
        .with_state(state);
    with_http_layers(router)
}

fn with_http_layers(router: Router) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http().make_span_with(request_span))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(CorsLayer::permissive()),
    )
}

fn request_span(request: &Request) -> tracing::Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}
