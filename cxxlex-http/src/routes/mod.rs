use std::path::Path;

use crate::handlers;
use crate::models::{AnalyzeJsonResponse, AnalyzeRequest, AnalyzeResponse, TokenItem};
use crate::server::AppState;
use crate::services::Method;
use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, get_service, post},
};
use tower_http::services::{ServeDir, ServeFile};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::analyze::analyze, handlers::analyze::analyze_json),
    components(schemas(
        AnalyzeRequest,
        AnalyzeResponse,
        AnalyzeJsonResponse,
        TokenItem,
        Method
    )),
    tags(
        (name = "lexer", description = "C++ lexical analysis")
    )
)]
pub struct ApiDoc;

/// Create the router. Unmatched GET requests are served from `static_dir`.
pub fn create_router(static_dir: &Path) -> Router<AppState> {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get_service(ServeFile::new(static_dir.join("index.html"))))
        .route("/health", get(health_check))
        .route("/analyze", post(handlers::analyze::analyze))
        .route("/analyze_json", post(handlers::analyze::analyze_json))
        .fallback_service(ServeDir::new(static_dir))
}

/// Health check endpoint for container health monitoring
async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}
