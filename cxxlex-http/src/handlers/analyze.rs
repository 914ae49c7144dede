use axum::{
    extract::{Form, State, rejection::FormRejection},
    response::Json,
};

use crate::{
    error::AppError,
    models::{AnalyzeJsonResponse, AnalyzeRequest, AnalyzeResponse},
    server::AppState,
};

/// Analyze C++ code and return the text report
#[utoipa::path(
    post,
    path = "/analyze",
    request_body(content = AnalyzeRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Code analyzed", body = AnalyzeResponse),
        (status = 400, description = "Missing or malformed form data"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn analyze(
    State(state): State<AppState>,
    form: Result<Form<AnalyzeRequest>, FormRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let Form(request) = form?;
    let output = state.service.analyze(&request.code).await?;
    Ok(Json(output.into()))
}

/// Analyze C++ code and return tokens and summary
#[utoipa::path(
    post,
    path = "/analyze_json",
    request_body(content = AnalyzeRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Code analyzed", body = AnalyzeJsonResponse),
        (status = 400, description = "Missing or malformed form data"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn analyze_json(
    State(state): State<AppState>,
    form: Result<Form<AnalyzeRequest>, FormRejection>,
) -> Result<Json<AnalyzeJsonResponse>, AppError> {
    let Form(request) = form?;
    let output = state.service.analyze(&request.code).await?;
    Ok(Json(output.into()))
}
