//! Orchestrator API controllers

use axum::{
    extract::State,
    response::{Json, Response},
};
use chrono::Utc;
use std::sync::Arc;

use gitgrade_llm::AnalysisResult;

use crate::application::use_cases::AnalyzeRepositoryUseCase;
use crate::presentation::middleware::repository_error_to_response;
use crate::presentation::models::{AnalysisRequest, HealthResponse, RootResponse};

/// Application state for orchestrator
#[derive(Clone)]
pub struct OrchestratorState {
    pub analyze_use_case: Arc<AnalyzeRepositoryUseCase>,
}

/// POST /analyze - Review a GitHub repository
#[utoipa::path(
    post,
    path = "/analyze",
    request_body = AnalysisRequest,
    responses(
        (status = 200, description = "Repository reviewed (fallback review on AI failure)", body = AnalysisResult),
        (status = 400, description = "Repository URL could not be resolved", body = crate::presentation::models::ErrorResponse)
    ),
    tag = "analysis"
)]
pub async fn analyze(
    State(state): State<OrchestratorState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResult>, Response> {
    tracing::info!(url = %request.url, "Received analysis request");

    state
        .analyze_use_case
        .execute(&request.url)
        .await
        .map(Json)
        .map_err(repository_error_to_response)
}

/// GET / - Liveness check
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service is up", body = RootResponse)),
    tag = "health"
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "GitGrade is Ready".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /health - Health check
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is healthy", body = HealthResponse)),
    tag = "health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}
