//! API request and response models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to analyze a GitHub repository
#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalysisRequest {
    /// Repository URL or `owner/name` identifier
    #[schema(example = "https://github.com/octocat/Hello-World")]
    pub url: String,
}

/// Error response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable failure description
    #[schema(example = "Error: Repository not found: octocat/missing")]
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Root liveness response
#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    #[schema(example = "GitGrade is Ready")]
    pub message: String,

    /// Current service version
    #[schema(example = "0.1.0")]
    pub version: String,
}

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Overall service health status
    #[schema(example = "healthy")]
    pub status: String,

    /// Current service version
    #[schema(example = "0.1.0")]
    pub version: String,

    /// Health check timestamp
    #[schema(example = "2024-01-15T10:30:00Z")]
    pub timestamp: DateTime<Utc>,
}
