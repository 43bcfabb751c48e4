//! HTTP middleware for the web server

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use std::time::Instant;
use uuid::Uuid;

use gitgrade_core::domain::RepositorySourceError;

use crate::presentation::models::ErrorResponse;

/// Convert a repository lookup error to an HTTP response
///
/// Every lookup failure is a client-visible `400` carrying the error text.
pub fn repository_error_to_response(error: RepositorySourceError) -> Response {
    let status = StatusCode::BAD_REQUEST;

    tracing::error!(
        error = %error,
        http_status = %status,
        error_code = error.code(),
        "Repository lookup failed"
    );

    let body = ErrorResponse::new(format!("Error: {}", error));
    (status, Json(body)).into_response()
}

/// Request/response logging middleware
pub async fn logging_middleware(request: Request<axum::body::Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let request_id = Uuid::new_v4();
    let start_time = Instant::now();

    tracing::info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        "Processing request"
    );

    let response = next.run(request).await;
    let duration = start_time.elapsed();

    tracing::info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        status = %response.status(),
        duration_ms = duration.as_millis(),
        "Request completed"
    );

    response
}
