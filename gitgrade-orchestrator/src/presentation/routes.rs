//! Route definitions and server setup

use axum::http::{Method, StatusCode, header};
use axum::{
    Json, Router, middleware,
    routing::{get, post},
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use gitgrade_core::config::ServerConfig;
use gitgrade_llm::AnalysisResult;

use crate::presentation::{
    controllers::{OrchestratorState, analyze, health_check, root},
    middleware::logging_middleware,
    models::*,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::controllers::analyze,
        crate::presentation::controllers::root,
        crate::presentation::controllers::health_check,
    ),
    components(schemas(AnalysisRequest, AnalysisResult, ErrorResponse, RootResponse, HealthResponse)),
    tags(
        (name = "analysis", description = "AI-assisted repository review"),
        (name = "health", description = "Liveness and health endpoints")
    ),
    info(
        title = "GitGrade API",
        description = "Scores a public GitHub repository and returns a summary with a short improvement roadmap.",
        license(
            name = "AGPL-3.0",
            url = "https://www.gnu.org/licenses/agpl-3.0.html"
        )
    )
)]
pub struct ApiDoc;

/// Build the CORS layer from the configured origins
///
/// A lone `*` allows any origin without credentials.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let allow_origin = if server.allowed_origins.iter().any(|origin| origin == "*") {
        AllowOrigin::any()
    } else {
        let origins: Vec<axum::http::HeaderValue> = server
            .allowed_origins
            .iter()
            .filter_map(|origin| {
                axum::http::HeaderValue::from_str(origin)
                    .map_err(|_| {
                        tracing::warn!(origin, "Invalid CORS origin in config; skipping");
                    })
                    .ok()
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN])
        .max_age(Duration::from_secs(3600))
}

/// Create the application router with its middleware stack
pub fn create_router(orchestrator_state: OrchestratorState, server: &ServerConfig) -> Router {
    let mut router = Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/analyze", post(analyze));

    if server.enable_docs {
        router = router.route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        );
    }

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(server))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(server.request_timeout_seconds),
        ))
        // Request id and wall-clock duration per request, inside the timeout
        .layer(middleware::from_fn(logging_middleware));

    router.layer(service_builder).with_state(orchestrator_state)
}
