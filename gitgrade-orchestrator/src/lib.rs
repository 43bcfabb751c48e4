//! GitGrade Orchestrator - analysis sequencing and the HTTP API
//!
//! # Architecture
//!
//! ```text
//! gitgrade-orchestrator/
//! ├── presentation/     # HTTP layer
//! │   ├── controllers   # Request handlers
//! │   ├── middleware    # Logging, error mapping
//! │   ├── models        # DTOs with OpenAPI schemas
//! │   └── routes.rs     # Route definitions
//! └── application/      # AnalyzeRepositoryUseCase
//! ```
//!
//! # API Endpoints
//!
//! | Endpoint | Method | Description |
//! |----------|--------|-------------|
//! | `/analyze` | POST | Review a GitHub repository |
//! | `/` | GET | Liveness check |
//! | `/health` | GET | Health check |
//! | `/api-docs/openapi.json` | GET | OpenAPI document (when enabled) |

pub mod application;
pub mod presentation;

pub use application::AnalyzeRepositoryUseCase;
pub use presentation::{ApiDoc, OrchestratorState, create_router};
