//! GitGrade - AI-assisted GitHub repository review service
//!
//! This is the main binary crate that wires together all modules

mod app;

pub use app::{create_app, create_app_with};
pub use gitgrade_core::{Config, init_tracing};
pub use gitgrade_orchestrator::OrchestratorState;

// Re-export for convenience
pub use gitgrade_core;
pub use gitgrade_llm;
pub use gitgrade_orchestrator;
