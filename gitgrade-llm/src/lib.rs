//! GitGrade LLM - completion provider, prompt construction and review parsing
//!
//! Turns a [`gitgrade_core::domain::RepoContext`] into an [`AnalysisResult`],
//! absorbing every generation failure into the fallback result.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::use_cases::ReviewRepositoryUseCase;
pub use domain::*;
pub use infrastructure::prompts;
pub use infrastructure::providers::OpenAIProvider;
pub use infrastructure::response_parser::ResponseParser;
