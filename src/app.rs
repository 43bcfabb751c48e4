//! Application setup and wiring

use std::sync::Arc;

use axum::Router;
use gitgrade_core::Config;
use gitgrade_core::infrastructure::{GitHubRepositoryClient, RepositorySource};
use gitgrade_llm::{LlmProvider, OpenAIProvider, ReviewRepositoryUseCase};
use gitgrade_orchestrator::{AnalyzeRepositoryUseCase, OrchestratorState, create_router};

/// Build the HTTP router with production collaborators
pub fn create_app(config: &Config) -> Router {
    let repository_source: Arc<dyn RepositorySource> =
        Arc::new(GitHubRepositoryClient::new(&config.github));
    let provider: Arc<dyn LlmProvider> = Arc::new(OpenAIProvider::new(&config.llm));

    create_app_with(config, repository_source, provider)
}

/// Build the HTTP router around the given repository source and LLM provider
pub fn create_app_with(
    config: &Config,
    repository_source: Arc<dyn RepositorySource>,
    provider: Arc<dyn LlmProvider>,
) -> Router {
    if config.llm.api_key.is_none() {
        tracing::warn!("No LLM API key configured; every review will use the fallback result");
    }
    if config.github.token.is_none() {
        tracing::info!("No GitHub token configured; using unauthenticated rate limits");
    }

    let review = Arc::new(ReviewRepositoryUseCase::new(provider, config.llm.clone()));
    let analyze_use_case = Arc::new(AnalyzeRepositoryUseCase::new(repository_source, review));

    let orchestrator_state = OrchestratorState { analyze_use_case };

    tracing::debug!(
        github_base_url = %config.github.base_url,
        llm_base_url = %config.llm.base_url,
        model = %config.llm.model,
        "Application wired"
    );

    create_router(orchestrator_state, &config.server)
}
