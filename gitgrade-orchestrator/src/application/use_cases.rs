//! Orchestrator use cases

use std::sync::Arc;

use gitgrade_core::domain::{RepoIdentifier, RepositorySourceError};
use gitgrade_core::infrastructure::RepositorySource;
use gitgrade_llm::{AnalysisResult, ReviewRepositoryUseCase};
use tracing::info;

/// Use case for analyzing a repository from a user-supplied URL
///
/// Normalizes the URL, fetches the repository context and hands it to the
/// review use case. Only lookup failures are returned as errors; generation
/// failures are already absorbed into the fallback result.
pub struct AnalyzeRepositoryUseCase {
    repository_source: Arc<dyn RepositorySource>,
    review: Arc<ReviewRepositoryUseCase>,
}

impl AnalyzeRepositoryUseCase {
    pub fn new(
        repository_source: Arc<dyn RepositorySource>,
        review: Arc<ReviewRepositoryUseCase>,
    ) -> Self {
        Self {
            repository_source,
            review,
        }
    }

    pub async fn execute(&self, url: &str) -> Result<AnalysisResult, RepositorySourceError> {
        let repository = RepoIdentifier::parse(url)?;

        let context = self.repository_source.fetch_context(&repository).await?;

        let result = self.review.execute(&context).await;

        info!(
            repository = %repository,
            score = result.score,
            fallback = result.is_fallback(),
            "Repository analysis completed"
        );

        Ok(result)
    }
}
