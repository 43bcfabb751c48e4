use gitgrade_core::config::LlmConfig;
use gitgrade_core::domain::RepoContext;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::domain::{
    AnalysisResult, CompletionRequest, LlmError, LlmProvider, ReviewError, ReviewPayload,
};
use crate::infrastructure::prompts::{PromptBuilder, REVIEW_SYSTEM_PROMPT};
use crate::infrastructure::response_parser::ResponseParser;

/// Generates a structured review for a fetched repository context.
pub struct ReviewRepositoryUseCase {
    provider: Arc<dyn LlmProvider>,
    config: LlmConfig,
}

impl ReviewRepositoryUseCase {
    pub fn new(provider: Arc<dyn LlmProvider>, config: LlmConfig) -> Self {
        Self { provider, config }
    }

    /// Review the repository, substituting the fallback result on any failure.
    pub async fn execute(&self, context: &RepoContext) -> AnalysisResult {
        match self.try_execute(context).await {
            Ok(result) => result,
            Err(e) => {
                let retry_after_secs = match &e {
                    ReviewError::Generation(cause) => cause.retry_after().map(|d| d.as_secs()),
                    _ => None,
                };
                warn!(
                    error = %e,
                    retry_after_secs,
                    "AI review failed, returning fallback result"
                );
                AnalysisResult::fallback()
            }
        }
    }

    /// Review the repository, reporting why no result could be produced.
    ///
    /// The completion call is bounded by `llm.timeout_seconds` whatever the
    /// provider's own client does.
    pub async fn try_execute(&self, context: &RepoContext) -> Result<AnalysisResult, ReviewError> {
        let request = self.build_request(context);
        let budget = Duration::from_secs(self.config.timeout_seconds);

        let response = tokio::time::timeout(budget, self.provider.complete(request))
            .await
            .map_err(|_| ReviewError::Generation(LlmError::timeout(self.config.timeout_seconds)))?
            .map_err(ReviewError::Generation)?;

        if response.is_truncated() {
            debug!(model = %response.model, "Completion stopped at the token limit");
        }

        let payload: ReviewPayload =
            ResponseParser::parse_json(response.text()).map_err(ReviewError::Parse)?;

        payload.into_result()
    }

    fn build_request(&self, context: &RepoContext) -> CompletionRequest {
        let user_prompt =
            PromptBuilder::build_review_prompt(context, self.config.readme_char_limit);

        let request = CompletionRequest::new()
            .with_system(REVIEW_SYSTEM_PROMPT)
            .with_user(user_prompt)
            .with_model(self.config.model.clone())
            .with_max_tokens(self.config.max_tokens)
            .with_temperature(self.config.temperature);

        if self.config.json_mode && self.provider.info().capabilities.json_mode {
            request.with_json_mode()
        } else {
            request
        }
    }
}
