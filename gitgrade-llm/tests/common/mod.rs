// Common test utilities and mock implementations

use async_trait::async_trait;
use gitgrade_core::config::LlmConfig;
use gitgrade_core::domain::RepoContext;
use gitgrade_llm::domain::{
    CompletionRequest, CompletionResponse, LlmError, LlmProvider, ProviderCapabilities,
    ProviderInfo, StopReason, Usage,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Mock LLM provider for testing
pub struct MockLlmProvider {
    /// Response to return from complete()
    pub response: Option<CompletionResponse>,
    /// Error to return (if any)
    pub error: Option<LlmError>,
    /// Whether info() reports JSON mode support
    pub json_mode: bool,
    /// How long complete() stalls before answering
    pub delay: Option<Duration>,
    /// Captured requests for verification
    pub captured_requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockLlmProvider {
    pub fn new() -> Self {
        Self {
            response: None,
            error: None,
            json_mode: true,
            delay: None,
            captured_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_response(mut self, response: CompletionResponse) -> Self {
        self.response = Some(response);
        self
    }

    pub fn with_error(mut self, error: LlmError) -> Self {
        self.error = Some(error);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn without_json_mode(mut self) -> Self {
        self.json_mode = false;
        self
    }

    pub fn with_text_response(content: &str) -> Self {
        Self::new().with_response(create_completion_response(content))
    }
}

#[async_trait]
impl LlmProvider for MockLlmProvider {
    fn info(&self) -> ProviderInfo {
        let capabilities = if self.json_mode {
            ProviderCapabilities::with_json_mode()
        } else {
            ProviderCapabilities::text_only()
        };

        ProviderInfo {
            id: "mock",
            name: "Mock Provider",
            capabilities,
        }
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.captured_requests.lock().await.push(request);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(error) = &self.error {
            return Err(error.clone());
        }

        self.response
            .clone()
            .ok_or_else(|| LlmError::Other("No response configured".to_string()))
    }
}

/// Create a standard LLM response with given content
pub fn create_completion_response(content: &str) -> CompletionResponse {
    CompletionResponse {
        id: "test-response-id".to_string(),
        model: "test-model".to_string(),
        content: content.to_string(),
        stop_reason: StopReason::EndTurn,
        usage: Usage {
            prompt_tokens: 100,
            completion_tokens: 50,
            total_tokens: 150,
        },
    }
}

/// Create default test LlmConfig
pub fn create_test_config() -> LlmConfig {
    LlmConfig {
        api_key: Some("test-api-key".to_string()),
        model: "test-model".to_string(),
        ..LlmConfig::default()
    }
}

/// Repository context with a small tree and README
pub fn sample_context() -> RepoContext {
    RepoContext::new(
        vec!["README.md".to_string(), "src".to_string(), "Cargo.toml".to_string()],
        "# Demo\nA small demo project.",
    )
}
