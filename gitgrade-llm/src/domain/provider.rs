//! LLM Provider trait and related types

use async_trait::async_trait;

use crate::domain::error::LlmError;
use crate::domain::messages::{CompletionRequest, CompletionResponse};

/// Provider capability flags
#[derive(Debug, Clone, Default)]
pub struct ProviderCapabilities {
    /// Supports JSON mode output
    pub json_mode: bool,
}

impl ProviderCapabilities {
    /// Capabilities for a plain text model
    pub fn text_only() -> Self {
        Self { json_mode: false }
    }

    /// Capabilities for a model that honours `response_format: json_object`
    pub fn with_json_mode() -> Self {
        Self { json_mode: true }
    }
}

/// Metadata about a provider
#[derive(Debug, Clone)]
pub struct ProviderInfo {
    /// Provider identifier (e.g., "openai")
    pub id: &'static str,
    /// Human-readable name
    pub name: &'static str,
    /// Provider capabilities
    pub capabilities: ProviderCapabilities,
}

/// Core trait for completion services
///
/// Object-safe, used as `Arc<dyn LlmProvider>` so tests can inject stubs.
///
/// ```rust,ignore
/// use gitgrade_llm::{CompletionRequest, LlmError, LlmProvider};
///
/// async fn ask(provider: &dyn LlmProvider) -> Result<String, LlmError> {
///     let request = CompletionRequest::new().with_user("Rate this repository");
///     Ok(provider.complete(request).await?.content)
/// }
/// ```
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get provider metadata
    fn info(&self) -> ProviderInfo;

    /// Generate a completion. A single attempt; no retries.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;
}
