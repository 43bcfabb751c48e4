//! OpenAI-compatible provider implementation
//!
//! Works with Groq, OpenAI, and any other chat-completions compatible API.

use async_trait::async_trait;
use gitgrade_core::config::LlmConfig;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

use crate::domain::{
    CompletionRequest, CompletionResponse, LlmError, LlmProvider, ProviderCapabilities,
    ProviderInfo, ResponseFormat, StopReason, Usage,
};

/// OpenAI-compatible provider
///
/// Works with:
/// - Groq (default)
/// - OpenAI API
/// - Local LLMs with OpenAI-compatible APIs (Ollama, vLLM, etc.)
pub struct OpenAIProvider {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
    timeout_seconds: u64,
}

impl OpenAIProvider {
    /// Create a provider from the LLM configuration section
    pub fn new(config: &LlmConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .unwrap_or_else(|e| {
                error!(error = %e, "Failed to build HTTP client with custom timeout, using default client");
                Client::new()
            });

        Self {
            client,
            api_key: config.api_key.clone().filter(|key| !key.is_empty()),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            timeout_seconds: config.timeout_seconds,
        }
    }

    /// Set custom base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Get the chat completions URL
    fn chat_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Convert to OpenAI request format
    fn to_openai_request(&self, request: &CompletionRequest) -> OpenAIRequest {
        let messages = request
            .messages
            .iter()
            .map(|msg| OpenAIMessage {
                role: msg.role.as_str().to_string(),
                content: Some(msg.content.clone()),
            })
            .collect();

        let response_format = match request.response_format {
            ResponseFormat::JsonObject => Some(OpenAIResponseFormat {
                kind: "json_object",
            }),
            ResponseFormat::Text => None,
        };

        OpenAIRequest {
            model: request.model.clone().unwrap_or_else(|| self.model.clone()),
            messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            response_format,
            stream: false,
        }
    }

    /// Convert from OpenAI response format
    fn parse_openai_response(&self, response: OpenAIResponse) -> CompletionResponse {
        let choice = response.choices.into_iter().next();

        let content = choice
            .as_ref()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.clone())
            .unwrap_or_default();

        let stop_reason = choice
            .as_ref()
            .and_then(|c| c.finish_reason.as_deref())
            .map(|r| match r {
                "stop" => StopReason::EndTurn,
                "length" => StopReason::MaxTokens,
                "content_filter" => StopReason::ContentFilter,
                _ => StopReason::Other,
            })
            .unwrap_or(StopReason::Other);

        let usage = response
            .usage
            .map(|u| Usage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            })
            .unwrap_or_default();

        CompletionResponse {
            id: response.id,
            model: response.model,
            content,
            stop_reason,
            usage,
        }
    }

    fn status_error(
        &self,
        status: reqwest::StatusCode,
        retry_after: Option<u64>,
        text: String,
    ) -> LlmError {
        match status.as_u16() {
            429 => match retry_after {
                Some(seconds) => LlmError::rate_limited_with_retry(text, seconds),
                None => LlmError::rate_limited(text),
            },
            401 | 403 => LlmError::auth(text),
            404 => LlmError::ModelNotFound(format!("{}: {}", self.model, text)),
            400 | 413 | 422 => LlmError::InvalidRequest(text),
            code if code >= 500 => LlmError::ServiceUnavailable(text),
            _ => {
                error!(status = %status, "OpenAI-compatible API error: {}", text);
                LlmError::InvalidResponse(format!("API error {}: {}", status, text))
            }
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAIProvider {
    fn info(&self) -> ProviderInfo {
        ProviderInfo {
            id: "openai",
            name: "OpenAI-compatible",
            capabilities: ProviderCapabilities::with_json_mode(),
        }
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| LlmError::Configuration("LLM API key is not configured".to_string()))?;

        let url = self.chat_url();
        let openai_request = self.to_openai_request(&request);

        debug!(
            model = %openai_request.model,
            json_mode = openai_request.response_format.is_some(),
            "Sending request to OpenAI-compatible API"
        );

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&openai_request)
            .send()
            .await
            .map_err(|e| match LlmError::from(e) {
                LlmError::Timeout { .. } => LlmError::timeout(self.timeout_seconds),
                other => other,
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u64>().ok());
            let text = response.text().await.unwrap_or_default();
            return Err(self.status_error(status, retry_after, text));
        }

        let openai_response: OpenAIResponse = response.json().await?;
        Ok(self.parse_openai_response(openai_response))
    }
}

// === OpenAI API Types ===

#[derive(Debug, Serialize)]
struct OpenAIRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<OpenAIResponseFormat>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct OpenAIResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Serialize, Deserialize)]
struct OpenAIMessage {
    role: String,
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    #[serde(default)]
    id: String,
    #[serde(default)]
    model: String,
    choices: Vec<OpenAIChoice>,
    usage: Option<OpenAIUsage>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: Option<OpenAIMessage>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}
