//! Provider-agnostic message types
//!
//! Translated by each provider into its wire format.

use serde::{Deserialize, Serialize};

/// Role in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System prompt that sets the behavior
    System,
    /// User message (the human)
    User,
}

impl Role {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A message in the conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message author
    pub role: Role,
    /// Text content
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }
}

/// Requested shape of the completion output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    /// Free-form text
    #[default]
    Text,
    /// Provider-enforced JSON object output
    JsonObject,
}

/// Completion request to send to an LLM provider
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CompletionRequest {
    /// The conversation messages
    pub messages: Vec<Message>,

    /// Model to use (provider-specific); the provider default applies when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Temperature (0.0 to 2.0, lower = more deterministic)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    /// Output format hint
    #[serde(default)]
    pub response_format: ResponseFormat,
}

impl CompletionRequest {
    /// Create a new completion request
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a message
    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    /// Add a system message
    pub fn with_system(self, text: impl Into<String>) -> Self {
        self.with_message(Message::system(text))
    }

    /// Add a user message
    pub fn with_user(self, text: impl Into<String>) -> Self {
        self.with_message(Message::user(text))
    }

    /// Set the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set max tokens
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set temperature
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Request JSON object output
    pub fn with_json_mode(mut self) -> Self {
        self.response_format = ResponseFormat::JsonObject;
        self
    }
}

/// Reason why generation stopped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Natural end of response
    EndTurn,
    /// Hit max tokens limit
    MaxTokens,
    /// Content was filtered
    ContentFilter,
    /// Unknown/other reason
    Other,
}

/// Token usage statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Completion response from an LLM provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Unique response ID
    pub id: String,

    /// Model that generated the response
    pub model: String,

    /// Generated text
    pub content: String,

    /// Why generation stopped
    pub stop_reason: StopReason,

    /// Token usage statistics
    #[serde(default)]
    pub usage: Usage,
}

impl CompletionResponse {
    /// Get the text content of the response
    pub fn text(&self) -> &str {
        &self.content
    }

    /// Check if the response was truncated due to max tokens
    pub fn is_truncated(&self) -> bool {
        self.stop_reason == StopReason::MaxTokens
    }
}
