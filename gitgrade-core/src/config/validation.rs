//! Configuration validation module

use crate::config::{GitHubConfig, LlmConfig, LoggingConfig, ServerConfig};

/// Trait for validating configuration sections
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Server configuration error: {message}")]
    Server { message: String },

    #[error("Logging configuration error: {message}")]
    Logging { message: String },

    #[error("GitHub configuration error: {message}")]
    GitHub { message: String },

    #[error("LLM configuration error: {message}")]
    Llm { message: String },
}

impl ValidationError {
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server {
            message: message.into(),
        }
    }

    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }

    pub fn github(message: impl Into<String>) -> Self {
        Self::GitHub {
            message: message.into(),
        }
    }

    pub fn llm(message: impl Into<String>) -> Self {
        Self::Llm {
            message: message.into(),
        }
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        // u16 cannot exceed 65535, so only 0 needs rejecting
        if self.port == 0 {
            return Err(ValidationError::server(format!(
                "Port must be in range 1-65535, got {}",
                self.port
            )));
        }

        if self.host.is_empty() {
            return Err(ValidationError::server("Host cannot be empty"));
        }

        if self.request_timeout_seconds == 0 {
            return Err(ValidationError::server(
                "Request timeout must be greater than 0",
            ));
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        match self.format.as_str() {
            "json" | "pretty" => Ok(()),
            other => Err(ValidationError::logging(format!(
                "Unsupported log format '{}', expected 'json' or 'pretty'",
                other
            ))),
        }
    }
}

impl Validate for GitHubConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.base_url.is_empty() {
            return Err(ValidationError::github("Base URL cannot be empty"));
        }

        if self.timeout_seconds == 0 {
            return Err(ValidationError::github("Timeout must be greater than 0"));
        }

        Ok(())
    }
}

impl Validate for LlmConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        // API key is not checked; a missing key surfaces on the first completion call.
        if self.base_url.is_empty() {
            return Err(ValidationError::llm("Base URL cannot be empty"));
        }

        if self.model.trim().is_empty() {
            return Err(ValidationError::llm("Model cannot be empty"));
        }

        if self.timeout_seconds == 0 {
            return Err(ValidationError::llm("Timeout must be greater than 0"));
        }

        if self.readme_char_limit == 0 {
            return Err(ValidationError::llm(
                "README character limit must be greater than 0",
            ));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ValidationError::llm(format!(
                "Temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            )));
        }

        Ok(())
    }
}
