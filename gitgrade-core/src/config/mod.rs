//! Configuration management

pub mod validation;

pub use validation::{Validate, ValidationError};

use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub github: GitHubConfig,
    pub llm: LlmConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Global request timeout in seconds applied at the HTTP layer.
    pub request_timeout_seconds: u64,
    /// Allowed CORS origins. Use ["*"] to allow any origin (credentials disabled).
    pub allowed_origins: Vec<String>,
    /// Whether to serve the OpenAPI document at /api-docs/openapi.json
    pub enable_docs: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            request_timeout_seconds: 180,
            allowed_origins: vec!["*".to_string()],
            enable_docs: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when RUST_LOG is not set
    pub level: String,
    /// Output format: "json" or "pretty"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "json".to_string(),
        }
    }
}

/// GitHub repository source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    pub base_url: String,
    /// Access token (falls back to the GITHUB_TOKEN env var)
    pub token: Option<String>,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.github.com".to_string(),
            token: None,
            timeout_seconds: 30,
            user_agent: concat!("gitgrade/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Completion service configuration (any OpenAI-compatible endpoint)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub base_url: String,
    /// API key (falls back to the GROQ_API_KEY env var)
    pub api_key: Option<String>,
    pub model: String,
    /// Temperature for generation (0.0 to 2.0)
    pub temperature: f64,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// Request `response_format: json_object` when the provider supports it
    pub json_mode: bool,
    /// README characters embedded in the prompt
    pub readme_char_limit: usize,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.groq.com/openai/v1".to_string(),
            api_key: None,
            model: "llama-3.3-70b-versatile".to_string(),
            temperature: 0.3,
            max_tokens: 1024,
            timeout_seconds: 60,
            json_mode: true,
            readme_char_limit: 4000,
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.logging.validate()?;
        self.github.validate()?;
        self.llm.validate()?;

        // The HTTP deadline must outlast the review so AI failures still answer 200
        let upstream_budget = self.upstream_budget_seconds();
        if self.server.request_timeout_seconds <= upstream_budget {
            return Err(ValidationError::server(format!(
                "Request timeout ({}s) must exceed the upstream budget of {}s \
                 (3 x github.timeout_seconds + llm.timeout_seconds)",
                self.server.request_timeout_seconds, upstream_budget
            )));
        }

        Ok(())
    }
}

impl Config {
    /// Worst-case seconds spent upstream by one analysis: three GitHub calls
    /// and one completion.
    pub fn upstream_budget_seconds(&self) -> u64 {
        self.github
            .timeout_seconds
            .saturating_mul(3)
            .saturating_add(self.llm.timeout_seconds)
    }

    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigLoadError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false));

        // Add environment-specific config if ENV is set
        if let Ok(env) = std::env::var("ENV") {
            builder = builder
                .add_source(config::File::with_name(&format!("config/{}", env)).required(false));
        }

        // Add local config and environment variables last (highest priority)
        builder = builder
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("GITGRADE").separator("__"));

        let mut config: Config = builder.build()?.try_deserialize()?;
        config.apply_legacy_env(|key| std::env::var(key).ok());

        config.validate()?;

        Ok(config)
    }

    /// Fill unset credentials from the plain env var names used by earlier deployments.
    pub fn apply_legacy_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if self.llm.api_key.is_none() {
            self.llm.api_key = lookup("GROQ_API_KEY").filter(|v| !v.is_empty());
        }
        if self.github.token.is_none() {
            self.github.token = lookup("GITHUB_TOKEN").filter(|v| !v.is_empty());
        }
    }
}

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("Configuration file error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Configuration validation error: {0}")]
    Validation(#[from] ValidationError),
}
