//! Repository lookup errors

use thiserror::Error;

/// Failure while resolving a repository identifier or fetching its context.
///
/// Every variant carries the identifier so the message returned to the
/// client names the repository that failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositorySourceError {
    #[error("Invalid repository identifier: '{input}'")]
    InvalidIdentifier { input: String },

    #[error("Repository not found: {repository}")]
    NotFound { repository: String },

    #[error("Access denied to repository {repository}: {message}")]
    AccessDenied { repository: String, message: String },

    #[error("Rate limited while fetching {repository}: {message}")]
    RateLimited { repository: String, message: String },

    #[error("Repository source unreachable for {repository}: {message}")]
    Unreachable { repository: String, message: String },

    #[error("Unexpected response for {repository}: {message}")]
    InvalidResponse { repository: String, message: String },
}

impl RepositorySourceError {
    pub fn not_found(repository: impl Into<String>) -> Self {
        Self::NotFound {
            repository: repository.into(),
        }
    }

    pub fn access_denied(repository: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AccessDenied {
            repository: repository.into(),
            message: message.into(),
        }
    }

    pub fn rate_limited(repository: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RateLimited {
            repository: repository.into(),
            message: message.into(),
        }
    }

    pub fn unreachable(repository: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Unreachable {
            repository: repository.into(),
            message: message.into(),
        }
    }

    pub fn invalid_response(repository: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            repository: repository.into(),
            message: message.into(),
        }
    }

    /// Short machine-readable code for logging
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidIdentifier { .. } => "INVALID_IDENTIFIER",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::AccessDenied { .. } => "ACCESS_DENIED",
            Self::RateLimited { .. } => "RATE_LIMITED",
            Self::Unreachable { .. } => "UNREACHABLE",
            Self::InvalidResponse { .. } => "INVALID_RESPONSE",
        }
    }
}
