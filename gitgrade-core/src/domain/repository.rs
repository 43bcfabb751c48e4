//! Repository identifiers and fetched repository context

use serde::{Deserialize, Serialize};

use crate::domain::errors::RepositorySourceError;

/// Host marker stripped from user-supplied repository URLs.
pub const GITHUB_HOST_MARKER: &str = "github.com/";

/// README placeholder used when the README cannot be retrieved.
pub const README_NOT_FOUND: &str = "No README found.";

/// Normalized `owner/name` repository identifier.
///
/// The identifier is kept as the normalized string exactly as it will be sent
/// to the repository source. Extra path segments or a missing owner are not
/// rejected here; they surface as a lookup failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoIdentifier(String);

impl RepoIdentifier {
    /// Normalize raw user input into an identifier.
    pub fn parse(raw: &str) -> Result<Self, RepositorySourceError> {
        let normalized = normalize_repository_url(raw);
        if normalized.is_empty() {
            return Err(RepositorySourceError::InvalidIdentifier {
                input: raw.trim().to_string(),
            });
        }
        Ok(Self(normalized.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Slash-separated path segments, in order. Segment text is not escaped.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }
}

impl std::fmt::Display for RepoIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strip whitespace, everything up to and including the GitHub host marker,
/// and surrounding slashes.
pub fn normalize_repository_url(raw: &str) -> &str {
    let trimmed = raw.trim();
    let remainder = match trimmed.find(GITHUB_HOST_MARKER) {
        Some(idx) => &trimmed[idx + GITHUB_HOST_MARKER.len()..],
        None => trimmed,
    };
    remainder.trim_matches('/')
}

/// Repository context handed to the prompt builder. Built once per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoContext {
    /// Top-level path names in source order
    pub file_tree: Vec<String>,
    /// Decoded README, or [`README_NOT_FOUND`]
    pub readme: String,
}

impl RepoContext {
    pub fn new(file_tree: Vec<String>, readme: impl Into<String>) -> Self {
        Self {
            file_tree,
            readme: readme.into(),
        }
    }
}
