//! GitHub REST API repository source

use std::time::Duration;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url, header};
use serde::Deserialize;
use tracing::{debug, error, info};

use super::RepositorySource;
use crate::config::GitHubConfig;
use crate::domain::{README_NOT_FOUND, RepoContext, RepoIdentifier, RepositorySourceError};

const GITHUB_API_VERSION: &str = "2022-11-28";

/// Repository source backed by the GitHub REST API v3.
pub struct GitHubRepositoryClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl GitHubRepositoryClient {
    pub fn new(config: &GitHubConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()
            .unwrap_or_else(|e| {
                error!(error = %e, "Failed to build GitHub HTTP client with custom settings, using default client");
                Client::new()
            });

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone().filter(|t| !t.is_empty()),
        }
    }

    /// `{base}/repos/{identifier}/{suffix}` with every identifier segment
    /// percent-encoded, so `?` or `#` in user input stay part of the path.
    fn repo_url(
        &self,
        repository: &RepoIdentifier,
        suffix: Option<&str>,
    ) -> Result<Url, RepositorySourceError> {
        let invalid_base = |reason: String| {
            RepositorySourceError::unreachable(
                repository.as_str(),
                format!("Invalid GitHub base URL '{}': {}", self.base_url, reason),
            )
        };

        let mut url = Url::parse(&self.base_url).map_err(|e| invalid_base(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid_base("cannot be a base".to_string()))?
            .pop_if_empty()
            .push("repos")
            .extend(repository.segments())
            .extend(suffix);

        Ok(url)
    }

    fn get(&self, url: Url) -> RequestBuilder {
        let mut req = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION);

        if let Some(ref token) = self.token {
            req = req.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        req
    }

    async fn send(
        &self,
        repository: &RepoIdentifier,
        suffix: Option<&str>,
    ) -> Result<Response, RepositorySourceError> {
        let url = self.repo_url(repository, suffix)?;
        let response = self
            .get(url)
            .send()
            .await
            .map_err(|e| RepositorySourceError::unreachable(repository.as_str(), e.to_string()))?;

        if response.status().is_success() {
            return Ok(response);
        }

        Err(Self::status_error(repository, response).await)
    }

    async fn status_error(
        repository: &RepoIdentifier,
        response: Response,
    ) -> RepositorySourceError {
        let status = response.status();
        let rate_limit_exhausted = response
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.trim() == "0");
        let body = response.text().await.unwrap_or_default();
        let message = github_error_message(&body).unwrap_or_else(|| status.to_string());

        match status {
            StatusCode::NOT_FOUND => RepositorySourceError::not_found(repository.as_str()),
            StatusCode::TOO_MANY_REQUESTS => {
                RepositorySourceError::rate_limited(repository.as_str(), message)
            }
            StatusCode::FORBIDDEN if rate_limit_exhausted => {
                RepositorySourceError::rate_limited(repository.as_str(), message)
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                RepositorySourceError::access_denied(repository.as_str(), message)
            }
            _ => RepositorySourceError::invalid_response(
                repository.as_str(),
                format!("GitHub API returned {}: {}", status, message),
            ),
        }
    }

    /// Resolve the repository itself. This is the lookup whose failure is terminal.
    async fn lookup(
        &self,
        repository: &RepoIdentifier,
    ) -> Result<RepositoryInfo, RepositorySourceError> {
        let response = self.send(repository, None).await?;
        response.json::<RepositoryInfo>().await.map_err(|e| {
            RepositorySourceError::invalid_response(repository.as_str(), e.to_string())
        })
    }

    async fn fetch_readme(
        &self,
        repository: &RepoIdentifier,
    ) -> Result<String, RepositorySourceError> {
        let response = self.send(repository, Some("readme")).await?;
        let readme = response.json::<ContentFile>().await.map_err(|e| {
            RepositorySourceError::invalid_response(repository.as_str(), e.to_string())
        })?;

        readme.decode().map_err(|message| {
            RepositorySourceError::invalid_response(repository.as_str(), message)
        })
    }

    async fn list_top_level(
        &self,
        repository: &RepoIdentifier,
    ) -> Result<Vec<String>, RepositorySourceError> {
        let response = self.send(repository, Some("contents")).await?;
        let entries = response.json::<Vec<ContentEntry>>().await.map_err(|e| {
            RepositorySourceError::invalid_response(
                repository.as_str(),
                format!("Expected a directory listing: {}", e),
            )
        })?;

        Ok(entries.into_iter().map(|entry| entry.path).collect())
    }
}

#[async_trait]
impl RepositorySource for GitHubRepositoryClient {
    async fn fetch_context(
        &self,
        repository: &RepoIdentifier,
    ) -> Result<RepoContext, RepositorySourceError> {
        let info = self.lookup(repository).await?;
        debug!(
            repository = %repository,
            full_name = info.full_name.as_deref().unwrap_or_default(),
            default_branch = info.default_branch.as_deref().unwrap_or_default(),
            "Repository resolved"
        );

        let readme = match self.fetch_readme(repository).await {
            Ok(readme) => readme,
            Err(e) => {
                debug!(
                    repository = %repository,
                    error = %e,
                    "README unavailable, using placeholder"
                );
                README_NOT_FOUND.to_string()
            }
        };

        let file_tree = self.list_top_level(repository).await?;

        info!(
            repository = %repository,
            entries = file_tree.len(),
            readme_chars = readme.chars().count(),
            "Fetched repository context"
        );

        Ok(RepoContext::new(file_tree, readme))
    }
}

/// Pull the `message` field out of a GitHub error body.
fn github_error_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct GitHubErrorBody {
        message: String,
    }

    serde_json::from_str::<GitHubErrorBody>(body)
        .ok()
        .map(|b| b.message)
        .filter(|m| !m.is_empty())
}

// === GitHub API Types ===

#[derive(Debug, Deserialize)]
struct RepositoryInfo {
    full_name: Option<String>,
    default_branch: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContentFile {
    content: String,
    #[serde(default)]
    encoding: String,
}

impl ContentFile {
    fn decode(self) -> Result<String, String> {
        let bytes = match self.encoding.as_str() {
            "base64" => {
                // GitHub wraps base64 payloads at 60 columns
                let compact: String = self
                    .content
                    .chars()
                    .filter(|c| !c.is_ascii_whitespace())
                    .collect();
                STANDARD
                    .decode(compact)
                    .map_err(|e| format!("Invalid base64 README: {}", e))?
            }
            "" | "utf-8" => self.content.into_bytes(),
            other => return Err(format!("Unsupported README encoding: {}", other)),
        };

        String::from_utf8(bytes).map_err(|e| format!("README is not valid UTF-8: {}", e))
    }
}

#[derive(Debug, Deserialize)]
struct ContentEntry {
    path: String,
}
