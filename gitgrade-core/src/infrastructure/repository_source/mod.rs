//! Repository source abstraction and the GitHub implementation

pub mod github_client;

use async_trait::async_trait;

use crate::domain::{RepoContext, RepoIdentifier, RepositorySourceError};

pub use github_client::GitHubRepositoryClient;

/// Remote source of repository context.
///
/// Implementations resolve the repository first and propagate lookup
/// failures. README retrieval failures are never propagated; the returned
/// context carries [`crate::domain::README_NOT_FOUND`] instead.
#[async_trait]
pub trait RepositorySource: Send + Sync {
    async fn fetch_context(
        &self,
        repository: &RepoIdentifier,
    ) -> Result<RepoContext, RepositorySourceError>;
}
