//! Domain Layer - repository identifiers, fetched context and lookup errors

pub mod errors;
pub mod repository;

pub use errors::RepositorySourceError;
pub use repository::{
    GITHUB_HOST_MARKER, README_NOT_FOUND, RepoContext, RepoIdentifier, normalize_repository_url,
};
