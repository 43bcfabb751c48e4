//! Infrastructure Layer - External concerns and implementations
//!
//! This module handles external systems, currently the GitHub REST API.

pub mod repository_source;

pub use repository_source::{GitHubRepositoryClient, RepositorySource};
