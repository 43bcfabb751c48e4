//! GitGrade Core - Foundation crate for the GitGrade review service
//!
//! # Modules
//!
//! - [`config`] — Strongly-typed configuration with TOML and environment variable support
//! - [`domain`] — Repository identifiers, fetched context and lookup errors
//! - [`infrastructure`] — Repository source trait and the GitHub REST client
//! - [`logging`] — Structured logging with tracing
//!
//! # Configuration
//!
//! ```rust,ignore
//! use gitgrade_core::Config;
//!
//! let config = Config::load()?;
//! ```
//!
//! Environment variables use the `GITGRADE__` prefix with double underscore separators:
//!
//! ```bash
//! GITGRADE__SERVER__PORT=8000
//! GITGRADE__LLM__MODEL=llama-3.3-70b-versatile
//! ```
//!
//! `GROQ_API_KEY` and `GITHUB_TOKEN` are honoured when the corresponding
//! `GITGRADE__` keys are unset.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;

pub use config::Config;
pub use logging::init_tracing;
