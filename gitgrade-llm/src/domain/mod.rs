pub mod error;
pub mod messages;
pub mod provider;
pub mod review;

pub use error::LlmError;
pub use messages::{
    CompletionRequest, CompletionResponse, Message, ResponseFormat, Role, StopReason, Usage,
};
pub use provider::{LlmProvider, ProviderCapabilities, ProviderInfo};
pub use review::{AnalysisResult, FALLBACK_SUMMARY_PREFIX, ReviewError, ReviewPayload};
