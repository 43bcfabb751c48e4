//! Repository review result and its validation

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::error::LlmError;

/// Summary prefix marking a fallback review.
pub const FALLBACK_SUMMARY_PREFIX: &str = "Demo Mode:";

const FALLBACK_SCORE: u8 = 88;
const FALLBACK_SUMMARY: &str =
    "Demo Mode: AI review unavailable (API limit reached or upstream error).";
const FALLBACK_ROADMAP: [&str; 3] = ["Check API Quota", "Verify Internet", "Restart Server"];

/// Structured review returned to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResult {
    /// Quality score in [0, 100]
    #[schema(example = 85, minimum = 0, maximum = 100)]
    pub score: u8,
    /// Executive summary of the project
    #[schema(example = "Well-structured CLI with thorough documentation.")]
    pub summary: String,
    /// Ordered technical recommendations
    #[schema(example = json!(["Add CI", "Increase test coverage", "Document the public API"]))]
    pub roadmap: Vec<String>,
}

impl AnalysisResult {
    /// Fixed review returned whenever generation fails.
    pub fn fallback() -> Self {
        Self {
            score: FALLBACK_SCORE,
            summary: FALLBACK_SUMMARY.to_string(),
            roadmap: FALLBACK_ROADMAP.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.summary.starts_with(FALLBACK_SUMMARY_PREFIX)
    }
}

/// Review shape as emitted by the model, before validation.
///
/// Field types are strict: a string score or a roadmap containing
/// non-strings fails deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewPayload {
    pub score: serde_json::Number,
    pub summary: String,
    pub roadmap: Vec<String>,
}

impl ReviewPayload {
    /// Validate and normalize into an [`AnalysisResult`].
    ///
    /// Fractional scores are rounded and out-of-range scores clamped to [0, 100].
    pub fn into_result(self) -> Result<AnalysisResult, ReviewError> {
        let raw = self
            .score
            .as_f64()
            .filter(|s| s.is_finite())
            .ok_or_else(|| {
                ReviewError::InvalidShape(format!("score {} is not finite", self.score))
            })?;

        if self.roadmap.is_empty() {
            return Err(ReviewError::InvalidShape("roadmap is empty".to_string()));
        }

        Ok(AnalysisResult {
            score: raw.round().clamp(0.0, 100.0) as u8,
            summary: self.summary,
            roadmap: self.roadmap,
        })
    }
}

/// Why a review could not be produced.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ReviewError {
    /// The completion call itself failed
    #[error("Completion failed: {0}")]
    Generation(LlmError),

    /// The completion text held no parseable review
    #[error("Unparseable completion: {0}")]
    Parse(LlmError),

    /// The review parsed but violated the schema
    #[error("Invalid review shape: {0}")]
    InvalidShape(String),
}
