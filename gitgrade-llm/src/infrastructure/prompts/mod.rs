pub mod templates;

pub use templates::{PromptBuilder, REVIEW_SYSTEM_PROMPT, REVIEW_USER_PROMPT};
