//! Shared response parsing utilities for LLM outputs
//!
//! Extracts JSON from model responses that may include markdown code fences
//! or surrounding narrative text.

use serde::de::DeserializeOwned;

use crate::domain::LlmError;

const FENCE: &str = "```";

/// Utilities for extracting and parsing JSON from LLM responses.
pub struct ResponseParser;

impl ResponseParser {
    /// Parse a JSON value from an LLM response.
    ///
    /// Strategy order:
    /// 1) Try the full trimmed content as JSON.
    /// 2) Extract a fenced JSON code block (```json ... ```).
    /// 3) Extract any fenced code block (``` ... ```).
    /// 4) Remove every fence marker and retry (handles unterminated fences).
    /// 5) Try each top-level balanced `{...}` span in order.
    pub fn parse_json<T: DeserializeOwned>(content: &str) -> Result<T, LlmError> {
        let trimmed = content.trim();
        if let Ok(parsed) = serde_json::from_str::<T>(trimmed) {
            return Ok(parsed);
        }

        if let Some(json) = Self::extract_fenced_json(trimmed)
            && let Ok(parsed) = serde_json::from_str::<T>(&json)
        {
            return Ok(parsed);
        }

        if let Some(json) = Self::extract_any_fenced_code(trimmed)
            && let Ok(parsed) = serde_json::from_str::<T>(&json)
        {
            return Ok(parsed);
        }

        let unfenced = Self::strip_code_fences(trimmed);
        if unfenced != trimmed
            && let Ok(parsed) = serde_json::from_str::<T>(&unfenced)
        {
            return Ok(parsed);
        }

        for span in Self::balanced_objects(&unfenced) {
            if let Ok(parsed) = serde_json::from_str::<T>(span) {
                return Ok(parsed);
            }
        }

        Err(LlmError::InvalidResponse(
            "Failed to extract valid JSON from LLM response".to_string(),
        ))
    }

    /// Extract a ```json fenced code block.
    pub fn extract_fenced_json(content: &str) -> Option<String> {
        Self::extract_fenced_block(content, Some("json"))
    }

    /// Extract any fenced code block.
    pub fn extract_any_fenced_code(content: &str) -> Option<String> {
        Self::extract_fenced_block(content, None)
    }

    /// Remove every code fence marker, including a language tag that follows
    /// an opening fence.
    pub fn strip_code_fences(content: &str) -> String {
        let mut out = String::with_capacity(content.len());
        let mut rest = content;

        while let Some(pos) = rest.find(FENCE) {
            out.push_str(&rest[..pos]);
            let after = &rest[pos + FENCE.len()..];
            // Drop a language tag such as `json` directly after the fence
            let tag_len = after
                .char_indices()
                .find(|(_, c)| !c.is_ascii_alphanumeric())
                .map_or(after.len(), |(i, _)| i);
            rest = &after[tag_len..];
        }
        out.push_str(rest);

        out.trim().to_string()
    }

    /// Return the first top-level balanced `{...}` span.
    ///
    /// Tracks nesting depth over the raw text. Inside an object, braces within
    /// string literals (including escaped quotes) are ignored; text outside any
    /// object is treated as prose. Returns `None` when no object closes, e.g.
    /// for truncated output.
    pub fn extract_balanced_object(content: &str) -> Option<&str> {
        let mut depth = 0usize;
        let mut start = 0usize;
        let mut in_string = false;
        let mut escaped = false;

        for (idx, ch) in content.char_indices() {
            if in_string {
                if escaped {
                    escaped = false;
                } else if ch == '\\' {
                    escaped = true;
                } else if ch == '"' {
                    in_string = false;
                }
                continue;
            }

            match ch {
                '"' if depth > 0 => in_string = true,
                '{' => {
                    if depth == 0 {
                        start = idx;
                    }
                    depth += 1;
                }
                '}' if depth > 0 => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(&content[start..=idx]);
                    }
                }
                _ => {}
            }
        }

        None
    }

    /// Iterate over successive top-level balanced `{...}` spans.
    pub fn balanced_objects(content: &str) -> impl Iterator<Item = &str> {
        let mut rest = content;
        std::iter::from_fn(move || {
            let span = Self::extract_balanced_object(rest)?;
            // `span` is a subslice of `rest`; resume scanning after it
            let offset = span.as_ptr() as usize - rest.as_ptr() as usize + span.len();
            rest = &rest[offset..];
            Some(span)
        })
    }

    fn extract_fenced_block(content: &str, language: Option<&str>) -> Option<String> {
        let mut search = content;

        loop {
            let start = search.find(FENCE)?;
            let after_start = &search[start + FENCE.len()..];

            // Determine language tag
            let (lang_tag, rest) = if let Some(line_end) = after_start.find('\n') {
                let tag = after_start[..line_end].trim();
                (tag, &after_start[line_end + 1..])
            } else {
                return None;
            };

            if let Some(expected) = language
                && !lang_tag.eq_ignore_ascii_case(expected)
            {
                // Continue scanning after this fence
                search = after_start;
                continue;
            }

            let end = rest.find(FENCE)?;
            let block = rest[..end].trim().to_string();
            return Some(block);
        }
    }
}
