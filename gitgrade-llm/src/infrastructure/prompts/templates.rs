use gitgrade_core::domain::RepoContext;

pub const REVIEW_SYSTEM_PROMPT: &str = "Act as a Principal Software Engineer. Conduct a strict code review. Output ONLY valid JSON.";

pub const REVIEW_USER_PROMPT: &str = r#"REPO CONTEXT:
File Structure: {file_tree}
README Content: {readme}

TASK:
1. Score (0-100): Be critical.
2. Summary: Executive summary of the project.
3. Roadmap: 3 technical recommendations.

OUTPUT JSON FORMAT:
{
  "score": 85,
  "summary": "Project summary here...",
  "roadmap": ["Step 1", "Step 2", "Step 3"]
}
"#;

pub struct PromptBuilder;

impl PromptBuilder {
    /// Render the user prompt for a repository review.
    ///
    /// The file tree is embedded as a JSON array literal and the README is cut
    /// to its first `readme_char_limit` characters.
    pub fn build_review_prompt(context: &RepoContext, readme_char_limit: usize) -> String {
        let file_tree =
            serde_json::to_string(&context.file_tree).unwrap_or_else(|_| "[]".to_string());

        let readme = Self::truncate_chars(&context.readme, readme_char_limit);

        Self::render(
            REVIEW_USER_PROMPT,
            &[("{file_tree}", &file_tree), ("{readme}", readme)],
        )
    }

    /// Substitute placeholders in a single left-to-right pass over `template`.
    ///
    /// Substituted values are never rescanned, so placeholder-like text inside
    /// a file name or README is left as is.
    fn render(template: &str, values: &[(&str, &str)]) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];
            match values.iter().find(|(key, _)| tail.starts_with(key)) {
                Some((key, value)) => {
                    out.push_str(value);
                    rest = &tail[key.len()..];
                }
                None => {
                    out.push('{');
                    rest = &tail[1..];
                }
            }
        }

        out.push_str(rest);
        out
    }

    /// Prefix of `text` holding at most `limit` characters, never splitting one.
    pub fn truncate_chars(text: &str, limit: usize) -> &str {
        match text.char_indices().nth(limit) {
            Some((idx, _)) => &text[..idx],
            None => text,
        }
    }
}
