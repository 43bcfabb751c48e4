//! Unit tests for review prompt templates and PromptBuilder

use gitgrade_core::domain::{README_NOT_FOUND, RepoContext};
use gitgrade_llm::infrastructure::prompts::{
    PromptBuilder, REVIEW_SYSTEM_PROMPT, REVIEW_USER_PROMPT,
};
use rstest::rstest;

#[test]
fn test_system_prompt_demands_json() {
    assert!(REVIEW_SYSTEM_PROMPT.starts_with("Act as a Principal Software Engineer"));
    assert!(REVIEW_SYSTEM_PROMPT.ends_with("Output ONLY valid JSON."));
}

#[test]
fn test_user_prompt_has_placeholders_and_schema() {
    assert!(REVIEW_USER_PROMPT.contains("{file_tree}"));
    assert!(REVIEW_USER_PROMPT.contains("{readme}"));
    assert!(REVIEW_USER_PROMPT.contains("Be critical"));
    assert!(REVIEW_USER_PROMPT.contains("3 technical recommendations"));
    assert!(REVIEW_USER_PROMPT.contains("\"roadmap\""));
}

#[test]
fn test_review_prompt_embeds_tree_as_json_array() {
    let context = RepoContext::new(
        vec!["src".to_string(), "README.md".to_string()],
        "# Title",
    );
    let prompt = PromptBuilder::build_review_prompt(&context, 4000);

    assert!(prompt.contains(r#"File Structure: ["src","README.md"]"#));
    assert!(prompt.contains("README Content: # Title"));
    assert!(!prompt.contains("{file_tree}"));
    assert!(!prompt.contains("{readme}"));
}

#[test]
fn test_review_prompt_is_deterministic() {
    let context = RepoContext::new(vec!["a".to_string()], "readme");
    assert_eq!(
        PromptBuilder::build_review_prompt(&context, 4000),
        PromptBuilder::build_review_prompt(&context, 4000)
    );
}

#[test]
fn test_review_prompt_with_empty_tree_and_sentinel() {
    let context = RepoContext::new(Vec::new(), README_NOT_FOUND);
    let prompt = PromptBuilder::build_review_prompt(&context, 4000);

    assert!(prompt.contains("File Structure: []"));
    assert!(prompt.contains("README Content: No README found."));
}

#[test]
fn test_review_prompt_truncates_readme() {
    let readme = format!("{}{}", "a".repeat(4000), "TAIL");
    let context = RepoContext::new(Vec::new(), readme);
    let prompt = PromptBuilder::build_review_prompt(&context, 4000);

    assert!(prompt.contains(&"a".repeat(4000)));
    assert!(!prompt.contains("TAIL"));
}

#[rstest]
#[case("hello", 10, "hello")]
#[case("hello", 5, "hello")]
#[case("hello", 3, "hel")]
#[case("hello", 0, "")]
#[case("héllo wörld", 4, "héll")]
#[case("日本語テキスト", 3, "日本語")]
#[case("🦀🦀🦀", 2, "🦀🦀")]
fn test_truncate_chars(#[case] input: &str, #[case] limit: usize, #[case] expected: &str) {
    assert_eq!(PromptBuilder::truncate_chars(input, limit), expected);
}

#[test]
fn test_placeholder_named_paths_are_not_substituted() {
    let context = RepoContext::new(
        vec!["{readme}".to_string(), "{file_tree}".to_string()],
        "SECRET README BODY",
    );
    let prompt = PromptBuilder::build_review_prompt(&context, 4000);

    assert!(prompt.contains(r#"File Structure: ["{readme}","{file_tree}"]"#));
    assert_eq!(prompt.matches("SECRET README BODY").count(), 1);
}

#[test]
fn test_placeholder_text_in_readme_is_kept_verbatim() {
    let context = RepoContext::new(vec!["src".to_string()], "Use {file_tree} and {readme} here");
    let prompt = PromptBuilder::build_review_prompt(&context, 4000);

    assert!(prompt.contains("README Content: Use {file_tree} and {readme} here"));
    assert_eq!(prompt.matches(r#"["src"]"#).count(), 1);
}

#[test]
fn test_schema_braces_survive_rendering() {
    let context = RepoContext::new(Vec::new(), "x");
    let prompt = PromptBuilder::build_review_prompt(&context, 4000);

    assert!(prompt.contains("OUTPUT JSON FORMAT:\n{\n  \"score\": 85,"));
}
