//! Prompt Builder: a pure function of requirements and resumes.

use crate::ingest::requirements::Requirements;
use crate::ingest::resumes::Resume;
use crate::screening::prompts::{
    RESUME_BLOCK_TEMPLATE, SCREENING_INSTRUCTIONS, SCREENING_PROMPT_HEADER,
};

/// Characters of each resume that reach the model. The rest is dropped.
pub const RESUME_CHAR_LIMIT: usize = 3000;

/// Builds the single screening prompt.
pub fn build_prompt(requirements: &Requirements, resumes: &[Resume]) -> String {
    let mut prompt = SCREENING_PROMPT_HEADER
        .replace("{keywords}", &requirements.keywords.join(", "))
        .replace("{job_description}", &requirements.job_description);

    for resume in resumes {
        prompt.push_str(
            &RESUME_BLOCK_TEMPLATE
                .replace("{filename}", &resume.filename)
                .replace("{content}", truncate_chars(&resume.text, RESUME_CHAR_LIMIT)),
        );
    }

    prompt.push_str(SCREENING_INSTRUCTIONS);
    prompt
}

/// The first `limit` characters of `text`, never splitting a code point.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resume(filename: &str, text: &str) -> Resume {
        Resume {
            filename: filename.to_string(),
            text: text.to_string(),
        }
    }

    fn requirements() -> Requirements {
        Requirements {
            job_description: "Backend engineer building payment rails in Rust.".to_string(),
            keywords: vec!["Rust".to_string(), "PostgreSQL".to_string(), "gRPC".to_string()],
        }
    }

    #[test]
    fn test_prompt_contains_description_and_every_keyword() {
        let prompt = build_prompt(&requirements(), &[resume("a.pdf", "text")]);
        assert!(prompt.contains("Backend engineer building payment rails in Rust."));
        for kw in ["Rust", "PostgreSQL", "gRPC"] {
            assert!(prompt.contains(kw), "missing keyword {kw}");
        }
        assert!(prompt.contains("Rust, PostgreSQL, gRPC"));
    }

    #[test]
    fn test_each_resume_is_labelled_by_filename() {
        let prompt = build_prompt(
            &requirements(),
            &[resume("alice.pdf", "Alice text"), resume("bob smith.pdf", "Bob text")],
        );
        assert!(prompt.contains("Resume: alice.pdf\nContent:\nAlice text\n---"));
        assert!(prompt.contains("Resume: bob smith.pdf\nContent:\nBob text\n---"));
        assert!(prompt.find("alice.pdf").unwrap() < prompt.find("bob smith.pdf").unwrap());
    }

    #[test]
    fn test_resume_over_limit_is_cut_to_exactly_3000_chars() {
        let text = format!("{}Z", "a".repeat(RESUME_CHAR_LIMIT));
        assert_eq!(text.chars().count(), 3001);

        let prompt = build_prompt(&requirements(), &[resume("long.pdf", &text)]);

        let inserted = prompt
            .split("Resume: long.pdf\nContent:\n")
            .nth(1)
            .and_then(|rest| rest.split("\n---\n").next())
            .unwrap();
        assert_eq!(inserted.chars().count(), 3000);
        assert!(!inserted.contains('Z'));
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let text = "é".repeat(3001);
        let cut = truncate_chars(&text, RESUME_CHAR_LIMIT);
        assert_eq!(cut.chars().count(), 3000);
        assert_eq!(cut.len(), 6000);
    }

    #[test]
    fn test_short_text_is_untouched() {
        assert_eq!(truncate_chars("short", RESUME_CHAR_LIMIT), "short");
        assert_eq!(truncate_chars("", RESUME_CHAR_LIMIT), "");
    }

    #[test]
    fn test_prompt_ends_with_reply_template() {
        let prompt = build_prompt(&requirements(), &[]);
        assert!(prompt.contains("score >= 80"));
        assert!(prompt.contains("Sort shortlisted resumes by score descending."));
        assert!(prompt.trim_end().ends_with("Score: <score>"));
        assert!(prompt.contains("Shortlisted:\n1. Filename: <filename.pdf>"));
    }

    #[test]
    fn test_empty_requirements_still_build_a_prompt() {
        let prompt = build_prompt(&Requirements::default(), &[resume("a.pdf", "")]);
        assert!(prompt.contains("Job Description:\n\n"));
        assert!(prompt.contains("Resume: a.pdf"));
    }
}
