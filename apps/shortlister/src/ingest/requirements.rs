//! Requirements Loader: job description text plus the keyword list.

use std::path::Path;

use tracing::{error, info};

use crate::errors::AppError;

/// What the candidates are screened against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Requirements {
    pub job_description: String,
    /// Trimmed, non-empty, first-occurrence order, no duplicates.
    pub keywords: Vec<String>,
}

impl Requirements {
    pub fn is_empty(&self) -> bool {
        self.job_description.trim().is_empty() && self.keywords.is_empty()
    }
}

/// Loads both requirement files. If either cannot be read the whole set falls
/// back to empty and the run continues with a degenerate prompt.
pub fn load_requirements(job_description_path: &Path, keywords_path: &Path) -> Requirements {
    match try_load_requirements(job_description_path, keywords_path) {
        Ok(requirements) => {
            info!(
                "Loaded job description ({} chars) and {} keyword(s)",
                requirements.job_description.chars().count(),
                requirements.keywords.len()
            );
            requirements
        }
        Err(e) => {
            error!("{e}");
            Requirements::default()
        }
    }
}

fn try_load_requirements(
    job_description_path: &Path,
    keywords_path: &Path,
) -> Result<Requirements, AppError> {
    let job_description = read_text(job_description_path)?;
    let keywords = parse_keywords(&read_text(keywords_path)?);
    Ok(Requirements {
        job_description,
        keywords,
    })
}

fn read_text(path: &Path) -> Result<String, AppError> {
    std::fs::read_to_string(path)
        .map_err(|e| AppError::Requirements(format!("{}: {e}", path.display())))
}

/// One keyword per non-empty line, whitespace-trimmed, duplicates dropped.
pub fn parse_keywords(raw: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    for line in raw.lines() {
        let keyword = line.trim();
        if keyword.is_empty() || keywords.iter().any(|k| k == keyword) {
            continue;
        }
        keywords.push(keyword.to_string());
    }
    keywords
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_parse_keywords_trims_and_skips_blank_lines() {
        let raw = "  Rust \n\nKubernetes\r\n   \nPostgreSQL\n";
        assert_eq!(parse_keywords(raw), vec!["Rust", "Kubernetes", "PostgreSQL"]);
    }

    #[test]
    fn test_parse_keywords_drops_duplicates_keeping_first() {
        let raw = "Rust\nGo\nRust\n  Go  \nSQL";
        assert_eq!(parse_keywords(raw), vec!["Rust", "Go", "SQL"]);
    }

    #[test]
    fn test_load_reads_whole_description_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let jd = dir.path().join("jd.txt");
        let kw = dir.path().join("kw.txt");
        fs::write(&jd, "Senior Rust Engineer\n\nBuild storage engines.\n").unwrap();
        fs::write(&kw, "rust\ntokio\n").unwrap();

        let req = load_requirements(&jd, &kw);
        assert_eq!(
            req.job_description,
            "Senior Rust Engineer\n\nBuild storage engines.\n"
        );
        assert_eq!(req.keywords, vec!["rust", "tokio"]);
        assert!(!req.is_empty());
    }

    #[test]
    fn test_missing_keyword_file_empties_everything() {
        let dir = tempfile::tempdir().unwrap();
        let jd = dir.path().join("jd.txt");
        fs::write(&jd, "A perfectly fine description").unwrap();

        let req = load_requirements(&jd, &dir.path().join("missing.txt"));
        assert_eq!(req, Requirements::default());
        assert!(req.is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_a_load_failure() {
        let dir = tempfile::tempdir().unwrap();
        let jd = dir.path().join("jd.txt");
        let kw = dir.path().join("kw.txt");
        fs::write(&jd, [0xff, 0xfe, 0xfd]).unwrap();
        fs::write(&kw, "rust").unwrap();

        assert!(load_requirements(&jd, &kw).is_empty());
    }
}
