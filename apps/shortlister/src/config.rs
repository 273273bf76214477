use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use crate::screening::response_parser::MatchScope;

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Command-line surface. Every flag falls back to an environment variable so a
/// `.env` file alone is enough to drive a run.
#[derive(Debug, Parser)]
#[command(name = "shortlister")]
#[command(about = "Shortlist PDF resumes against a job description with an LLM")]
#[command(version)]
pub struct Cli {
    /// Directory containing the candidate resumes (*.pdf)
    #[arg(long, env = "RESUME_DIR", default_value = "./data")]
    pub resume_dir: PathBuf,

    /// Job description text file
    #[arg(long = "job-description", env = "JOB_DESC_FILE", default_value = "job_description.txt")]
    pub job_description_path: PathBuf,

    /// Keyword file, one keyword per line
    #[arg(long = "keywords", env = "KEYWORDS_FILE", default_value = "keywords.txt")]
    pub keywords_path: PathBuf,

    /// Output directory for shortlisted copies. Reset on every run.
    #[arg(long, env = "SHORTLIST_DIR", default_value = "./shortlisted")]
    pub shortlist_dir: PathBuf,

    /// Chat-completion model identifier
    #[arg(long, env = "LLM_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Chat-completion endpoint
    #[arg(long, env = "LLM_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Request timeout for the LLM call, in seconds
    #[arg(long, env = "LLM_TIMEOUT_SECS", default_value_t = 120)]
    pub timeout_secs: u64,

    /// Which part of the model reply filenames are read from
    #[arg(long, env = "MATCH_SCOPE", value_enum, default_value_t = MatchScope::Shortlisted)]
    pub match_scope: MatchScope,

    /// Reset the shortlist directory even if it holds files this tool did not create
    #[arg(long, env = "FORCE_RESET")]
    pub force_reset: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

/// Run configuration, built once at process entry and passed by reference.
#[derive(Debug, Clone)]
pub struct Config {
    pub resume_dir: PathBuf,
    pub job_description_path: PathBuf,
    pub keywords_path: PathBuf,
    pub shortlist_dir: PathBuf,
    /// Absent key is not a startup error; the LLM call fails instead.
    pub openai_api_key: Option<String>,
    pub model: String,
    pub api_url: String,
    pub timeout: Duration,
    pub match_scope: MatchScope,
    pub force_reset: bool,
    pub log_level: String,
}

impl Config {
    /// Loads `.env` (if present), parses CLI flags and reads the API key.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let cli = Cli::parse();
        let api_key = std::env::var("OPENAI_API_KEY").ok();
        Ok(Self::from_cli(cli, api_key))
    }

    pub fn from_cli(cli: Cli, openai_api_key: Option<String>) -> Self {
        Config {
            resume_dir: cli.resume_dir,
            job_description_path: cli.job_description_path,
            keywords_path: cli.keywords_path,
            shortlist_dir: cli.shortlist_dir,
            openai_api_key: openai_api_key
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty()),
            model: cli.model,
            api_url: cli.api_url,
            timeout: Duration::from_secs(cli.timeout_secs),
            match_scope: cli.match_scope,
            force_reset: cli.force_reset,
            log_level: cli.log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "shortlister",
            "--resume-dir",
            "cvs",
            "--shortlist-dir",
            "out",
            "--match-scope",
            "anywhere",
            "--timeout-secs",
            "30",
            "--force-reset",
        ])
        .unwrap();
        let config = Config::from_cli(cli, Some("sk-test".to_string()));

        assert_eq!(config.resume_dir, PathBuf::from("cvs"));
        assert_eq!(config.shortlist_dir, PathBuf::from("out"));
        assert_eq!(config.match_scope, MatchScope::Anywhere);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.force_reset);
        assert_eq!(config.openai_api_key.as_deref(), Some("sk-test"));
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let cli = Cli::try_parse_from(["shortlister"]).unwrap();
        let config = Config::from_cli(cli, Some("   ".to_string()));
        assert!(config.openai_api_key.is_none());
    }

    #[test]
    fn test_rejects_unknown_match_scope() {
        assert!(Cli::try_parse_from(["shortlister", "--match-scope", "rejected"]).is_err());
    }
}
