//! Orchestration: load → prompt → ask the model → parse → file.
//!
//! Every stage runs to completion before the next starts. Stage failures are
//! logged and degrade to empty input for the following stage; only the
//! shortlist-directory guard can end a run early.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info, warn};

use crate::config::Config;
use crate::errors::AppError;
use crate::ingest::requirements::load_requirements;
use crate::ingest::resumes::load_resumes;
use crate::llm_client::prompts::HR_ASSISTANT_SYSTEM;
use crate::llm_client::ChatBackend;
use crate::screening::filer::{file_shortlist, prepare_output_dir, ShortlistedFile};
use crate::screening::prompt_builder::build_prompt;
use crate::screening::response_parser::parser_for;

/// What a run did, for the closing console summary.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub resumes_loaded: usize,
    pub filenames_matched: usize,
    pub shortlisted: Vec<ShortlistedFile>,
    pub missing: Vec<String>,
}

pub async fn run(config: &Config, llm: &dyn ChatBackend) -> Result<RunSummary, AppError> {
    let resumes = load_resumes(&config.resume_dir, &extraction_progress());

    // Reset before the network call so a refused reset costs no API request.
    prepare_output_dir(&config.shortlist_dir, &config.resume_dir, config.force_reset)?;

    let mut summary = RunSummary {
        resumes_loaded: resumes.len(),
        ..Default::default()
    };

    if resumes.is_empty() {
        warn!(
            "No PDF resumes found in {}; skipping the LLM call",
            config.resume_dir.display()
        );
        return Ok(summary);
    }

    let requirements = load_requirements(&config.job_description_path, &config.keywords_path);
    if requirements.is_empty() {
        warn!("Screening without a job description or keywords");
    }

    let prompt = build_prompt(&requirements, &resumes);
    info!(
        "Built prompt for {} resume(s) ({} chars)",
        resumes.len(),
        prompt.chars().count()
    );

    let spinner = llm_spinner();
    let reply = match llm.complete(HR_ASSISTANT_SYSTEM, &prompt).await {
        Ok(text) => text,
        Err(e) => {
            error!("LLM API error: {e}");
            String::new()
        }
    };
    spinner.finish_and_clear();

    println!("\nResponse from the model:\n");
    println!("{reply}");

    let filenames = parser_for(config.match_scope).parse(&reply);
    summary.filenames_matched = filenames.len();

    println!("\n📄 Shortlisted Resumes:\n");
    let report = file_shortlist(&filenames, &config.resume_dir, &config.shortlist_dir);
    summary.shortlisted = report.copied;
    summary.missing = report.missing;

    info!(
        "Shortlisted {} of {} resume(s) into {}",
        summary.shortlisted.len(),
        summary.resumes_loaded,
        config.shortlist_dir.display()
    );
    Ok(summary)
}

fn extraction_progress() -> ProgressBar {
    let pb = ProgressBar::new(0);
    if let Ok(style) =
        ProgressStyle::default_bar().template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb
}

fn llm_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Waiting for the model...");
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}
