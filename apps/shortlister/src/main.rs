mod config;
mod errors;
mod ingest;
mod llm_client;
mod pipeline;
mod screening;

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.log_level))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting shortlister v{}", env!("CARGO_PKG_VERSION"));

    if config.openai_api_key.is_none() {
        // Not fatal: the call fails later and the run finishes with an empty shortlist.
        error!("OPENAI_API_KEY is not set; the LLM call will fail");
    }

    let llm = match LlmClient::new(&config) {
        Ok(llm) => llm,
        Err(e) => {
            error!("Failed to initialize LLM client: {e}");
            return Ok(());
        }
    };
    info!("LLM client initialized (model: {})", llm.model());

    // Every pipeline outcome ends the process normally; failures are in the log.
    match pipeline::run(&config, &llm).await {
        Ok(summary) => {
            println!(
                "\nDone: {} resume(s) screened, {} shortlisted, {} not found.",
                summary.resumes_loaded,
                summary.shortlisted.len(),
                summary.missing.len()
            );
        }
        Err(e) => error!("{e}"),
    }

    Ok(())
}
