//! `scrapegen generate <url>` – fetch the generated text and save webscraper.txt.

use anyhow::Result;
use scrapegen_core::config::ScrapegenConfig;
use scrapegen_core::state::UiState;
use scrapegen_core::{Pipeline, SubmitOutcome};
use std::path::PathBuf;
use std::sync::Arc;

use crate::cli::notifier::ConsoleNotifier;

/// `--output-dir`, else `download_dir` from config, else the current directory.
pub fn resolve_download_dir(cfg: &ScrapegenConfig, output_dir: Option<PathBuf>) -> Result<PathBuf> {
    match output_dir.or_else(|| cfg.download_dir.clone()) {
        Some(dir) => Ok(dir),
        None => Ok(std::env::current_dir()?),
    }
}

pub async fn run_generate(
    cfg: &ScrapegenConfig,
    website_url: &str,
    api_key: Option<&str>,
    full: bool,
    output_dir: Option<PathBuf>,
) -> Result<SubmitOutcome> {
    let download_dir = resolve_download_dir(cfg, output_dir)?;
    let pipeline = Pipeline::new(
        cfg,
        download_dir,
        Arc::new(UiState::new()),
        Arc::new(ConsoleNotifier),
    );

    println!("Generating...");
    let outcome = pipeline.submit_fields(website_url, api_key, full).await;
    if let SubmitOutcome::Delivered(path) = &outcome {
        println!("Saved {}", path.display());
    }
    Ok(outcome)
}
