//! `scrapegen config` – show where the config lives and what is in effect.

use anyhow::Result;
use scrapegen_core::config::ScrapegenConfig;
use std::path::Path;

pub fn run_config(cfg: &ScrapegenConfig, path: &Path) -> Result<()> {
    println!("# {}", path.display());
    print!("{}", cfg.to_toml()?);
    Ok(())
}
