//! CLI for the scrapegen web scraper file generator.

mod commands;
mod notifier;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use scrapegen_core::config::{self, ScrapegenConfig};
use std::path::{Path, PathBuf};

use commands::{run_completions, run_config, run_generate, run_man};

/// Top-level CLI for scrapegen.
#[derive(Debug, Parser)]
#[command(name = "scrapegen", version)]
#[command(about = "Generate a web scraper file (llms.txt) for a website", long_about = None)]
pub struct Cli {
    /// Use this config file instead of ~/.config/scrapegen/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Generate webscraper.txt for a website.
    Generate {
        /// Website URL or domain (e.g. example.com).
        website_url: String,

        /// Firecrawl API key (optional).
        #[arg(long, value_name = "KEY")]
        api_key: Option<String>,

        /// Generate the full version.
        #[arg(long)]
        full: bool,

        /// Directory to save webscraper.txt in (default: config, then current directory).
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },

    /// Show the config file path and effective settings.
    Config,

    /// Print shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page (roff).
    Man,
}

fn load_config(path: Option<&Path>) -> Result<ScrapegenConfig> {
    let cfg = match path {
        Some(p) => config::load_from(p)?,
        None => config::load_or_init()?,
    };
    cfg.validate()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

impl CliCommand {
    /// Parses arguments and runs the command. `Ok(false)` means the command ran
    /// but its submission failed (already reported to the user).
    pub async fn run_from_args() -> Result<bool> {
        let cli = Cli::parse();
        let config_path = cli.config.as_deref();

        match cli.command {
            CliCommand::Generate {
                website_url,
                api_key,
                full,
                output_dir,
            } => {
                let cfg = load_config(config_path)?;
                let outcome =
                    run_generate(&cfg, &website_url, api_key.as_deref(), full, output_dir).await?;
                return Ok(outcome.is_delivered());
            }
            CliCommand::Config => {
                let cfg = load_config(config_path)?;
                let path = match config_path {
                    Some(p) => p.to_path_buf(),
                    None => config::config_path()?,
                };
                run_config(&cfg, &path)?;
            }
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests;
