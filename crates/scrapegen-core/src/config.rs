use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Upstream text-generation service; the normalized domain is appended as the path.
pub const DEFAULT_SERVICE_BASE: &str = "https://llmstxt.firecrawl.dev/";

/// Cross-origin relay; the percent-encoded upstream URL is appended as the query.
pub const DEFAULT_RELAY_BASE: &str = "https://corsproxy.io/?";

/// Global configuration loaded from `~/.config/scrapegen/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapegenConfig {
    /// Base address of the text-generation service (must end with `/`).
    #[serde(default = "default_service_base")]
    pub service_base: String,
    /// Base address of the relay, including the `?` that starts its query.
    #[serde(default = "default_relay_base")]
    pub relay_base: String,
    /// Directory that receives `webscraper.txt` (None = current directory).
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
}

fn default_service_base() -> String {
    DEFAULT_SERVICE_BASE.to_string()
}

fn default_relay_base() -> String {
    DEFAULT_RELAY_BASE.to_string()
}

impl Default for ScrapegenConfig {
    fn default() -> Self {
        Self {
            service_base: default_service_base(),
            relay_base: default_relay_base(),
            download_dir: None,
        }
    }
}

impl ScrapegenConfig {
    /// Checks that both base addresses are absolute http(s) URLs and that
    /// `service_base` ends with `/` (the domain is appended verbatim).
    pub fn validate(&self) -> Result<()> {
        check_base("service_base", &self.service_base)?;
        check_base("relay_base", &self.relay_base)?;
        if !self.service_base.ends_with('/') {
            anyhow::bail!("service_base must end with '/': {}", self.service_base);
        }
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

fn check_base(field: &str, value: &str) -> Result<()> {
    let parsed = url::Url::parse(value).with_context(|| format!("{field} is not a valid URL: {value}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => anyhow::bail!("{field} must use http or https, got {other}"),
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("scrapegen")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ScrapegenConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ScrapegenConfig::default();
        let toml = default_cfg.to_toml()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load and validate configuration from a specific file.
pub fn load_from(path: &Path) -> Result<ScrapegenConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ScrapegenConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
