use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use directories::ProjectDirs;

use crate::models::schedule::{PartialScheduleConfig, ScheduleConfig};

const CONFIG_FILE_NAME: &str = "weekly-schedule.toml";

/// Config file syntax, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("toml") => Ok(ConfigFormat::Toml),
            Some("json") => Ok(ConfigFormat::Json),
            Some(other) => bail!("Unsupported config format `.{}` for {}", other, path.display()),
            None => bail!("Config file {} has no extension", path.display()),
        }
    }
}

/// Parse a raw configuration from text
pub fn parse_config(text: &str, format: ConfigFormat) -> Result<PartialScheduleConfig> {
    let partial = match format {
        ConfigFormat::Toml => toml::from_str(text).context("Failed to parse TOML config")?,
        ConfigFormat::Json => serde_json::from_str(text).context("Failed to parse JSON config")?,
    };
    Ok(partial)
}

/// Read a raw configuration from a `.toml` or `.json` file
pub fn load_config(path: &Path) -> Result<PartialScheduleConfig> {
    let format = ConfigFormat::from_path(path)?;
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let partial = parse_config(&text, format)
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    log::debug!("Loaded config from {}", path.display());
    Ok(partial)
}

/// Write a normalized configuration, format chosen by extension
pub fn save_config(path: &Path, config: &ScheduleConfig) -> Result<()> {
    let text = match ConfigFormat::from_path(path)? {
        ConfigFormat::Toml => toml::to_string_pretty(config).context("Failed to encode TOML")?,
        ConfigFormat::Json => {
            serde_json::to_string_pretty(config).context("Failed to encode JSON")?
        }
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("Wrote config to {}", path.display());
    Ok(())
}

/// Platform config location, e.g. `~/.config/weekly-schedule/weekly-schedule.toml`
pub fn default_config_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "weekly-schedule")
        .ok_or_else(|| anyhow!("Could not determine a config directory"))?;
    Ok(dirs.config_dir().join(CONFIG_FILE_NAME))
}
