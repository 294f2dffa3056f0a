use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "config.json";

// ---------------------------------------------------------------------------
// Application configuration
// ---------------------------------------------------------------------------

/// Settings the app reads at startup and persists when changed from the UI.
///
/// `data_dir` points at the network share holding the provider exports; the
/// rest describe how exports are named and which process proves the VPN is
/// up. Unknown or missing fields fall back to defaults so an old config
/// file never blocks startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory the provider exports land in.
    pub data_dir: PathBuf,
    /// Glob the export filenames must match.
    pub file_pattern: String,
    /// Match the pattern case-sensitively. Off by default: the exports
    /// come from a Windows share where `.CSV` and `.csv` are the same file.
    pub case_sensitive_pattern: bool,
    /// Process name whose presence means the VPN is connected.
    pub vpn_process: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_dir: PathBuf::from("."),
            file_pattern: "UCSF_ECHO_*.CSV".to_string(),
            case_sensitive_pattern: false,
            vpn_process: "PanGPA.exe".to_string(),
        }
    }
}

/// Platform-specific path of the config file, if a home directory exists.
pub fn config_file_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "ucsfhealth", "ProviderSearch")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Load the configuration, creating a default file on first run.
/// A corrupt file is logged and replaced by defaults rather than
/// preventing startup.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()
        .ok_or_else(|| anyhow::anyhow!("could not determine config directory"))?;

    if !path.exists() {
        log::info!("Config file not found, writing defaults to {}", path.display());
        let default_config = AppConfig::default();
        save_config(&default_config)?;
        return Ok(default_config);
    }

    let content = fs::read_to_string(&path)?;
    match serde_json::from_str::<AppConfig>(&content) {
        Ok(config) => {
            log::info!("Loaded config from {}", path.display());
            Ok(config)
        }
        Err(e) => {
            log::warn!(
                "Failed to parse config file at {}: {e}. Falling back to defaults.",
                path.display()
            );
            Ok(AppConfig::default())
        }
    }
}

/// Persist the configuration to the platform config directory.
pub fn save_config(config: &AppConfig) -> Result<()> {
    let path = config_file_path()
        .ok_or_else(|| anyhow::anyhow!("could not determine config directory"))?;

    if let Some(dir) = path.parent() {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
            log::info!("Created config directory: {}", dir.display());
        }
    }

    fs::write(&path, serde_json::to_string_pretty(config)?)?;
    log::info!("Saved config to {}", path.display());
    Ok(())
}
