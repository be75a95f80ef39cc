//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.moji/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use clap::ValueEnum;

use crate::core::emoji::SkinTone;
use crate::core::provider::DEFAULT_MAX_UNICODE_VERSION;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MojiConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Skin tone applied to every tone-capable emoji at startup.
    pub default_tone: Option<SkinTone>,
    /// Hide emoji introduced after this Unicode version.
    pub max_unicode_version: Option<f32>,
    /// Category to open the picker on (matched case-insensitively).
    pub start_category: Option<String>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub default_tone: Option<SkinTone>,
    pub max_unicode_version: f32,
    pub start_category: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.moji/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".moji").join("config.toml"))
}

/// Load config from `~/.moji/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `MojiConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<MojiConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(MojiConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(MojiConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: MojiConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# moji Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_tone = "medium"            # "none", "light", "medium-light",
#                                    # "medium", "medium-dark", "dark"
# max_unicode_version = 12.0         # hide emoji your terminal font lacks
# start_category = "Food & Drink"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_tone` and `cli_max_version` are from CLI flags (None = not specified).
pub fn resolve(
    config: &MojiConfig,
    cli_tone: Option<SkinTone>,
    cli_max_version: Option<f32>,
) -> ResolvedConfig {
    // Tone: CLI → env → config → none
    let default_tone = cli_tone
        .or_else(|| {
            std::env::var("MOJI_TONE")
                .ok()
                .and_then(|s| SkinTone::from_str(&s, true).ok())
        })
        .or(config.general.default_tone);

    // Max Unicode version: CLI → env → config → default
    let max_unicode_version = cli_max_version
        .or_else(|| {
            std::env::var("MOJI_UNICODE_VERSION")
                .ok()
                .and_then(|s| s.parse::<f32>().ok())
        })
        .or(config.general.max_unicode_version)
        .unwrap_or(DEFAULT_MAX_UNICODE_VERSION);

    ResolvedConfig {
        default_tone,
        max_unicode_version,
        start_category: config.general.start_category.clone(),
    }
}
