//! Configuration management for termcolors
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_LOCALE_PREFIX, DEFAULT_OVERRIDE_VAR,
    DEFAULT_USER_OVERRIDE_VAR,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub detection: DetectionConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Names of the override variables consulted during detection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DetectionConfig {
    /// Variable a terminal sets to declare its color depth
    pub override_var: String,
    /// Variable a user sets to restrict the declared color depth
    pub user_override_var: String,
    /// Prefix forming the alias of both variables (e.g. `LC_TERM_COLORS`)
    pub locale_prefix: String,
}

/// Swatch output options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Print color grids after the report lines
    pub show_swatches: bool,
    /// Also print grids for levels the terminal does not support
    pub show_unsupported_swatches: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
    /// Minimum level written: off, error, warn, info, debug or trace
    pub level: String,
    /// Log file, defaults to the user cache directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            override_var: DEFAULT_OVERRIDE_VAR.to_string(),
            user_override_var: DEFAULT_USER_OVERRIDE_VAR.to_string(),
            locale_prefix: DEFAULT_LOCALE_PREFIX.to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_swatches: true,
            show_unsupported_swatches: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parsed log level
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        log::LevelFilter::from_str(&self.level).with_context(|| format!("Invalid log level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_DIR_NAME).join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let detection = &self.detection;
        validate_var_name("override_var", &detection.override_var)?;
        validate_var_name("user_override_var", &detection.user_override_var)?;

        if detection.override_var == detection.user_override_var {
            anyhow::bail!(
                "override_var and user_override_var must differ, both are '{}'",
                detection.override_var
            );
        }

        // The prefix may be empty, which makes each alias its own variable again
        if detection.locale_prefix.chars().any(is_forbidden_in_name) {
            anyhow::bail!("Invalid locale_prefix '{}'", detection.locale_prefix);
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# termcolors Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        log::info!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}

fn is_forbidden_in_name(c: char) -> bool {
    c == '=' || c == '\0' || c.is_whitespace()
}

fn validate_var_name(field: &str, name: &str) -> Result<()> {
    if name.is_empty() {
        anyhow::bail!("{} cannot be empty", field);
    }
    if name.chars().any(is_forbidden_in_name) {
        anyhow::bail!("{} '{}' is not a valid environment variable name", field, name);
    }
    Ok(())
}
