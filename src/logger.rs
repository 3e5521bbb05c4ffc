use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// File logger built from the `[logging]` section of the configuration.
///
/// Standard output carries the swatches, so log records only ever go to a
/// file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logger {
    level: log::LevelFilter,
    log_file: Option<PathBuf>,
}

impl Logger {
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        if !config.enabled {
            return Ok(Self {
                level: log::LevelFilter::Off,
                log_file: None,
            });
        }

        let log_file = match &config.file {
            Some(path) => path.clone(),
            None => Self::get_log_file_path()?,
        };

        Ok(Self {
            level: config.level_filter()?,
            log_file: Some(log_file),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.log_file.is_some() && self.level != log::LevelFilter::Off
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Build the fern dispatch, creating the log file if needed.
    ///
    /// Returns `None` when logging is disabled.
    pub fn dispatch(&self) -> Result<Option<fern::Dispatch>> {
        let Some(path) = self.log_file.as_ref().filter(|_| self.is_enabled()) else {
            return Ok(None);
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

        let dispatch = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{}] {:<5} {}: {}",
                    chrono::Local::now().format("%H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(self.level)
            .chain(file);

        Ok(Some(dispatch))
    }

    /// Install as the global logger. Does nothing when logging is disabled.
    pub fn init(&self) -> Result<()> {
        if let Some(dispatch) = self.dispatch()? {
            dispatch.apply().context("Failed to install logger")?;
        }
        Ok(())
    }

    /// Default log file location inside the user cache directory
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine cache directory"))
            .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
    }
}
