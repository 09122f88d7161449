use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{Breakpoints, Config, SinkKind};

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/cotizador/config.toml` on Unix/macOS, or the
    /// platform equivalent via `dirs::config_dir()`. Falls back to the
    /// current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("cotizador").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Reads and parses configuration from an explicit path.
    ///
    /// Validation is left to the caller so CLI overrides are checked too.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Every page size is at least 1 and the large breakpoint is wider
    ///   than the medium one
    /// - The swipe threshold and cell width are positive
    /// - The EmailJS sink has its service, template and key
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_breakpoints("providers", &self.providers)?;
        validate_breakpoints("news", &self.news)?;

        if !(self.carousel.swipe_threshold > 0.0) {
            return Err(ConfigError::ValidationError {
                message: "carousel.swipe_threshold must be greater than 0".to_string(),
            });
        }

        if self.viewport.cell_width_px == 0 {
            return Err(ConfigError::ValidationError {
                message: "viewport.cell_width_px must be at least 1".to_string(),
            });
        }

        if self.submission.sink == SinkKind::EmailJs {
            let emailjs = &self.submission.emailjs;
            if emailjs.service_id.trim().is_empty() || emailjs.template_id.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: "The emailjs sink requires submission.emailjs.service_id and template_id"
                        .to_string(),
                });
            }
            if emailjs.resolved_public_key().is_none() {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "The emailjs sink requires submission.emailjs.public_key or {}",
                        crate::config::EMAILJS_KEY_ENV
                    ),
                });
            }
        }

        Ok(())
    }
}

fn validate_breakpoints(section: &str, breakpoints: &Breakpoints) -> Result<(), ConfigError> {
    if breakpoints.large == 0 || breakpoints.medium == 0 || breakpoints.small == 0 {
        return Err(ConfigError::ValidationError {
            message: format!("{}: page sizes must be at least 1", section),
        });
    }
    if breakpoints.large_min_width <= breakpoints.medium_min_width {
        return Err(ConfigError::ValidationError {
            message: format!(
                "{}: large_min_width ({}) must be greater than medium_min_width ({})",
                section, breakpoints.large_min_width, breakpoints.medium_min_width
            ),
        });
    }
    Ok(())
}
