//! Configuration management for the showcase
//!
//! Handles config file loading/saving and command-line overrides.
//! Config is stored at ~/.config/rgn-showcase/config.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Delay before the loading overlay lifts
pub const DEFAULT_LOAD_DELAY_MS: u64 = 1100;

/// Period of the automatic news rotation
pub const DEFAULT_CAROUSEL_PERIOD_MS: u64 = 4500;

/// Redraws per second in the interactive UI
pub const DEFAULT_FRAME_RATE: u32 = 30;

/// Base URL for placeholder images
pub const DEFAULT_ASSET_BASE: &str = "https://picsum.photos/800/450";

/// Errors from config loading and validation
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to write config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
    #[error("Could not determine config path")]
    NoConfigDir,
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Milliseconds before the page content is revealed
    pub load_delay_ms: u64,
    /// Milliseconds between automatic news advances
    pub carousel_period_ms: u64,
    /// Redraws per second
    pub frame_rate: u32,
    /// Base URL for placeholder images
    pub asset_base: String,
    /// Catalog file replacing the built-in lineup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
    /// Log filter (e.g. "debug", "rgn_showcase=trace")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            load_delay_ms: DEFAULT_LOAD_DELAY_MS,
            carousel_period_ms: DEFAULT_CAROUSEL_PERIOD_MS,
            frame_rate: DEFAULT_FRAME_RATE,
            asset_base: DEFAULT_ASSET_BASE.to_string(),
            catalog: None,
            log_level: None,
        }
    }
}

/// Values given on the command line, applied over the file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub load_delay_ms: Option<u64>,
    pub carousel_period_ms: Option<u64>,
    pub frame_rate: Option<u32>,
    pub asset_base: Option<String>,
    pub catalog: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl Config {
    /// Get config file path (~/.config/rgn-showcase/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("rgn-showcase").join("config.toml"))
    }

    /// Load config from the default path, or defaults if there is no file
    pub fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from `path`. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config: Config = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the default path
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let toml = toml::to_string_pretty(self)?;
        std::fs::write(path, toml).map_err(io_err)?;
        Ok(())
    }

    /// Apply command-line values and re-validate
    pub fn apply(mut self, overrides: Overrides) -> Result<Self, ConfigError> {
        if let Some(v) = overrides.load_delay_ms {
            self.load_delay_ms = v;
        }
        if let Some(v) = overrides.carousel_period_ms {
            self.carousel_period_ms = v;
        }
        if let Some(v) = overrides.frame_rate {
            self.frame_rate = v;
        }
        if let Some(v) = overrides.asset_base {
            self.asset_base = v;
        }
        if overrides.catalog.is_some() {
            self.catalog = overrides.catalog;
        }
        if overrides.log_level.is_some() {
            self.log_level = overrides.log_level;
        }
        self.validate()?;
        Ok(self)
    }

    /// Reject settings that would stall timers or the render loop
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.carousel_period_ms == 0 {
            return Err(ConfigError::Invalid(
                "carousel_period_ms must be greater than 0".into(),
            ));
        }
        if self.frame_rate == 0 {
            return Err(ConfigError::Invalid(
                "frame_rate must be greater than 0".into(),
            ));
        }
        if self.asset_base.trim().is_empty() {
            return Err(ConfigError::Invalid("asset_base must not be empty".into()));
        }
        Ok(())
    }

    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }

    pub fn carousel_period(&self) -> Duration {
        Duration::from_millis(self.carousel_period_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.load_delay(), Duration::from_millis(1100));
        assert_eq!(config.carousel_period(), Duration::from_millis(4500));
        assert!(config.catalog.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("frame_rate = 60").unwrap();
        assert_eq!(config.frame_rate, 60);
        assert_eq!(config.load_delay_ms, DEFAULT_LOAD_DELAY_MS);
        assert_eq!(config.asset_base, DEFAULT_ASSET_BASE);
    }

    #[test]
    fn test_overrides_win() {
        let config = Config::default()
            .apply(Overrides {
                load_delay_ms: Some(0),
                carousel_period_ms: Some(1000),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(config.load_delay_ms, 0);
        assert_eq!(config.carousel_period_ms, 1000);
        assert_eq!(config.frame_rate, DEFAULT_FRAME_RATE);
    }

    #[test]
    fn test_zero_period_rejected() {
        let result = Config::default().apply(Overrides {
            carousel_period_ms: Some(0),
            ..Default::default()
        });
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_frame_interval() {
        let config = Config {
            frame_rate: 20,
            ..Config::default()
        };
        assert_eq!(config.frame_interval(), Duration::from_millis(50));
    }
}
