//! Application configuration.
//!
//! Analysis constants (time constants, unilateral keywords, balance fractions)
//! and input options live in a TOML file in the platform data directory. A
//! missing file yields the defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Analysis constants for the training load pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Long-horizon (fitness) time constant in days
    pub chronic_days: f64,
    /// Short-horizon (stress) time constant in days
    pub acute_days: f64,
    /// Exercise label fragments marking single-limb movements
    pub unilateral_keywords: Vec<String>,
    /// Weight multiplier applied to single-limb movements
    pub unilateral_multiplier: f64,
    /// Ideal recovery as a fraction of fitness
    pub ideal_balance_fraction: f64,
    /// Lower edge of the optimal recovery band as a fraction of final fitness
    pub balance_band_fraction: f64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            chronic_days: 42.0,
            acute_days: 7.0,
            unilateral_keywords: ["One", "Single", "Dumbbell", "Split"]
                .into_iter()
                .map(String::from)
                .collect(),
            unilateral_multiplier: 2.0,
            ideal_balance_fraction: -0.0073,
            balance_band_fraction: -0.1,
        }
    }
}

/// Workout log input options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// Field delimiter (single ASCII character)
    pub delimiter: char,
    /// chrono date formats, tried in order
    pub date_formats: Vec<String>,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            delimiter: ',',
            date_formats: ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl InputSettings {
    /// The delimiter as a byte, falling back to a comma for non-ASCII input.
    ///
    /// [`AppConfig::validate`] rejects non-ASCII delimiters before this is reached.
    pub fn delimiter_byte(&self) -> u8 {
        u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .unwrap_or(b',')
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Analysis settings
    pub analysis: AnalysisSettings,
    /// Input settings
    pub input: InputSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            analysis: AnalysisSettings::default(),
            input: InputSettings::default(),
        }
    }
}

impl AppConfig {
    /// Check values the pipeline cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let analysis = &self.analysis;
        for (name, days) in [
            ("chronic_days", analysis.chronic_days),
            ("acute_days", analysis.acute_days),
        ] {
            if !(days.is_finite() && days > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a positive number of days, got {days}"
                )));
            }
        }

        if !analysis.unilateral_multiplier.is_finite() || analysis.unilateral_multiplier < 0.0 {
            return Err(ConfigError::Invalid(
                "unilateral_multiplier must be a non-negative number".to_string(),
            ));
        }

        for (name, fraction) in [
            ("ideal_balance_fraction", analysis.ideal_balance_fraction),
            ("balance_band_fraction", analysis.balance_band_fraction),
        ] {
            if !fraction.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a finite number, got {fraction}"
                )));
            }
        }

        if !self.input.delimiter.is_ascii() {
            return Err(ConfigError::Invalid(format!(
                "delimiter must be a single ASCII character, got '{}'",
                self.input.delimiter
            )));
        }

        if self.input.date_formats.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one date format is required".to_string(),
            ));
        }

        Ok(())
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "liftload", "LiftLoad")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from a file, using defaults if it doesn't exist.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    config.validate()?;

    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Save application configuration to a file.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
