//! Storage module for configuration.

pub mod config;

pub use config::{AnalysisSettings, AppConfig, ConfigError, InputSettings};
