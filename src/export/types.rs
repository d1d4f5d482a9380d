//! Export types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Output format for a load report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// One row per calendar day
    Csv,
    /// Full report as JSON
    Json,
}

impl ExportFormat {
    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Text => write!(f, "Text"),
            ExportFormat::Csv => write!(f, "CSV"),
            ExportFormat::Json => write!(f, "JSON"),
        }
    }
}

/// Errors during report export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Nothing to export
    #[error("Report has no data to export")]
    NoData,

    /// Failed to write export data
    #[error("Failed to write data: {0}")]
    WriteFailed(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
