//! Analytics error types.

use crate::workouts::types::WorkoutParseError;
use thiserror::Error;

/// Errors that can occur during training load analysis.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Insufficient data to perform calculation.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Invalid input provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Derived series no longer line up day for day.
    #[error("Series misaligned: {0}")]
    SeriesMisaligned(String),

    /// Workout log could not be read.
    #[error("Workout log error: {0}")]
    Parse(#[from] WorkoutParseError),
}

/// Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;
