//! Metrics module for training load calculations.

pub mod analytics;
pub mod smoothing;

pub use smoothing::{ExponentialFilter, SeriesPoint};

// Re-export key analytics types for convenience
pub use analytics::{
    AnalyticsError, AnalyticsResult, BalanceBand, DailyLoad, DataSufficiency, LoadReport,
    LoadRules, SeriesKind, Severity, TrainingLoadCalculator, TrainingStatus,
};
