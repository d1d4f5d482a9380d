//! Training load analytics.
//!
//! This module provides the load pipeline from workout entries to status:
//! - Daily load aggregation and calendar densification
//! - Balance (recovery) and ideal-balance reference curves
//! - Status classification and data-sufficiency check
//! - The end-to-end [`TrainingLoadCalculator`]

pub mod balance;
pub mod daily_load;
pub mod error;
pub mod status;
pub mod training_load;

// Re-exports for convenience
pub use balance::{calculate_balance, calculate_reference};
pub use daily_load::{aggregate_daily_load, densify, DailyLoad, LoadRules};
pub use error::{AnalyticsError, AnalyticsResult};
pub use status::{classify, BalanceBand, DataSufficiency, Severity, TrainingStatus};
pub use training_load::{LoadReport, SeriesKind, TrainingLoadCalculator};
