//! LiftLoad - Training Load Analysis for Strength Workouts
//!
//! Reads a workout log (date, exercise, weight, reps), turns it into daily
//! tonnage over every calendar day, and derives fitness (chronic load),
//! stress (acute load), recovery (their difference) and an ideal-recovery
//! reference curve, plus a status for the most recent day.

pub mod export;
pub mod metrics;
pub mod storage;
pub mod workouts;

// Re-export commonly used types
pub use metrics::analytics::{LoadReport, TrainingLoadCalculator, TrainingStatus};
pub use storage::config::AppConfig;
pub use workouts::types::WorkoutEntry;
