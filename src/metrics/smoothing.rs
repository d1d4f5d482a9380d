//! First-order exponential smoothing of daily load.
//!
//! `value[0] = 0` and `value[i] = value[i-1] × (1 − λ) + load[i] × λ` with
//! `λ = 1 / T`. The filter always starts cold: the first day's load is not
//! taken as a prior steady state.

use crate::metrics::analytics::daily_load::DailyLoad;
use crate::metrics::analytics::error::{AnalyticsError, AnalyticsResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A dated value of a derived series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Calendar day
    pub date: NaiveDate,
    /// Series value for that day
    pub value: f64,
}

impl SeriesPoint {
    /// Create a new point.
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// Exponential smoothing filter with a fixed time constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialFilter {
    time_constant: f64,
    lambda: f64,
}

impl ExponentialFilter {
    /// Create a filter with a time constant in days.
    pub fn new(time_constant: f64) -> AnalyticsResult<Self> {
        if !(time_constant.is_finite() && time_constant > 0.0) {
            return Err(AnalyticsError::InvalidInput(format!(
                "Time constant must be a positive number of days, got {time_constant}"
            )));
        }

        Ok(Self {
            time_constant,
            lambda: 1.0 / time_constant,
        })
    }

    /// Time constant in days.
    pub fn time_constant(&self) -> f64 {
        self.time_constant
    }

    /// Smoothing coefficient (1 / time constant).
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Advance the filter by one day.
    pub fn step(&self, previous: f64, load: f64) -> f64 {
        previous * (1.0 - self.lambda) + load * self.lambda
    }

    /// Smooth a calendar-complete daily load series.
    ///
    /// The output has one point per input day, with the same dates.
    pub fn apply(&self, series: &[DailyLoad]) -> Vec<SeriesPoint> {
        let mut smoothed = Vec::with_capacity(series.len());
        let mut value = 0.0;

        for (i, day) in series.iter().enumerate() {
            if i > 0 {
                value = self.step(value, day.load);
            }
            smoothed.push(SeriesPoint::new(day.date, value));
        }

        smoothed
    }
}
