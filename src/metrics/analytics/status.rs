//! Training status classification.
//!
//! Only the most recent day participates: the final balance is compared with a
//! band running from a fraction of the final fitness up to zero.

use crate::metrics::analytics::error::{AnalyticsError, AnalyticsResult};
use serde::{Deserialize, Serialize};

/// Training status from the final recovery value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingStatus {
    /// Recovery below the band: training too hard.
    OvertrainingRisk,
    /// Recovery above zero: training too little.
    Undertraining,
    /// Recovery inside the band.
    Optimal,
}

/// How prominently a banner should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Danger,
}

/// Optimal recovery band for the final day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceBand {
    /// Lower edge (never above zero)
    pub lower: f64,
    /// Upper edge (always zero)
    pub upper: f64,
}

impl BalanceBand {
    /// Band for a final fitness value.
    ///
    /// The lower edge is clamped at zero, so zero or negative fitness collapses
    /// the band to a single point instead of inverting it.
    pub fn from_fitness(final_chronic: f64, fraction: f64) -> Self {
        Self {
            lower: (fraction * final_chronic).min(0.0),
            upper: 0.0,
        }
    }

    /// Classify a final recovery value against the band.
    ///
    /// A non-finite recovery value or band edge has no meaningful status.
    pub fn classify(&self, final_balance: f64) -> AnalyticsResult<TrainingStatus> {
        if !(final_balance.is_finite() && self.lower.is_finite() && self.upper.is_finite()) {
            return Err(AnalyticsError::InvalidInput(format!(
                "Cannot classify recovery {final_balance} against band {}..{}",
                self.lower, self.upper
            )));
        }

        Ok(if final_balance < self.lower {
            TrainingStatus::OvertrainingRisk
        } else if final_balance > self.upper {
            TrainingStatus::Undertraining
        } else {
            TrainingStatus::Optimal
        })
    }

    /// Whether a value lies inside the band (edges included).
    pub fn contains(&self, value: f64) -> bool {
        (self.lower..=self.upper).contains(&value)
    }
}

/// Classify the final day from fitness, recovery and the band fraction.
pub fn classify(
    final_chronic: f64,
    final_balance: f64,
    band_fraction: f64,
) -> AnalyticsResult<TrainingStatus> {
    BalanceBand::from_fitness(final_chronic, band_fraction).classify(final_balance)
}

impl TrainingStatus {
    /// Banner severity.
    pub fn severity(&self) -> Severity {
        match self {
            TrainingStatus::Optimal => Severity::Success,
            TrainingStatus::OvertrainingRisk | TrainingStatus::Undertraining => Severity::Danger,
        }
    }

    /// Banner text.
    pub fn message(&self) -> &'static str {
        match self {
            TrainingStatus::OvertrainingRisk => {
                "Warning: Your Recovery line is below the computed Goldilocks Zone. \
                 You may be training too hard and are at risk of overtraining."
            }
            TrainingStatus::Undertraining => {
                "Warning: Your Recovery line is above the Goldilocks Zone. \
                 Unless you are intentionally in a deload, you may be training too little."
            }
            TrainingStatus::Optimal => {
                "Congratulations! Your Recovery line is inside the Goldilocks Zone. \
                 Your training is optimal."
            }
        }
    }
}

impl std::fmt::Display for TrainingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrainingStatus::OvertrainingRisk => write!(f, "Overtraining risk"),
            TrainingStatus::Undertraining => write!(f, "Undertraining"),
            TrainingStatus::Optimal => write!(f, "Optimal"),
        }
    }
}

/// Whether the series is long enough for the fitness curve to be meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DataSufficiency {
    Sufficient,
    Insufficient { days: usize, required: usize },
}

impl DataSufficiency {
    /// Check a series length against the fitness time constant.
    pub fn check(days: usize, chronic_days: f64) -> Self {
        if (days as f64) < chronic_days {
            DataSufficiency::Insufficient {
                days,
                required: chronic_days.ceil() as usize,
            }
        } else {
            DataSufficiency::Sufficient
        }
    }

    pub fn is_sufficient(&self) -> bool {
        matches!(self, DataSufficiency::Sufficient)
    }

    /// Banner text, `None` when no warning is needed.
    pub fn message(&self) -> Option<String> {
        match self {
            DataSufficiency::Sufficient => None,
            DataSufficiency::Insufficient { required, .. } => Some(format!(
                "Warning: You have less than {required} days of data. The graph may not be accurate."
            )),
        }
    }

    pub fn severity(&self) -> Option<Severity> {
        match self {
            DataSufficiency::Sufficient => None,
            DataSufficiency::Insufficient { .. } => Some(Severity::Warning),
        }
    }
}
