//! Daily load aggregation and calendar densification.
//!
//! Load for a set is `weight × reps`, with the weight multiplied for
//! single-limb movements since those are logged once but performed per side.
//! Loads are summed per calendar day, then expanded to one entry per day
//! between the first and last training day with rest days at 0.

use crate::metrics::analytics::error::{AnalyticsError, AnalyticsResult};
use crate::storage::config::AnalysisSettings;
use crate::workouts::types::WorkoutEntry;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Total training load for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyLoad {
    /// Calendar day
    pub date: NaiveDate,
    /// Summed tonnage for the day
    pub load: f64,
}

impl DailyLoad {
    /// Create a new daily load.
    pub fn new(date: NaiveDate, load: f64) -> Self {
        Self { date, load }
    }
}

/// Rules for turning a logged set into load.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadRules {
    /// Lowercased keyword fragments
    keywords: Vec<String>,
    multiplier: f64,
}

impl LoadRules {
    /// Create rules from keywords (matched case-insensitively) and a weight multiplier.
    pub fn new<I, S>(keywords: I, multiplier: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
            multiplier,
        }
    }

    /// Rules from analysis settings.
    pub fn from_settings(settings: &AnalysisSettings) -> Self {
        Self::new(&settings.unilateral_keywords, settings.unilateral_multiplier)
    }

    /// Whether the exercise is a single-limb movement.
    pub fn is_unilateral(&self, exercise: &str) -> bool {
        let exercise = exercise.to_lowercase();
        self.keywords.iter().any(|k| exercise.contains(k.as_str()))
    }

    /// Load contributed by one set.
    ///
    /// A set whose load overflows is malformed and counts as 0.
    pub fn entry_load(&self, entry: &WorkoutEntry) -> f64 {
        let weight = if self.is_unilateral(&entry.exercise) {
            entry.weight * self.multiplier
        } else {
            entry.weight
        };

        let load = weight * f64::from(entry.reps);
        if load.is_finite() {
            load
        } else {
            tracing::warn!(
                date = %entry.date,
                exercise = %entry.exercise,
                "Set load overflows, counting as 0"
            );
            0.0
        }
    }
}

impl Default for LoadRules {
    fn default() -> Self {
        Self::from_settings(&AnalysisSettings::default())
    }
}

/// Sum load per calendar day, ordered by date.
///
/// Days without entries are absent from the result.
pub fn aggregate_daily_load(entries: &[WorkoutEntry], rules: &LoadRules) -> Vec<DailyLoad> {
    let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();

    for entry in entries {
        *by_date.entry(entry.date).or_insert(0.0) += rules.entry_load(entry);
    }

    by_date
        .into_iter()
        .map(|(date, load)| DailyLoad::new(date, load))
        .collect()
}

/// Expand a date-sorted daily load series to every calendar day in its range.
///
/// Fails on an empty series, since there is no range to expand, and on a
/// series that is not strictly ascending by date.
pub fn densify(daily: &[DailyLoad]) -> AnalyticsResult<Vec<DailyLoad>> {
    let (first, last) = match (daily.first(), daily.last()) {
        (Some(first), Some(last)) => (first.date, last.date),
        _ => {
            return Err(AnalyticsError::InsufficientData(
                "At least one training day is required".to_string(),
            ))
        }
    };

    if let Some(pair) = daily.windows(2).find(|w| w[0].date >= w[1].date) {
        return Err(AnalyticsError::InvalidInput(format!(
            "Daily loads must be in ascending date order ({} then {})",
            pair[0].date, pair[1].date
        )));
    }

    let mut observed = daily.iter().peekable();
    let dense: Vec<DailyLoad> = first
        .iter_days()
        .take_while(|date| *date <= last)
        .map(|date| {
            let load = observed
                .next_if(|day| day.date == date)
                .map_or(0.0, |day| day.load);
            DailyLoad::new(date, load)
        })
        .collect();

    tracing::debug!(
        training_days = daily.len(),
        calendar_days = dense.len(),
        "Densified {} to {}",
        first,
        last
    );

    Ok(dense)
}
