//! Training load calculations (fitness/stress/recovery).
//!
//! Implements the Performance Management Chart model over lifting tonnage:
//! - Fitness (CTL): 42-day exponentially weighted average of daily load
//! - Stress (ATL): 7-day exponentially weighted average of daily load
//! - Recovery (TSB): Fitness - Stress
//! - Goldilocks Zone: ideal recovery at -0.73% of Fitness
//!
//! Both averages run over a calendar-complete series, so rest days pull them
//! down. Every derived series has one point per calendar day and index `i`
//! refers to the same day in all of them.

use crate::metrics::analytics::balance::{calculate_balance, calculate_reference};
use crate::metrics::analytics::daily_load::{aggregate_daily_load, densify, DailyLoad, LoadRules};
use crate::metrics::analytics::error::{AnalyticsError, AnalyticsResult};
use crate::metrics::analytics::status::{BalanceBand, DataSufficiency, TrainingStatus};
use crate::metrics::smoothing::{ExponentialFilter, SeriesPoint};
use crate::storage::config::{AnalysisSettings, AppConfig, InputSettings};
use crate::workouts::parser_csv::parse_workout_log;
use crate::workouts::types::WorkoutEntry;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The five plotted series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    /// Long-horizon average
    Fitness,
    /// Short-horizon average
    Stress,
    /// Fitness minus stress
    Recovery,
    /// Ideal recovery
    GoldilocksZone,
    /// Raw daily tonnage
    Load,
}

impl SeriesKind {
    /// All series in display order.
    pub const ALL: [SeriesKind; 5] = [
        SeriesKind::Load,
        SeriesKind::Fitness,
        SeriesKind::Stress,
        SeriesKind::Recovery,
        SeriesKind::GoldilocksZone,
    ];

    /// Legend label.
    pub fn label(&self) -> &'static str {
        match self {
            SeriesKind::Fitness => "Fitness",
            SeriesKind::Stress => "Stress",
            SeriesKind::Recovery => "Recovery",
            SeriesKind::GoldilocksZone => "Goldilocks Zone",
            SeriesKind::Load => "Load",
        }
    }

    /// Legend definition.
    pub fn description(&self) -> &'static str {
        match self {
            SeriesKind::Fitness => {
                "Fitness: an exponentially weighted 42-day average of your training load in \
                 tonnage, your so-called chronic training load."
            }
            SeriesKind::Stress => {
                "Stress: an exponentially weighted 7-day average of your training load in \
                 tonnage, your so-called acute training load."
            }
            SeriesKind::Recovery => {
                "Recovery: simply your Stress subtracted from your Fitness, producing a measure \
                 of your training balance and recovery."
            }
            SeriesKind::GoldilocksZone => {
                "Goldilocks Zone: This green band represents the ideal training balance to \
                 create sustainable increases in Fitness."
            }
            SeriesKind::Load => "Load: Tonnage for that day.",
        }
    }

    /// Column name used by exporters.
    pub fn column(&self) -> &'static str {
        match self {
            SeriesKind::Fitness => "fitness",
            SeriesKind::Stress => "stress",
            SeriesKind::Recovery => "recovery",
            SeriesKind::GoldilocksZone => "goldilocks",
            SeriesKind::Load => "load",
        }
    }
}

/// Result of analysing a workout log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadReport {
    /// Tonnage per calendar day, rest days at 0
    pub daily_load: Vec<DailyLoad>,
    /// Long-horizon average (CTL)
    pub chronic: Vec<SeriesPoint>,
    /// Short-horizon average (ATL)
    pub acute: Vec<SeriesPoint>,
    /// Chronic minus acute (TSB)
    pub balance: Vec<SeriesPoint>,
    /// Ideal balance reference
    pub reference: Vec<SeriesPoint>,
    /// Optimal band for the final day
    pub band: BalanceBand,
    /// Status from the final day
    pub status: TrainingStatus,
    /// Whether the history is long enough
    pub sufficiency: DataSufficiency,
}

impl LoadReport {
    /// Number of calendar days covered.
    pub fn len(&self) -> usize {
        self.daily_load.len()
    }

    pub fn is_empty(&self) -> bool {
        self.daily_load.is_empty()
    }

    /// First calendar day.
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.daily_load.first().map(|d| d.date)
    }

    /// Last calendar day.
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.daily_load.last().map(|d| d.date)
    }

    pub fn final_chronic(&self) -> f64 {
        self.chronic.last().map_or(0.0, |p| p.value)
    }

    pub fn final_acute(&self) -> f64 {
        self.acute.last().map_or(0.0, |p| p.value)
    }

    pub fn final_balance(&self) -> f64 {
        self.balance.last().map_or(0.0, |p| p.value)
    }

    /// Values of one series, in date order.
    pub fn values(&self, kind: SeriesKind) -> Vec<f64> {
        match kind {
            SeriesKind::Load => self.daily_load.iter().map(|d| d.load).collect(),
            SeriesKind::Fitness => point_values(&self.chronic),
            SeriesKind::Stress => point_values(&self.acute),
            SeriesKind::Recovery => point_values(&self.balance),
            SeriesKind::GoldilocksZone => point_values(&self.reference),
        }
    }
}

fn point_values(points: &[SeriesPoint]) -> Vec<f64> {
    points.iter().map(|p| p.value).collect()
}

/// Training load calculator.
#[derive(Debug, Clone)]
pub struct TrainingLoadCalculator {
    analysis: AnalysisSettings,
    input: InputSettings,
}

impl TrainingLoadCalculator {
    /// Create with default constants (42/7 day).
    pub fn new() -> Self {
        Self::from_config(&AppConfig::default())
    }

    /// Create from application configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            analysis: config.analysis.clone(),
            input: config.input.clone(),
        }
    }

    /// Create with custom time constants and otherwise default settings.
    pub fn with_constants(chronic_days: f64, acute_days: f64) -> Self {
        let mut calc = Self::new();
        calc.analysis.chronic_days = chronic_days;
        calc.analysis.acute_days = acute_days;
        calc
    }

    pub fn analysis(&self) -> &AnalysisSettings {
        &self.analysis
    }

    /// Analyse a delimited workout log.
    pub fn analyze(&self, content: &str) -> AnalyticsResult<LoadReport> {
        let entries = parse_workout_log(content, &self.input)?;
        self.analyze_entries(&entries)
    }

    /// Analyse already parsed workout entries.
    pub fn analyze_entries(&self, entries: &[WorkoutEntry]) -> AnalyticsResult<LoadReport> {
        if entries.is_empty() {
            return Err(AnalyticsError::InsufficientData(
                "Workout log has no entries".to_string(),
            ));
        }

        let chronic_filter = ExponentialFilter::new(self.analysis.chronic_days)?;
        let acute_filter = ExponentialFilter::new(self.analysis.acute_days)?;

        let rules = LoadRules::from_settings(&self.analysis);
        let daily = aggregate_daily_load(entries, &rules);
        let daily_load = densify(&daily)?;

        if let Some(day) = daily_load.iter().find(|d| !d.load.is_finite()) {
            return Err(AnalyticsError::InvalidInput(format!(
                "Total load on {} is too large to analyse",
                day.date
            )));
        }

        let chronic = chronic_filter.apply(&daily_load);
        let acute = acute_filter.apply(&daily_load);
        let balance = calculate_balance(&chronic, &acute)?;
        let reference = calculate_reference(&chronic, self.analysis.ideal_balance_fraction);

        let (final_chronic, final_balance) = match (chronic.last(), balance.last()) {
            (Some(c), Some(b)) => (c.value, b.value),
            _ => {
                return Err(AnalyticsError::InsufficientData(
                    "No calendar days to classify".to_string(),
                ))
            }
        };

        let band = BalanceBand::from_fitness(final_chronic, self.analysis.balance_band_fraction);
        let status = band.classify(final_balance)?;
        let sufficiency = DataSufficiency::check(daily_load.len(), self.analysis.chronic_days);

        tracing::info!(
            days = daily_load.len(),
            fitness = final_chronic,
            recovery = final_balance,
            "Training status: {}",
            status
        );

        Ok(LoadReport {
            daily_load,
            chronic,
            acute,
            balance,
            reference,
            band,
            status,
            sufficiency,
        })
    }
}

impl Default for TrainingLoadCalculator {
    fn default() -> Self {
        Self::new()
    }
}
