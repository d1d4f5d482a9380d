//! Workout log types.
//!
//! A workout log is a delimited text file with one row per logged set:
//! `Date,Exercise,Weight,Reps`. Rows are first read into loosely typed
//! [`RawRecord`]s and then coerced into [`WorkoutEntry`] values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Column holding the calendar date of a set.
pub const DATE_COLUMN: &str = "Date";
/// Column holding the exercise label.
pub const EXERCISE_COLUMN: &str = "Exercise";
/// Column holding the lifted weight.
pub const WEIGHT_COLUMN: &str = "Weight";
/// Column holding the repetition count.
pub const REPS_COLUMN: &str = "Reps";

/// Columns every workout log must declare in its header row.
pub const REQUIRED_COLUMNS: [&str; 4] = [DATE_COLUMN, EXERCISE_COLUMN, WEIGHT_COLUMN, REPS_COLUMN];

/// One data row of a workout log, keyed by header name.
///
/// Values are trimmed. Fields that are empty, or missing because the row is
/// shorter than the header, are stored as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// 1-based line number in the source text
    pub line: u64,
    fields: HashMap<String, Option<String>>,
}

impl RawRecord {
    /// Build a record from header names and row values.
    ///
    /// Missing trailing values are padded with `None`, surplus values are dropped.
    pub fn from_row<'a, H, V>(line: u64, headers: H, values: V) -> Self
    where
        H: IntoIterator<Item = &'a str>,
        V: IntoIterator<Item = &'a str>,
    {
        let mut values = values.into_iter();
        let fields = headers
            .into_iter()
            .map(|header| {
                let value = values
                    .next()
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(str::to_string);
                (header.trim().to_string(), value)
            })
            .collect();

        Self { line, fields }
    }

    /// Get a field value, `None` if the column is unknown or the value absent.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).and_then(|v| v.as_deref())
    }

    /// Whether the header declared this column.
    pub fn has_column(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }

    /// Whether every field of the row is absent.
    pub fn is_blank(&self) -> bool {
        self.fields.values().all(Option::is_none)
    }
}

/// A single logged set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    /// Calendar day the set was performed
    pub date: NaiveDate,
    /// Free-text exercise name
    pub exercise: String,
    /// Weight lifted (non-negative)
    pub weight: f64,
    /// Repetitions performed
    pub reps: u32,
}

impl WorkoutEntry {
    /// Create a new entry.
    pub fn new(date: NaiveDate, exercise: impl Into<String>, weight: f64, reps: u32) -> Self {
        Self {
            date,
            exercise: exercise.into(),
            weight,
            reps,
        }
    }
}

/// Errors raised while reading a workout log.
#[derive(Debug, Error)]
pub enum WorkoutParseError {
    /// Underlying delimited-text reader failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Header row lacks a required column
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A row has no date
    #[error("Line {line}: missing date")]
    MissingDate { line: u64 },

    /// A row has a date none of the configured formats accept
    #[error("Line {line}: invalid date '{value}'")]
    InvalidDate { line: u64, value: String },
}
