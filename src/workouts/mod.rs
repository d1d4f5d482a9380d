//! Workout log input.

pub mod parser_csv;
pub mod types;

pub use parser_csv::{parse_records, parse_workout_log, RecordTable};
pub use types::{RawRecord, WorkoutEntry, WorkoutParseError};
