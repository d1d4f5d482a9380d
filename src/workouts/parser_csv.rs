//! Delimited workout log parser.
//!
//! Reads a header row followed by one row per logged set. Fields are split on a
//! single delimiter with no quoting or escaping: a delimiter inside a value
//! splits that value. Short rows are padded with absent fields and blank lines
//! are skipped.

use crate::storage::config::InputSettings;
use crate::workouts::types::{
    RawRecord, WorkoutEntry, WorkoutParseError, DATE_COLUMN, EXERCISE_COLUMN, REPS_COLUMN,
    REQUIRED_COLUMNS, WEIGHT_COLUMN,
};
use chrono::NaiveDate;

/// Header row plus the data rows beneath it, in input order.
#[derive(Debug, Clone, Default)]
pub struct RecordTable {
    /// Trimmed header names
    pub headers: Vec<String>,
    /// Non-blank data rows
    pub records: Vec<RawRecord>,
}

impl RecordTable {
    /// Ensure the header declares every column of a workout log.
    pub fn require_columns(&self) -> Result<(), WorkoutParseError> {
        for column in REQUIRED_COLUMNS {
            if !self.headers.iter().any(|h| h == column) {
                return Err(WorkoutParseError::MissingColumn(column.to_string()));
            }
        }
        Ok(())
    }
}

/// Split delimited text into header-keyed records.
pub fn parse_records(content: &str, delimiter: u8) -> Result<RecordTable, WorkoutParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .quoting(false)
        .flexible(true)
        .has_headers(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        let line = row.position().map_or(0, |p| p.line());
        let record = RawRecord::from_row(line, headers.iter().map(String::as_str), row.iter());

        // Whitespace-only lines come through as a single empty field
        if record.is_blank() {
            continue;
        }
        records.push(record);
    }

    Ok(RecordTable { headers, records })
}

/// Parse a full workout log into typed entries, preserving row order.
pub fn parse_workout_log(
    content: &str,
    settings: &InputSettings,
) -> Result<Vec<WorkoutEntry>, WorkoutParseError> {
    let table = parse_records(content, settings.delimiter_byte())?;

    if table.headers.iter().all(|h| h.is_empty()) {
        return Ok(Vec::new());
    }
    table.require_columns()?;

    let entries = table
        .records
        .iter()
        .map(|record| to_entry(record, &settings.date_formats))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        rows = entries.len(),
        "Parsed workout log with {} entries",
        entries.len()
    );

    Ok(entries)
}

/// Coerce one raw record into a workout entry.
///
/// Malformed or absent weight and reps become 0. A missing or unparseable date
/// is an error since the date keys aggregation.
pub fn to_entry(record: &RawRecord, date_formats: &[String]) -> Result<WorkoutEntry, WorkoutParseError> {
    let line = record.line;

    let raw_date = record
        .get(DATE_COLUMN)
        .ok_or(WorkoutParseError::MissingDate { line })?;
    let date = parse_date(raw_date, date_formats).ok_or_else(|| WorkoutParseError::InvalidDate {
        line,
        value: raw_date.to_string(),
    })?;

    let weight = match record.get(WEIGHT_COLUMN) {
        None => 0.0,
        Some(raw) => match parse_leading_f64(raw) {
            Some(w) if w.is_finite() && w >= 0.0 => w,
            _ => {
                tracing::warn!(line, value = raw, "Malformed weight, counting as 0");
                0.0
            }
        },
    };

    let reps = match record.get(REPS_COLUMN) {
        None => 0,
        Some(raw) => parse_leading_u32(raw).unwrap_or_else(|| {
            tracing::warn!(line, value = raw, "Malformed reps, counting as 0");
            0
        }),
    };

    Ok(WorkoutEntry {
        date,
        exercise: record.get(EXERCISE_COLUMN).unwrap_or_default().to_string(),
        weight,
        reps,
    })
}

/// Parse a calendar date with the first matching format.
///
/// A trailing time component (`2024-01-01T07:30`, `2024-01-01 07:30`) is ignored.
pub fn parse_date(value: &str, formats: &[String]) -> Option<NaiveDate> {
    let value = value.trim();
    let day_part = value.split(['T', ' ']).next().unwrap_or(value);

    [value, day_part].into_iter().find_map(|candidate| {
        formats
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(candidate, fmt).ok())
    })
}

/// Parse the longest numeric prefix of `s` as a decimal number.
///
/// `"100kg"` → 100.0, `"2.5e1x"` → 25.0, `"kg"` → `None`.
pub fn parse_leading_f64(s: &str) -> Option<f64> {
    let bytes = s.trim_start().as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    std::str::from_utf8(&bytes[..end]).ok()?.parse().ok()
}

/// Parse the leading integer of `s` as a non-negative count.
///
/// `"10 reps"` → 10, `"5.5"` → 5. Negative or overflowing values are rejected.
pub fn parse_leading_u32(s: &str) -> Option<u32> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits = count_digits(rest.as_bytes());
    if digits == 0 {
        return None;
    }
    let value: u32 = rest[..digits].parse().ok()?;

    if negative && value != 0 {
        None
    } else {
        Some(value)
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
