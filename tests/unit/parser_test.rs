//! Unit tests for workout log parsing.

use chrono::NaiveDate;
use liftload::storage::config::InputSettings;
use liftload::workouts::{parse_records, parse_workout_log, WorkoutParseError};

#[test]
fn test_parse_workout_log_entries() {
    let log = "Date,Exercise,Weight,Reps\n\
               2024-01-01,Squat,100,5\n\
               2024-01-01,Bench Press,80.5,8\n\
               2024-01-02,Pull Up,,12\n";

    let entries = parse_workout_log(log, &InputSettings::default()).unwrap();
    assert_eq!(entries.len(), 3);

    assert_eq!(entries[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    assert_eq!(entries[1].exercise, "Bench Press");
    assert_eq!(entries[1].weight, 80.5);
    assert_eq!(entries[1].reps, 8);

    // Absent weight counts as 0
    assert_eq!(entries[2].weight, 0.0);
    assert_eq!(entries[2].reps, 12);
}

#[test]
fn test_columns_in_any_order() {
    let log = "Reps,Weight,Exercise,Date\n5,100,Squat,2024-01-01\n";
    let entries = parse_workout_log(log, &InputSettings::default()).unwrap();

    assert_eq!(entries[0].exercise, "Squat");
    assert_eq!(entries[0].weight, 100.0);
    assert_eq!(entries[0].reps, 5);
}

#[test]
fn test_windows_line_endings() {
    let log = "Date,Exercise,Weight,Reps\r\n2024-01-01,Squat,100,5\r\n\r\n";
    let entries = parse_workout_log(log, &InputSettings::default()).unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].reps, 5);
}

#[test]
fn test_extra_columns_ignored() {
    let log = "Date,Exercise,Weight,Reps,Notes\n2024-01-01,Squat,100,5,felt good\n";
    let entries = parse_workout_log(log, &InputSettings::default()).unwrap();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_missing_column_rejected() {
    let log = "Date,Exercise,Reps\n2024-01-01,Squat,5\n";
    let err = parse_workout_log(log, &InputSettings::default()).unwrap_err();
    assert!(matches!(err, WorkoutParseError::MissingColumn(c) if c == "Weight"));
}

#[test]
fn test_invalid_date_reports_line() {
    let log = "Date,Exercise,Weight,Reps\n2024-01-01,Squat,100,5\nnot-a-date,Bench,80,5\n";
    let err = parse_workout_log(log, &InputSettings::default()).unwrap_err();

    match err {
        WorkoutParseError::InvalidDate { line, value } => {
            assert_eq!(line, 3);
            assert_eq!(value, "not-a-date");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_semicolon_delimiter() {
    let settings = InputSettings {
        delimiter: ';',
        ..InputSettings::default()
    };
    let log = "Date;Exercise;Weight;Reps\n2024-01-01;Squat;100,5;5\n";
    let entries = parse_workout_log(log, &settings).unwrap();

    // Comma decimal separators are not understood: the leading "100" is kept
    assert_eq!(entries[0].weight, 100.0);
}

#[test]
fn test_record_table_keeps_header_only() {
    let table = parse_records("Date,Exercise,Weight,Reps\n", b',').unwrap();
    assert_eq!(table.headers.len(), 4);
    assert!(table.records.is_empty());
    assert!(table.require_columns().is_ok());
}
