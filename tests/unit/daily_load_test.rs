//! Unit tests for daily load aggregation and densification.

use chrono::NaiveDate;
use liftload::metrics::analytics::{aggregate_daily_load, densify, DailyLoad, LoadRules};
use liftload::WorkoutEntry;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_unilateral_contribution_doubles_weight() {
    let rules = LoadRules::default();
    for name in ["Single Leg Press", "single arm row", "SINGLE-LEG RDL"] {
        let entry = WorkoutEntry::new(date(2024, 1, 1), name, 40.0, 10);
        let daily = aggregate_daily_load(&[entry], &rules);
        assert_eq!(daily[0].load, 2.0 * 40.0 * 10.0, "{name}");
    }
}

#[test]
fn test_zero_reps_contribute_nothing() {
    let rules = LoadRules::default();
    let entries = [
        WorkoutEntry::new(date(2024, 1, 1), "Squat", 100.0, 0),
        WorkoutEntry::new(date(2024, 1, 1), "Bench", 0.0, 10),
    ];

    let daily = aggregate_daily_load(&entries, &rules);
    assert_eq!(daily, vec![DailyLoad::new(date(2024, 1, 1), 0.0)]);
}

#[test]
fn test_dense_length_and_spacing() {
    let rules = LoadRules::default();
    let entries = [
        WorkoutEntry::new(date(2023, 12, 30), "Squat", 100.0, 5),
        WorkoutEntry::new(date(2024, 1, 10), "Squat", 100.0, 5),
        WorkoutEntry::new(date(2024, 1, 4), "Deadlift", 140.0, 3),
    ];

    let daily = aggregate_daily_load(&entries, &rules);
    let dense = densify(&daily).unwrap();

    let span = (date(2024, 1, 10) - date(2023, 12, 30)).num_days() as usize + 1;
    assert_eq!(dense.len(), span);
    for pair in dense.windows(2) {
        assert_eq!((pair[1].date - pair[0].date).num_days(), 1);
    }

    let total: f64 = dense.iter().map(|d| d.load).sum();
    assert_eq!(total, 500.0 + 500.0 + 420.0);
    assert_eq!(dense.iter().filter(|d| d.load > 0.0).count(), 3);
}
