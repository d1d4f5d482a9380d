//! Unit tests for exponential smoothing.

use chrono::NaiveDate;
use liftload::metrics::analytics::DailyLoad;
use liftload::metrics::ExponentialFilter;

fn dense(loads: &[f64]) -> Vec<DailyLoad> {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .iter_days()
        .zip(loads)
        .map(|(date, &load)| DailyLoad::new(date, load))
        .collect()
}

#[test]
fn test_seed_law_for_any_time_constant() {
    for t in [1.0, 7.0, 28.0, 42.0, 90.5] {
        let filter = ExponentialFilter::new(t).unwrap();
        let smoothed = filter.apply(&dense(&[5000.0, 10.0]));
        assert_eq!(smoothed[0].value, 0.0);
    }
}

#[test]
fn test_two_passes_share_no_state() {
    let input = dense(&[300.0, 0.0, 450.0, 0.0, 0.0, 600.0]);
    let chronic = ExponentialFilter::new(42.0).unwrap();
    let acute = ExponentialFilter::new(7.0).unwrap();

    let first = chronic.apply(&input);
    let _ = acute.apply(&input);
    let second = chronic.apply(&input);

    assert_eq!(first, second);
}

#[test]
fn test_time_constant_one_tracks_load() {
    // λ = 1 follows the load exactly after the seed day
    let filter = ExponentialFilter::new(1.0).unwrap();
    let smoothed = filter.apply(&dense(&[9.0, 4.0, 0.0, 7.0]));
    let values: Vec<f64> = smoothed.iter().map(|p| p.value).collect();
    assert_eq!(values, vec![0.0, 4.0, 0.0, 7.0]);
}

#[test]
fn test_rest_days_decay() {
    let filter = ExponentialFilter::new(7.0).unwrap();
    let smoothed = filter.apply(&dense(&[0.0, 700.0, 0.0, 0.0]));

    assert!((smoothed[1].value - 100.0).abs() < 1e-9);
    assert!(smoothed[2].value < smoothed[1].value);
    assert!((smoothed[3].value - 100.0 * (6.0 / 7.0) * (6.0 / 7.0)).abs() < 1e-9);
}
