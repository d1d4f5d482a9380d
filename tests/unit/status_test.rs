//! Unit tests for status classification.

use liftload::metrics::analytics::{classify, BalanceBand, DataSufficiency, TrainingStatus};

#[test]
fn test_classification_example() {
    // L = 100, B = -15, threshold = -10
    assert_eq!(classify(100.0, -15.0, -0.1).unwrap(), TrainingStatus::OvertrainingRisk);
}

#[test]
fn test_outcomes_are_exhaustive() {
    let band = BalanceBand::from_fitness(80.0, -0.1);
    for b in [-100.0, -8.0001, -8.0, -4.0, 0.0, 0.0001, 50.0] {
        let status = band.classify(b).unwrap();
        let expected = if b < band.lower {
            TrainingStatus::OvertrainingRisk
        } else if b > 0.0 {
            TrainingStatus::Undertraining
        } else {
            TrainingStatus::Optimal
        };
        assert_eq!(status, expected, "balance {b}");
        assert_eq!(status == TrainingStatus::Optimal, band.contains(b));
    }
}

#[test]
fn test_sufficiency_example() {
    let check = DataSufficiency::check(20, 42.0);
    assert!(!check.is_sufficient());
    assert!(check.message().is_some());
}

#[test]
fn test_sufficiency_fractional_time_constant() {
    assert_eq!(
        DataSufficiency::check(30, 30.5),
        DataSufficiency::Insufficient {
            days: 30,
            required: 31
        }
    );
    assert!(DataSufficiency::check(31, 30.5).is_sufficient());
}
