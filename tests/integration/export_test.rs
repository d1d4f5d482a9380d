//! Integration tests for report export.

use liftload::export::{export_csv, export_csv_to_file, export_json, render_summary, ExportFormat};
use liftload::metrics::analytics::{SeriesKind, TrainingLoadCalculator};
use liftload::LoadReport;

fn create_test_report() -> LoadReport {
    let log = "Date,Exercise,Weight,Reps\n\
               2024-02-01,Squat,100,5\n\
               2024-02-01,Split Squat,30,8\n\
               2024-02-04,Deadlift,140,3\n";
    TrainingLoadCalculator::new().analyze(log).unwrap()
}

#[test]
fn test_csv_columns_match_report() {
    let report = create_test_report();
    let csv = export_csv(&report).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), report.len() + 1);

    let header: Vec<&str> = lines[0].split(',').collect();
    assert_eq!(header[0], "date");
    for (column, kind) in header[1..].iter().zip(SeriesKind::ALL) {
        assert_eq!(*column, kind.column());
    }

    // 100*5 + 30*2*8
    let first: Vec<&str> = lines[1].split(',').collect();
    assert_eq!(first[0], "2024-02-01");
    assert_eq!(first[1], "980.0000");
}

#[test]
fn test_csv_written_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir
        .path()
        .join(format!("report.{}", ExportFormat::Csv.extension()));

    let report = create_test_report();
    export_csv_to_file(&report, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, export_csv(&report).unwrap());
}

#[test]
fn test_json_contains_all_series() {
    let json = export_json(&create_test_report()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    for key in ["daily_load", "chronic", "acute", "balance", "reference"] {
        assert_eq!(value[key].as_array().unwrap().len(), 4, "{key}");
    }
    assert!(value["band"]["lower"].as_f64().unwrap() <= 0.0);
}

#[test]
fn test_summary_reports_status_banner() {
    let report = create_test_report();
    let text = render_summary(&report).unwrap();

    assert!(text.contains(report.status.message()));
    assert!(text.contains("Goldilocks Zone"));
    assert!(text.contains("Optimal band"));
}
