//! CSV export of the daily series.

use crate::export::types::ExportError;
use crate::metrics::analytics::training_load::{LoadReport, SeriesKind};
use std::io::Write;

/// Export every calendar day of a report as one CSV row.
///
/// Columns: `date` followed by each series in [`SeriesKind::ALL`] order.
pub fn export_csv(report: &LoadReport) -> Result<String, ExportError> {
    if report.is_empty() {
        return Err(ExportError::NoData);
    }

    let mut output = Vec::new();

    // Write header
    let columns: Vec<&str> = SeriesKind::ALL.iter().map(SeriesKind::column).collect();
    writeln!(output, "date,{}", columns.join(","))
        .map_err(|e| ExportError::WriteFailed(e.to_string()))?;

    let series: Vec<Vec<f64>> = SeriesKind::ALL.iter().map(|&k| report.values(k)).collect();
    if let Some((kind, s)) = SeriesKind::ALL
        .iter()
        .zip(&series)
        .find(|(_, s)| s.len() != report.len())
    {
        return Err(ExportError::WriteFailed(format!(
            "{} series has {} points for {} days",
            kind.label(),
            s.len(),
            report.len()
        )));
    }

    // Write data rows
    for (i, day) in report.daily_load.iter().enumerate() {
        let values: Vec<String> = series.iter().map(|s| format!("{:.4}", s[i])).collect();
        writeln!(output, "{},{}", day.date.format("%Y-%m-%d"), values.join(","))
            .map_err(|e| ExportError::WriteFailed(e.to_string()))?;
    }

    String::from_utf8(output).map_err(|e| ExportError::WriteFailed(e.to_string()))
}

/// Export a report to CSV and write to a file.
pub fn export_csv_to_file(report: &LoadReport, path: &std::path::Path) -> Result<(), ExportError> {
    let content = export_csv(report)?;
    std::fs::write(path, content)?;
    Ok(())
}
