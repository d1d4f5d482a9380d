//! Plain-text report summary.

use crate::export::types::ExportError;
use crate::metrics::analytics::training_load::{LoadReport, SeriesKind};
use std::fmt::Write;

/// Render a short human-readable summary of the final day.
pub fn render_summary(report: &LoadReport) -> Result<String, ExportError> {
    let (Some(start), Some(end)) = (report.start_date(), report.end_date()) else {
        return Err(ExportError::NoData);
    };

    let mut out = String::new();
    let w = |e: std::fmt::Error| ExportError::WriteFailed(e.to_string());

    writeln!(out, "Period: {start} to {end} ({} days)", report.len()).map_err(w)?;
    writeln!(out).map_err(w)?;

    let finals = [
        (SeriesKind::Fitness, report.final_chronic()),
        (SeriesKind::Stress, report.final_acute()),
        (SeriesKind::Recovery, report.final_balance()),
        (
            SeriesKind::GoldilocksZone,
            report.reference.last().map_or(0.0, |p| p.value),
        ),
        (
            SeriesKind::Load,
            report.daily_load.last().map_or(0.0, |d| d.load),
        ),
    ];
    for (kind, value) in finals {
        writeln!(out, "{:<16} {:>12.2}", kind.label(), value).map_err(w)?;
    }

    writeln!(
        out,
        "{:<16} {:>12.2} .. {:.2}",
        "Optimal band", report.band.lower, report.band.upper
    )
    .map_err(w)?;
    writeln!(out).map_err(w)?;

    writeln!(out, "Status: {}", report.status).map_err(w)?;
    writeln!(out, "{}", report.status.message()).map_err(w)?;

    if let Some(message) = report.sufficiency.message() {
        writeln!(out, "{message}").map_err(w)?;
    }

    Ok(out)
}
