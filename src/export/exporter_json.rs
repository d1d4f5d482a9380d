//! JSON export of a full report.

use crate::export::types::ExportError;
use crate::metrics::analytics::training_load::LoadReport;

/// Serialize a report as pretty-printed JSON.
pub fn export_json(report: &LoadReport) -> Result<String, ExportError> {
    if report.is_empty() {
        return Err(ExportError::NoData);
    }

    serde_json::to_string_pretty(report).map_err(|e| ExportError::WriteFailed(e.to_string()))
}
