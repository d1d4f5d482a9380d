//! Export module for load reports.

pub mod exporter_csv;
pub mod exporter_json;
pub mod exporter_text;
pub mod types;

pub use exporter_csv::{export_csv, export_csv_to_file};
pub use exporter_json::export_json;
pub use exporter_text::render_summary;
pub use types::{ExportError, ExportFormat};
