// ==========================================
// Análise Full - export boundary
// ==========================================
// The consolidated result is flat serde records; the workbook
// renderer is one consumer of that shape.
// ==========================================

pub mod workbook;

pub use workbook::{ExportError, WorkbookExporter};

use crate::domain::replenishment::ConsolidatedReport;

/// Serialize the consolidated report as JSON, the stable flat
/// form external collaborators consume.
pub fn report_to_json(report: &ConsolidatedReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
