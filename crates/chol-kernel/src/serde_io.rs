use chol_core::errors::{CholError, ErrorInfo};

use crate::report::DecompositionReport;

fn map_err(err: serde_json::Error, code: &str) -> CholError {
    CholError::Serde(ErrorInfo::new(code, err.to_string()))
}

/// Serialises a decomposition report to JSON.
pub fn report_to_json(report: &DecompositionReport) -> Result<String, CholError> {
    serde_json::to_string_pretty(report).map_err(|err| map_err(err, "report-serialize"))
}

/// Restores a decomposition report from JSON.
pub fn report_from_json(json: &str) -> Result<DecompositionReport, CholError> {
    serde_json::from_str(json).map_err(|err| map_err(err, "report-deserialize"))
}
