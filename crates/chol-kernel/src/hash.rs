use chol_core::errors::{CholError, ErrorInfo};
use chol_core::{Matrix32, N};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::report::DecompositionReport;

fn hash_json<T: Serialize>(value: &T) -> Result<String, CholError> {
    let json = serde_json::to_vec(value)
        .map_err(|err| CholError::Serde(ErrorInfo::new("serialize", err.to_string())))?;
    let mut hasher = Sha256::new();
    hasher.update(json);
    Ok(format!("{:x}", hasher.finalize()))
}

/// Computes the canonical hash of an input matrix.
///
/// Entries are fed row-major as little-endian IEEE-754 bytes, so the digest
/// distinguishes `0.0` from `-0.0` and every NaN payload.
pub fn hash_matrix(matrix: &Matrix32) -> String {
    let mut hasher = Sha256::new();
    for row in 0..N {
        for value in matrix.row(row) {
            hasher.update(value.to_le_bytes());
        }
    }
    format!("{:x}", hasher.finalize())
}

/// Computes the canonical hash for a decomposition report.
///
/// The `report_hash` field is blanked before hashing so the stored hash can
/// be recomputed from a deserialized report.
pub fn hash_report(report: &DecompositionReport) -> Result<String, CholError> {
    let mut unhashed = report.clone();
    unhashed.report_hash.clear();
    hash_json(&unhashed)
}
