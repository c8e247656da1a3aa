//! JSON file format for `decompose` inputs and outputs: an array of 32 rows,
//! each an array of 32 numbers.

use chol_core::errors::{CholError, ErrorInfo};
use chol_core::{Matrix32, N};

fn map_err(err: serde_json::Error, code: &str) -> CholError {
    CholError::Serde(ErrorInfo::new(code, err.to_string()))
}

pub fn matrix_to_json(matrix: &Matrix32) -> Result<String, CholError> {
    let rows: Vec<Vec<f64>> = (0..N).map(|row| matrix.row(row).to_vec()).collect();
    serde_json::to_string_pretty(&rows).map_err(|err| map_err(err, "matrix-serialize"))
}

/// Parses a matrix, reporting the offending row on shape mismatch.
pub fn matrix_from_json(json: &str) -> Result<Matrix32, CholError> {
    let rows: Vec<Vec<f64>> =
        serde_json::from_str(json).map_err(|err| map_err(err, "matrix-deserialize"))?;
    Matrix32::from_rows(&rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chol_kernel::fixtures;

    #[test]
    fn random_spd_survives_json_bit_exact() {
        let matrix = fixtures::random_spd(11);
        let json = matrix_to_json(&matrix).unwrap();
        assert_eq!(matrix_from_json(&json).unwrap(), matrix);
    }

    #[test]
    fn short_row_reports_position() {
        let mut rows = vec![vec![0.0; N]; N];
        rows[4].pop();
        let json = serde_json::to_string(&rows).unwrap();
        let err = matrix_from_json(&json).unwrap_err();
        let info = err.info();
        assert_eq!(info.code, "matrix-shape");
        assert_eq!(info.context.get("row").map(String::as_str), Some("4"));
        assert_eq!(info.context.get("cols").map(String::as_str), Some("31"));
    }

    #[test]
    fn non_numeric_payload_is_a_serde_error() {
        let err = matrix_from_json("[[\"a\"]]").unwrap_err();
        assert!(matches!(err, CholError::Serde(_)));
        assert_eq!(err.info().code, "matrix-deserialize");
    }
}
