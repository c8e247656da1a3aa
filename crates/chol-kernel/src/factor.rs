//! Column-by-column Cholesky recurrence with lazy positive-definiteness check.

use chol_core::{Matrix32, N};
use serde::{Deserialize, Serialize};

/// First pivot that was not strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PivotFailure {
    /// Zero-based column of the failing pivot.
    pub pivot: usize,
    /// Value of `a[j][j] − Σ l[j][k]²` at that column.
    pub value: f64,
}

/// Computes the lower factor of a matrix already known to be symmetric.
///
/// Only the lower triangle of `a` is read. `l` is zeroed first, so its strict
/// upper triangle is exactly zero. For each column `j` the pivot
/// `s = a[j][j] − Σ_{k<j} l[j][k]²` must be strictly positive (NaN is not);
/// otherwise the loop stops at that column and columns `j..` of `l` stay zero.
pub fn factor_lower(a: &Matrix32, l: &mut Matrix32) -> Result<(), PivotFailure> {
    l.fill_zero();
    for j in 0..N {
        let row_j = *l.row(j);
        let pivot = row_j[..j]
            .iter()
            .fold(a.get(j, j), |acc, &value| acc - value * value);
        if pivot <= 0.0 || pivot.is_nan() {
            return Err(PivotFailure { pivot: j, value: pivot });
        }
        let diag = pivot.sqrt();
        l.set(j, j, diag);

        for i in j + 1..N {
            let sum = l.row(i)[..j]
                .iter()
                .zip(&row_j[..j])
                .fold(a.get(i, j), |acc, (&lik, &ljk)| acc - lik * ljk);
            l.set(i, j, sum / diag);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_matrix_gives_square_roots() {
        let a = Matrix32::from_fn(|row, col| if row == col { (row + 1) as f64 } else { 0.0 });
        let mut l = Matrix32::zeros();
        factor_lower(&a, &mut l).unwrap();
        for j in 0..N {
            assert_eq!(l.get(j, j), ((j + 1) as f64).sqrt());
        }
    }

    #[test]
    fn failure_leaves_trailing_columns_zero() {
        let mut a = Matrix32::identity();
        a.set(3, 3, 0.0);
        let mut l = Matrix32::from_fn(|_, _| 7.0);
        let failure = factor_lower(&a, &mut l).unwrap_err();
        assert_eq!(failure, PivotFailure { pivot: 3, value: 0.0 });
        for row in 0..N {
            for col in 3..N {
                assert_eq!(l.get(row, col), 0.0);
            }
        }
        assert_eq!(l.get(2, 2), 1.0);
    }

    #[test]
    fn nan_pivot_is_rejected() {
        let mut a = Matrix32::identity();
        a.set(0, 0, f64::NAN);
        let mut l = Matrix32::zeros();
        let failure = factor_lower(&a, &mut l).unwrap_err();
        assert_eq!(failure.pivot, 0);
        assert!(failure.value.is_nan());
    }

    #[test]
    fn pivot_lost_mid_factorization() {
        // [[1, 1], [1, 1]] in the top-left corner is only semi-definite.
        let mut a = Matrix32::identity();
        a.set(0, 1, 1.0);
        a.set(1, 0, 1.0);
        let mut l = Matrix32::zeros();
        let failure = factor_lower(&a, &mut l).unwrap_err();
        assert_eq!(failure.pivot, 1);
        assert_eq!(failure.value, 0.0);
    }

    #[test]
    fn upper_triangle_is_never_read() {
        let mut a = Matrix32::identity();
        a.set(0, 5, 100.0);
        let mut l = Matrix32::zeros();
        factor_lower(&a, &mut l).unwrap();
        assert_eq!(l, Matrix32::identity());
    }
}
