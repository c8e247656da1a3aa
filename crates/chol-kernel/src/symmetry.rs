//! Exact symmetry validation.

use chol_core::{Matrix32, N};

/// Returns the first `(row, col)` with `row < col` and `a[row][col] != a[col][row]`.
///
/// Pairs are scanned row by row over the strict upper triangle. Comparison is
/// exact; a NaN off-diagonal entry never equals its mirror.
pub fn first_asymmetry(a: &Matrix32) -> Option<(usize, usize)> {
    (0..N)
        .flat_map(|row| (row + 1..N).map(move |col| (row, col)))
        .find(|&(row, col)| a.get(row, col) != a.get(col, row))
}

/// Whether `a[i][j] == a[j][i]` holds for every pair.
pub fn is_symmetric(a: &Matrix32) -> bool {
    first_asymmetry(a).is_none()
}
