use crate::errors::{CholError, ErrorInfo};

/// Fixed dimension of every matrix handled by the kernel.
pub const N: usize = 32;

/// Dense 32×32 matrix of `f64` stored row-major on the stack.
///
/// Entry `(row, col)` lives at `data[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix32 {
    data: [[f64; N]; N],
}

impl Matrix32 {
    /// Returns the all-zero matrix.
    pub const fn zeros() -> Self {
        Self {
            data: [[0.0; N]; N],
        }
    }

    /// Returns the identity matrix.
    pub fn identity() -> Self {
        Self::from_fn(|row, col| if row == col { 1.0 } else { 0.0 })
    }

    /// Builds a matrix by evaluating `f(row, col)` for every entry.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut out = Self::zeros();
        for (row, values) in out.data.iter_mut().enumerate() {
            for (col, value) in values.iter_mut().enumerate() {
                *value = f(row, col);
            }
        }
        out
    }

    /// Builds a matrix from dynamically sized rows, checking the shape.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, CholError> {
        if rows.len() != N {
            return Err(CholError::Matrix(
                ErrorInfo::new("matrix-shape", "expected 32 rows")
                    .with_context("rows", rows.len().to_string()),
            ));
        }
        let mut out = Self::zeros();
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != N {
                return Err(CholError::Matrix(
                    ErrorInfo::new("matrix-shape", "expected 32 columns")
                        .with_context("row", idx.to_string())
                        .with_context("cols", row.len().to_string()),
                ));
            }
            out.data[idx].copy_from_slice(row);
        }
        Ok(out)
    }

    /// Returns the entry at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row][col]
    }

    /// Overwrites the entry at `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row][col] = value;
    }

    /// Returns a single row.
    #[inline]
    pub fn row(&self, row: usize) -> &[f64; N] {
        &self.data[row]
    }

    /// Resets every entry to zero.
    pub fn fill_zero(&mut self) {
        self.data = [[0.0; N]; N];
    }

    /// Largest absolute entry, ignoring NaN.
    pub fn max_abs(&self) -> f64 {
        self.data
            .iter()
            .flat_map(|row| row.iter())
            .map(|value| value.abs())
            .fold(0.0, f64::max)
    }

    /// Whether every entry is finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().flatten().all(|value| value.is_finite())
    }
}

impl Default for Matrix32 {
    fn default() -> Self {
        Self::zeros()
    }
}
