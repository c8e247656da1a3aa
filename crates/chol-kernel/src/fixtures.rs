//! Generators for the input matrices used by tests, benches, and the CLI.

use chol_core::{Matrix32, RngHandle, N};

use crate::params::FixtureSpec;
use crate::verify::reconstruct;

/// The identity matrix.
pub fn identity() -> Matrix32 {
    Matrix32::identity()
}

/// Constant `diagonal` with off-diagonal entries `decay / (|i − j| + 1)`.
///
/// Strictly diagonally dominant (hence positive definite) whenever
/// `diagonal > 2 · |decay| · (H₃₂ − 1)`, e.g. `(2.0, 0.1)` and `(10.0, 0.01)`.
pub fn banded(diagonal: f64, decay: f64) -> Matrix32 {
    Matrix32::from_fn(|row, col| {
        if row == col {
            diagonal
        } else {
            decay / (row.abs_diff(col) + 1) as f64
        }
    })
}

/// Symmetric but not positive definite: identity with a `-1` diagonal.
pub fn negative_diagonal() -> Matrix32 {
    let mut a = Matrix32::identity();
    for j in 0..N {
        a.set(j, j, -1.0);
    }
    a
}

/// Identity with a single asymmetric pair at `(0, 1)`.
pub fn asymmetric() -> Matrix32 {
    let mut a = Matrix32::identity();
    a.set(0, 1, 1.0);
    a.set(1, 0, 2.0);
    a
}

/// Random symmetric positive-definite matrix `b · bᵗ + 32·I`.
///
/// The same seed always produces the same matrix. The upper triangle is
/// mirrored from the lower one so the result is exactly symmetric.
pub fn random_spd(seed: u64) -> Matrix32 {
    let mut rng = RngHandle::from_seed(seed);
    let b = Matrix32::from_fn(|_, _| rng.next_signed_unit());
    let gram = reconstruct(&b);
    Matrix32::from_fn(|row, col| {
        let value = if row >= col {
            gram.get(row, col)
        } else {
            gram.get(col, row)
        };
        if row == col {
            value + N as f64
        } else {
            value
        }
    })
}

/// Builds the matrix described by `spec`.
pub fn build(spec: &FixtureSpec) -> Matrix32 {
    match spec {
        FixtureSpec::Identity => identity(),
        FixtureSpec::Banded { diagonal, decay } => banded(*diagonal, *decay),
        FixtureSpec::NegativeDiagonal => negative_diagonal(),
        FixtureSpec::Asymmetric => asymmetric(),
        FixtureSpec::RandomSpd { seed } => random_spd(*seed),
    }
}
