//! Checks applied to a computed factor.

use chol_core::{Matrix32, N};
use serde::{Deserialize, Serialize};

use crate::params::VerifyOpts;

/// Computes `l · lᵗ`.
pub fn reconstruct(l: &Matrix32) -> Matrix32 {
    Matrix32::from_fn(|i, j| {
        l.row(i)
            .iter()
            .zip(l.row(j).iter())
            .map(|(lik, ljk)| lik * ljk)
            .sum()
    })
}

/// Largest absolute entry-wise difference. A NaN difference counts as infinite.
pub fn max_abs_diff(a: &Matrix32, b: &Matrix32) -> f64 {
    let mut worst = 0.0_f64;
    for row in 0..N {
        for col in 0..N {
            let diff = (a.get(row, col) - b.get(row, col)).abs();
            worst = if diff.is_nan() {
                f64::INFINITY
            } else {
                worst.max(diff)
            };
            if worst.is_infinite() {
                return worst;
            }
        }
    }
    worst
}

/// Whether every entry of `a` and `b` differs by at most `tol`.
pub fn approx_eq(a: &Matrix32, b: &Matrix32, tol: f64) -> bool {
    max_abs_diff(a, b) <= tol
}

/// Largest absolute entry strictly above the diagonal.
pub fn upper_max_abs(l: &Matrix32) -> f64 {
    (0..N)
        .flat_map(|row| (row + 1..N).map(move |col| (row, col)))
        .map(|(row, col)| l.get(row, col).abs())
        .fold(0.0, f64::max)
}

/// Whether all strictly-upper entries are within `tol` of zero.
pub fn is_lower_triangular(l: &Matrix32, tol: f64) -> bool {
    upper_max_abs(l) <= tol
}

/// Whether every diagonal entry is strictly positive.
pub fn has_positive_diagonal(l: &Matrix32) -> bool {
    (0..N).all(|j| l.get(j, j) > 0.0)
}

/// Summary of the structural and numerical checks on a factor.
///
/// Magnitudes are `None` when they are not finite, so a report always
/// serialises to JSON that parses back to the same value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorCheck {
    /// Max-abs difference between `l · lᵗ` and `a`.
    pub residual: Option<f64>,
    /// `residual` divided by the largest absolute entry of `a` (or 1 if `a` is zero).
    pub relative_residual: Option<f64>,
    /// Reconstruction tolerance that was applied.
    pub tolerance: Option<f64>,
    /// Largest magnitude above the diagonal of `l`.
    pub upper_max_abs: Option<f64>,
    /// Whether `upper_max_abs` is within the triangular tolerance.
    pub lower_triangular: bool,
    /// Whether every diagonal entry of `l` is strictly positive.
    pub positive_diagonal: bool,
    /// Whether `residual` is within `tolerance`, both finite.
    pub reconstructs: bool,
}

impl FactorCheck {
    /// Whether every check passed.
    pub fn passed(&self) -> bool {
        self.lower_triangular && self.positive_diagonal && self.reconstructs
    }
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Runs every factor check against the input `a`.
pub fn check_factor(a: &Matrix32, l: &Matrix32, opts: &VerifyOpts) -> FactorCheck {
    let opts = opts.sanitised();
    let residual = max_abs_diff(&reconstruct(l), a);
    let scale = a.max_abs();
    let relative_residual = if scale > 0.0 { residual / scale } else { residual };
    let tolerance = opts.reconstruction_tolerance(a);
    let upper = upper_max_abs(l);
    let reconstructs = match (finite(residual), finite(tolerance)) {
        (Some(residual), Some(tolerance)) => residual <= tolerance,
        _ => false,
    };
    let check = FactorCheck {
        residual: finite(residual),
        relative_residual: finite(relative_residual),
        tolerance: finite(tolerance),
        upper_max_abs: finite(upper),
        lower_triangular: upper.is_finite() && upper <= opts.triangular_tolerance,
        positive_diagonal: has_positive_diagonal(l),
        reconstructs,
    };
    if !check.reconstructs {
        log::warn!(
            "reconstruction residual {:.3e} exceeds tolerance {:.3e}",
            residual,
            tolerance
        );
    }
    check
}
