//! Cholesky factorization of fixed-size 32×32 symmetric positive-definite
//! matrices.
//!
//! The kernel validates symmetry up front and discovers loss of positive
//! definiteness while factoring, one pivot at a time. Both violations are
//! reported as values: [`decompose`] returns a three-way [`Outcome`] with the
//! stable codes `0`/`1`/`2`, and [`cholesky`] returns a `Result` carrying the
//! offending index.
//!
//! Matrices are row-major [`Matrix32`] values owned by the caller; the kernel
//! keeps no state between calls.

#![deny(missing_docs)]

use std::fmt;

use chol_core::errors::{CholError, ErrorInfo};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Column recurrence producing the lower factor.
pub mod factor;
/// Generated input matrices for tests, benches and the CLI.
pub mod fixtures;
/// SHA-256 digests of inputs and reports.
pub mod hash;
/// Verification tolerances and fixture descriptions.
pub mod params;
/// Structured decomposition reports.
pub mod report;
/// Built-in acceptance scenarios.
pub mod scenarios;
/// JSON encoding of reports.
pub mod serde_io;
/// Exact symmetry validation.
pub mod symmetry;
/// Reconstruction and structural checks on a factor.
pub mod verify;

pub use chol_core::{Matrix32, N};
pub use factor::{factor_lower, PivotFailure};
pub use params::{FixtureSpec, VerifyOpts};
pub use report::{
    analyze, analyze_with_provenance, Analysis, DecompositionReport, FailureDetail,
};
pub use scenarios::{acceptance_suite, run_suite, Expectation, Scenario, ScenarioResult};
pub use symmetry::{first_asymmetry, is_symmetric};
pub use verify::{check_factor, reconstruct, FactorCheck};

/// Three-way result of a decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum Outcome {
    /// The factor is fully populated and valid.
    Success = 0,
    /// The input has at least one pair with `a[i][j] != a[j][i]`.
    NotSymmetric = 1,
    /// A pivot was non-positive during factorization.
    NotPositiveDefinite = 2,
}

impl Outcome {
    /// Stable numeric code of the outcome.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Parses a numeric code back into an outcome.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Success),
            1 => Some(Self::NotSymmetric),
            2 => Some(Self::NotPositiveDefinite),
            _ => None,
        }
    }

    /// Whether the outcome is [`Outcome::Success`].
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    /// Kebab-case name used in reports and CLI output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::NotSymmetric => "not-symmetric",
            Self::NotPositiveDefinite => "not-positive-definite",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> Self {
        outcome.code()
    }
}

/// Precondition violation detected while decomposing.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DecomposeError {
    /// First pair (in row-major order over the strict upper triangle) that
    /// differs from its mirror.
    #[error("matrix is not symmetric: a[{row}][{col}] != a[{col}][{row}]")]
    NotSymmetric {
        /// Row of the upper-triangle entry.
        row: usize,
        /// Column of the upper-triangle entry.
        col: usize,
    },
    /// First pivot that was not strictly positive.
    #[error("matrix is not positive definite: pivot {pivot} is {value}")]
    NotPositiveDefinite {
        /// Zero-based column of the failing pivot.
        pivot: usize,
        /// Pivot value before the square root.
        value: f64,
    },
}

impl DecomposeError {
    /// Outcome code corresponding to the error.
    pub fn outcome(&self) -> Outcome {
        match self {
            Self::NotSymmetric { .. } => Outcome::NotSymmetric,
            Self::NotPositiveDefinite { .. } => Outcome::NotPositiveDefinite,
        }
    }
}

impl From<PivotFailure> for DecomposeError {
    fn from(failure: PivotFailure) -> Self {
        Self::NotPositiveDefinite {
            pivot: failure.pivot,
            value: failure.value,
        }
    }
}

impl From<DecomposeError> for CholError {
    fn from(err: DecomposeError) -> Self {
        let message = err.to_string();
        let info = match err {
            DecomposeError::NotSymmetric { row, col } => {
                ErrorInfo::new(Outcome::NotSymmetric.as_str(), message)
                    .with_context("row", row.to_string())
                    .with_context("col", col.to_string())
            }
            DecomposeError::NotPositiveDefinite { pivot, value } => {
                ErrorInfo::new(Outcome::NotPositiveDefinite.as_str(), message)
                    .with_context("pivot", pivot.to_string())
                    .with_context("value", value.to_string())
                    .with_hint("the input matrix must be positive definite")
            }
        };
        CholError::Decompose(info)
    }
}

/// Factors `a` into `l` such that `l · lᵗ = a`.
///
/// Symmetry is checked first and exactly; no factorization work is done for
/// an asymmetric input. On error the contents of `l` are unspecified.
pub fn try_decompose(a: &Matrix32, l: &mut Matrix32) -> Result<(), DecomposeError> {
    if let Some((row, col)) = first_asymmetry(a) {
        return Err(DecomposeError::NotSymmetric { row, col });
    }
    factor_lower(a, l)?;
    Ok(())
}

/// Factors `a` into `l` and reports the three-way outcome.
///
/// `l` is meaningful only when the returned outcome is [`Outcome::Success`].
pub fn decompose(a: &Matrix32, l: &mut Matrix32) -> Outcome {
    match try_decompose(a, l) {
        Ok(()) => Outcome::Success,
        Err(err) => err.outcome(),
    }
}

/// Returns the lower Cholesky factor of `a`.
pub fn cholesky(a: &Matrix32) -> Result<Matrix32, DecomposeError> {
    let mut l = Matrix32::zeros();
    try_decompose(a, &mut l)?;
    Ok(l)
}
