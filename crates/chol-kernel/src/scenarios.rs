//! Built-in acceptance scenarios for the kernel.
//!
//! Each scenario pairs a fixture with the property its decomposition must
//! satisfy. The CLI `selftest` command runs [`acceptance_suite`] and prints one
//! line per scenario.

use chol_core::Matrix32;
use serde::{Deserialize, Serialize};

use crate::fixtures;
use crate::params::{FixtureSpec, VerifyOpts};
use crate::verify::{approx_eq, has_positive_diagonal, max_abs_diff, reconstruct, upper_max_abs};
use crate::{decompose, Outcome};

/// Property checked by a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Expectation {
    /// Success with `l` equal to the identity and `l · lᵗ = a`.
    IdentityFactor,
    /// Success with a lower-triangular `l`.
    LowerTriangular,
    /// Success with `l · lᵗ` within `tolerance` of `a`.
    Reconstructs {
        /// Max-abs tolerance.
        tolerance: f64,
    },
    /// Success with a strictly positive diagonal.
    PositiveDiagonal,
    /// The given failure outcome.
    Rejects {
        /// Expected outcome.
        outcome: Outcome,
    },
}

/// A named fixture and the property its factor must satisfy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Display name.
    pub name: String,
    /// Input matrix.
    pub fixture: FixtureSpec,
    /// Property to check.
    pub expect: Expectation,
}

/// Result of running a single scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Display name of the scenario.
    pub name: String,
    /// Outcome returned by the kernel.
    pub outcome: Outcome,
    /// Whether the expectation held.
    pub passed: bool,
    /// Human readable explanation.
    pub detail: String,
}

impl Scenario {
    fn new(name: &str, fixture: FixtureSpec, expect: Expectation) -> Self {
        Self {
            name: name.into(),
            fixture,
            expect,
        }
    }

    /// Decomposes the fixture and checks the expectation.
    ///
    /// `opts` supplies the tolerance for identity and triangularity checks.
    pub fn run(&self, opts: &VerifyOpts) -> ScenarioResult {
        let opts = opts.sanitised();
        let a = fixtures::build(&self.fixture);
        let mut l = Matrix32::zeros();
        let outcome = decompose(&a, &mut l);

        let (passed, detail) = match &self.expect {
            Expectation::Rejects { outcome: expected } => (
                outcome == *expected,
                format!("expected code {}, got {}", expected.code(), outcome.code()),
            ),
            _ if !outcome.is_success() => (
                false,
                format!("decomposition returned error {}", outcome.code()),
            ),
            Expectation::IdentityFactor => {
                let tol = opts.absolute_tolerance;
                let factor_err = max_abs_diff(&l, &Matrix32::identity());
                let recon_ok = approx_eq(&reconstruct(&l), &a, tol);
                (
                    factor_err <= tol && recon_ok,
                    format!("max |L - I| = {factor_err:.3e}, reconstructs: {recon_ok}"),
                )
            }
            Expectation::LowerTriangular => {
                let upper = upper_max_abs(&l);
                (
                    upper <= opts.triangular_tolerance,
                    format!("max upper entry {upper:.3e}"),
                )
            }
            Expectation::Reconstructs { tolerance } => {
                let residual = max_abs_diff(&reconstruct(&l), &a);
                (
                    residual <= *tolerance,
                    format!("residual {residual:.3e} (tolerance {tolerance:.0e})"),
                )
            }
            Expectation::PositiveDiagonal => {
                let positive = has_positive_diagonal(&l);
                (positive, format!("positive diagonal: {positive}"))
            }
        };

        ScenarioResult {
            name: self.name.clone(),
            outcome,
            passed,
            detail,
        }
    }
}

/// The seven acceptance checks, in execution order.
pub fn acceptance_suite() -> Vec<Scenario> {
    let simple = FixtureSpec::Banded {
        diagonal: 2.0,
        decay: 0.1,
    };
    let stable = FixtureSpec::Banded {
        diagonal: 10.0,
        decay: 0.01,
    };
    vec![
        Scenario::new(
            "Identity matrix decomposition",
            FixtureSpec::Identity,
            Expectation::IdentityFactor,
        ),
        Scenario::new(
            "Lower triangular property verified",
            simple.clone(),
            Expectation::LowerTriangular,
        ),
        Scenario::new(
            "Correctness verified (L x L^T = A)",
            simple.clone(),
            Expectation::Reconstructs { tolerance: 1e-8 },
        ),
        Scenario::new(
            "All diagonal elements are positive",
            simple,
            Expectation::PositiveDiagonal,
        ),
        Scenario::new(
            "Non-symmetric matrix correctly rejected",
            FixtureSpec::Asymmetric,
            Expectation::Rejects {
                outcome: Outcome::NotSymmetric,
            },
        ),
        Scenario::new(
            "Non-positive definite matrix correctly rejected",
            FixtureSpec::NegativeDiagonal,
            Expectation::Rejects {
                outcome: Outcome::NotPositiveDefinite,
            },
        ),
        Scenario::new(
            "Numerical stability verified",
            stable,
            Expectation::Reconstructs { tolerance: 1e-7 },
        ),
    ]
}

/// Runs every scenario of [`acceptance_suite`].
pub fn run_suite(opts: &VerifyOpts) -> Vec<ScenarioResult> {
    acceptance_suite()
        .iter()
        .map(|scenario| scenario.run(opts))
        .collect()
}
