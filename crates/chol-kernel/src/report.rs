use chol_core::errors::CholError;
use chol_core::{Matrix32, RunProvenance, SchemaVersion};
use serde::{Deserialize, Serialize};

use crate::hash::{hash_matrix, hash_report};
use crate::params::VerifyOpts;
use crate::verify::{check_factor, FactorCheck};
use crate::{try_decompose, DecomposeError, Outcome};

/// Why a decomposition failed, in serialisable form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FailureDetail {
    /// First asymmetric pair.
    NotSymmetric {
        /// Row of the upper-triangle entry.
        row: usize,
        /// Column of the upper-triangle entry.
        col: usize,
    },
    /// First non-positive pivot.
    NotPositiveDefinite {
        /// Zero-based column of the failing pivot.
        pivot: usize,
        /// Pivot value, omitted when it is not finite.
        value: Option<f64>,
    },
}

impl From<DecomposeError> for FailureDetail {
    fn from(err: DecomposeError) -> Self {
        match err {
            DecomposeError::NotSymmetric { row, col } => FailureDetail::NotSymmetric { row, col },
            DecomposeError::NotPositiveDefinite { pivot, value } => {
                FailureDetail::NotPositiveDefinite {
                    pivot,
                    value: value.is_finite().then_some(value),
                }
            }
        }
    }
}

/// Structured summary of one decomposition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecompositionReport {
    /// Schema version of the report payload.
    pub schema_version: SchemaVersion,
    /// Where the input came from.
    pub provenance: RunProvenance,
    /// Three-way outcome.
    pub outcome: Outcome,
    /// Numeric code of `outcome`.
    pub code: u8,
    /// Failure details when `outcome` is not a success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<FailureDetail>,
    /// Factor checks when `outcome` is a success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check: Option<FactorCheck>,
    /// Canonical hash of the report with this field blank.
    pub report_hash: String,
}

impl DecompositionReport {
    /// Whether the decomposition succeeded and every factor check passed.
    pub fn passed(&self) -> bool {
        self.outcome.is_success() && self.check.as_ref().is_some_and(FactorCheck::passed)
    }
}

/// Report plus the factor, which is present only on success.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Structured report.
    pub report: DecompositionReport,
    /// Lower Cholesky factor.
    pub factor: Option<Matrix32>,
    /// Precondition violation, present whenever `factor` is not.
    pub error: Option<DecomposeError>,
}

/// Decomposes `a` and checks the factor against it.
pub fn analyze(a: &Matrix32, source: &str, opts: &VerifyOpts) -> Result<Analysis, CholError> {
    let provenance = RunProvenance::new(source, hash_matrix(a))
        .with_tool("chol-kernel", env!("CARGO_PKG_VERSION"));
    analyze_with_provenance(a, provenance, opts)
}

/// Like [`analyze`], with caller supplied provenance.
pub fn analyze_with_provenance(
    a: &Matrix32,
    provenance: RunProvenance,
    opts: &VerifyOpts,
) -> Result<Analysis, CholError> {
    if !a.is_finite() {
        log::warn!("input {} contains non-finite entries", provenance.source);
    }
    let mut l = Matrix32::zeros();
    let (outcome, failure, check, factor, error) = match try_decompose(a, &mut l) {
        Ok(()) => {
            let check = check_factor(a, &l, opts);
            (Outcome::Success, None, Some(check), Some(l), None)
        }
        Err(err) => (err.outcome(), Some(FailureDetail::from(err)), None, None, Some(err)),
    };

    let mut report = DecompositionReport {
        schema_version: SchemaVersion::default(),
        provenance,
        outcome,
        code: outcome.code(),
        failure,
        check,
        report_hash: String::new(),
    };
    report.report_hash = hash_report(&report)?;
    log::debug!(
        "decomposed {}: outcome={} hash={}",
        report.provenance.source,
        report.outcome,
        report.report_hash
    );
    Ok(Analysis {
        report,
        factor,
        error,
    })
}
