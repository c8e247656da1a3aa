use chol_core::Matrix32;
use serde::{Deserialize, Serialize};

/// Tolerances applied when checking a computed factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifyOpts {
    /// Floor on the tolerated max-abs difference between `l · lᵗ` and `a`.
    pub absolute_tolerance: f64,
    /// Tolerance relative to the largest absolute entry of `a`.
    pub relative_tolerance: f64,
    /// Largest magnitude tolerated above the diagonal of `l`.
    pub triangular_tolerance: f64,
}

impl Default for VerifyOpts {
    fn default() -> Self {
        Self {
            absolute_tolerance: 1e-10,
            relative_tolerance: 1e-12,
            triangular_tolerance: 1e-10,
        }
    }
}

impl VerifyOpts {
    /// Returns a copy with NaN replaced by the defaults and negatives clamped to zero.
    pub fn sanitised(&self) -> Self {
        let defaults = Self::default();
        let clean = |value: f64, fallback: f64| {
            if value.is_nan() {
                fallback
            } else {
                value.max(0.0)
            }
        };
        Self {
            absolute_tolerance: clean(self.absolute_tolerance, defaults.absolute_tolerance),
            relative_tolerance: clean(self.relative_tolerance, defaults.relative_tolerance),
            triangular_tolerance: clean(self.triangular_tolerance, defaults.triangular_tolerance),
        }
    }

    /// Reconstruction tolerance for `a`, scaled by its magnitude.
    pub fn reconstruction_tolerance(&self, a: &Matrix32) -> f64 {
        self.absolute_tolerance
            .max(self.relative_tolerance * a.max_abs())
    }
}

/// Description of a generated input matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FixtureSpec {
    /// The 32×32 identity.
    Identity,
    /// Constant diagonal with off-diagonal entries `decay / (|i − j| + 1)`.
    Banded {
        /// Value on the main diagonal.
        diagonal: f64,
        /// Numerator of the off-diagonal decay.
        decay: f64,
    },
    /// Identity with every diagonal entry set to `-1`.
    NegativeDiagonal,
    /// Identity with `a[0][1] = 1` and `a[1][0] = 2`.
    Asymmetric,
    /// `b · bᵗ + 32·I` for a seeded random `b` with entries in `[-1, 1)`.
    RandomSpd {
        /// Master seed for the generator.
        seed: u64,
    },
}

impl FixtureSpec {
    /// Short label used as the report source.
    pub fn label(&self) -> String {
        match self {
            FixtureSpec::Identity => "identity".into(),
            FixtureSpec::Banded { diagonal, decay } => {
                format!("banded(d={diagonal},decay={decay})")
            }
            FixtureSpec::NegativeDiagonal => "negative-diagonal".into(),
            FixtureSpec::Asymmetric => "asymmetric".into(),
            FixtureSpec::RandomSpd { seed } => format!("random-spd(seed={seed})"),
        }
    }
}
