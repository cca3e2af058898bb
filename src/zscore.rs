//! Mapping from a confidence level to a one-tailed z-score
//!
//! The default method is a discrete lookup over four confidence bands. A
//! continuous inverse-normal method is available for callers that need levels
//! between the bands; it reproduces the band values at the four reference
//! levels.

use tracing::{debug, warn};

/// Z-score used when a confidence level matches no band
pub const DEFAULT_Z_SCORE: f64 = 0.524;

/// Confidence bands in descending order, matched with `>=`
pub const Z_SCORE_BANDS: [(f64, f64); 4] = [
    (0.95, 1.645),
    (0.90, 1.282),
    (0.80, 0.842),
    (0.70, 0.524),
];

/// How a confidence level is turned into a z-score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ZScoreMethod {
    /// Discrete lookup over the confidence bands
    #[default]
    Table,
    /// Inverse standard normal CDF, exact band values at the reference levels
    Continuous,
}

impl ZScoreMethod {
    /// Returns the z-score for a confidence level
    ///
    /// # Arguments
    ///
    /// * `confidence_level` - Probability threshold, expected in (0, 1]
    ///
    /// # Returns
    ///
    /// * `f64` - The one-tailed z-score
    ///
    /// # Examples
    ///
    /// ```
    /// # use goal_statistics::ZScoreMethod;
    /// # use assert_approx_eq::assert_approx_eq;
    /// assert_eq!(ZScoreMethod::Table.z_score(0.9), 1.282);
    /// assert_eq!(ZScoreMethod::Table.z_score(0.99), 1.645);
    /// assert_eq!(ZScoreMethod::Continuous.z_score(0.9), 1.282);
    /// assert_approx_eq!(ZScoreMethod::Continuous.z_score(0.99), 2.3263, 0.0001);
    /// ```
    pub fn z_score(self, confidence_level: f64) -> f64 {
        match self {
            Self::Table => z_score_from_table(confidence_level),
            Self::Continuous => z_score_continuous(confidence_level),
        }
    }
}

/// Looks up the z-score of the first band whose threshold the confidence level reaches
///
/// Levels below the lowest band, and levels that compare false against every
/// threshold (NaN), fall back to [`DEFAULT_Z_SCORE`]. Nothing is rejected.
pub fn z_score_from_table(confidence_level: f64) -> f64 {
    if !(confidence_level > 0.0 && confidence_level <= 1.0) {
        warn!(confidence_level, "confidence level outside (0, 1], using default z-score");
    }

    Z_SCORE_BANDS
        .iter()
        .find(|(threshold, _)| confidence_level >= *threshold)
        .map(|&(_, z)| z)
        .unwrap_or_else(|| {
            debug!(confidence_level, "confidence level below lowest band");
            DEFAULT_Z_SCORE
        })
}

/// Computes the z-score from the inverse standard normal CDF
///
/// Exact band thresholds return the band value so results stay identical to the
/// table at 0.70, 0.80, 0.90 and 0.95. Levels outside the open interval (0, 1)
/// have no finite quantile and fall back to [`DEFAULT_Z_SCORE`].
pub fn z_score_continuous(confidence_level: f64) -> f64 {
    if let Some(&(_, z)) = Z_SCORE_BANDS
        .iter()
        .find(|(threshold, _)| confidence_level == *threshold)
    {
        return z;
    }

    if !(confidence_level > 0.0 && confidence_level < 1.0) {
        warn!(confidence_level, "confidence level outside (0, 1), using default z-score");
        return DEFAULT_Z_SCORE;
    }

    inverse_normal_cdf(confidence_level)
}

const A: [f64; 6] = [
    -3.969_683_028_665_376e1,
    2.209_460_984_245_205e2,
    -2.759_285_104_469_687e2,
    1.383_577_518_672_69e2,
    -3.066_479_806_614_716e1,
    2.506_628_277_459_239,
];
const B: [f64; 5] = [
    -5.447_609_879_822_406e1,
    1.615_858_368_580_409e2,
    -1.556_989_798_598_866e2,
    6.680_131_188_771_972e1,
    -1.328_068_155_288_572e1,
];
const C: [f64; 6] = [
    -7.784_894_002_430_293e-3,
    -3.223_964_580_411_365e-1,
    -2.400_758_277_161_838,
    -2.549_732_539_343_734,
    4.374_664_141_464_968,
    2.938_163_982_698_783,
];
const D: [f64; 4] = [
    7.784_695_709_041_462e-3,
    3.224_671_290_700_398e-1,
    2.445_134_137_142_996,
    3.754_408_661_907_416,
];
const P_LOW: f64 = 0.02425;

// Acklam's rational approximation, relative error below 1.15e-9 on (0, 1)
fn inverse_normal_cdf(p: f64) -> f64 {
    if p < P_LOW {
        let q = (-2.0 * p.ln()).sqrt();
        tail(q)
    } else if p <= 1.0 - P_LOW {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -tail(q)
    }
}

#[inline]
fn tail(q: f64) -> f64 {
    (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
        / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
}
