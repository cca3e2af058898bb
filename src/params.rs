use crate::{GoalError, Result, ZScoreMethod};

/// Default confidence level
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.7;

/// Default improvement factor
pub const DEFAULT_IMPROVEMENT_FACTOR: f64 = 1.1;

/// Caller-supplied knobs of a goal computation
///
/// Values are not checked when computing a goal: an unmatched confidence level
/// silently uses the lowest band. Call [`GoalParameters::validate`] to reject
/// out-of-range values up front.
///
/// # Examples
///
/// ```
/// # use goal_statistics::{GoalParameters, ZScoreMethod};
/// let params = GoalParameters::default()
///     .with_confidence_level(0.9)
///     .with_improvement_factor(1.25)
///     .with_zscore_method(ZScoreMethod::Continuous);
///
/// assert_eq!(params.confidence_level(), 0.9);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GoalParameters {
    /// Probability threshold for the upper bound
    confidence_level: f64,
    /// Multiplier applied to the bound and to the historical maximum
    improvement_factor: f64,
    /// Confidence level to z-score mapping
    zscore_method: ZScoreMethod,
}

impl Default for GoalParameters {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIDENCE_LEVEL, DEFAULT_IMPROVEMENT_FACTOR)
    }
}

impl GoalParameters {
    /// Creates parameters using the band table for z-scores
    ///
    /// # Arguments
    ///
    /// * `confidence_level` - Probability threshold, expected in (0, 1]
    /// * `improvement_factor` - Goal aggressiveness, expected >= 0
    ///
    /// # Returns
    ///
    /// * `Self` - The parameters
    pub const fn new(confidence_level: f64, improvement_factor: f64) -> Self {
        Self {
            confidence_level,
            improvement_factor,
            zscore_method: ZScoreMethod::Table,
        }
    }

    /// Returns the confidence level
    pub const fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    /// Returns the improvement factor
    pub const fn improvement_factor(&self) -> f64 {
        self.improvement_factor
    }

    /// Returns the z-score method
    pub const fn zscore_method(&self) -> ZScoreMethod {
        self.zscore_method
    }

    /// Sets the confidence level
    pub const fn with_confidence_level(mut self, confidence_level: f64) -> Self {
        self.confidence_level = confidence_level;
        self
    }

    /// Sets the improvement factor
    pub const fn with_improvement_factor(mut self, improvement_factor: f64) -> Self {
        self.improvement_factor = improvement_factor;
        self
    }

    /// Sets the z-score method
    pub const fn with_zscore_method(mut self, zscore_method: ZScoreMethod) -> Self {
        self.zscore_method = zscore_method;
        self
    }

    /// Returns the z-score selected by the confidence level
    pub fn z_score(&self) -> f64 {
        self.zscore_method.z_score(self.confidence_level)
    }

    /// Checks the parameters strictly
    ///
    /// # Returns
    ///
    /// * `Result<()>` - `InvalidConfidenceLevel` if the level is not in (0, 1],
    ///   `InvalidImprovementFactor` if the factor is negative or not finite
    pub fn validate(&self) -> Result<()> {
        if !(self.confidence_level > 0.0 && self.confidence_level <= 1.0) {
            return Err(GoalError::InvalidConfidenceLevel(self.confidence_level));
        }
        if !self.improvement_factor.is_finite() || self.improvement_factor < 0.0 {
            return Err(GoalError::InvalidImprovementFactor(self.improvement_factor));
        }
        Ok(())
    }
}
