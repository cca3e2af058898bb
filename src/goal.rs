use num_traits::Float;
use tracing::trace;

use crate::{BaselineStatistics, GoalError, GoalParameters, Result, Rounded, helper::round_to};

/// The suggested goal of a metric and the parameters that produced it
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GoalResult<T> {
    /// Category label, the metric name
    category: String,
    /// Suggested goal value
    suggested_goal: T,
    /// Statistical upper bound, before scaling by the improvement factor
    upper_bound: T,
    /// Z-score selected by the confidence level
    z_score: f64,
    /// Confidence level used
    confidence_level: f64,
    /// Improvement factor used
    improvement_factor: f64,
}

impl<T: Float> GoalResult<T> {
    /// Derives the suggested goal from a baseline
    ///
    /// # Arguments
    ///
    /// * `baseline` - The baseline statistics of the metric
    /// * `params` - Confidence level, improvement factor and z-score method
    ///
    /// # Returns
    ///
    /// * `Result<Self>` - The goal, or `NumericCast` naming the z-score or
    ///   improvement factor that is not representable in `T`
    pub fn new(baseline: &BaselineStatistics<T>, params: &GoalParameters) -> Result<Self> {
        let z_score = params.z_score();
        let z = cast(z_score)?;
        let factor = cast(params.improvement_factor())?;

        let upper_bound = upper_bound(baseline.mean(), baseline.std_dev(), z);
        let suggested_goal =
            suggested_goal(upper_bound, baseline.max(), baseline.current_value(), factor);

        Ok(Self {
            category: baseline.category().to_string(),
            suggested_goal,
            upper_bound,
            z_score,
            confidence_level: params.confidence_level(),
            improvement_factor: params.improvement_factor(),
        })
    }
}

impl<T: Copy> GoalResult<T> {
    /// Returns the category label (metric name)
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the suggested goal
    pub const fn suggested_goal(&self) -> T {
        self.suggested_goal
    }

    /// Returns the unscaled statistical upper bound
    pub const fn upper_bound(&self) -> T {
        self.upper_bound
    }

    /// Returns the z-score used
    pub const fn z_score(&self) -> f64 {
        self.z_score
    }

    /// Returns the confidence level used
    pub const fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    /// Returns the improvement factor used
    pub const fn improvement_factor(&self) -> f64 {
        self.improvement_factor
    }
}

impl<T: Float> Rounded for GoalResult<T> {
    fn rounded(&self) -> Self {
        Self {
            category: self.category.clone(),
            suggested_goal: round_to(self.suggested_goal, 2),
            upper_bound: round_to(self.upper_bound, 2),
            ..*self
        }
    }
}

#[inline]
fn cast<T: Float>(value: f64) -> Result<T> {
    T::from(value).ok_or(GoalError::NumericCast(value))
}

/// Returns `mean + z * std_dev`
///
/// A zero standard deviation collapses the bound onto the mean.
#[inline]
pub fn upper_bound<T: Float>(mean: T, std_dev: T, z: T) -> T {
    mean + z * std_dev
}

/// Picks the goal from the statistical bound and the historical maximum
///
/// Both candidates are scaled by the improvement factor and the smaller one
/// wins, which caps high-variance metrics at an improvement over their best
/// result. When the factor asks for improvement (`>= 1`) and the pick would sit
/// below the current value, the goal becomes `current * factor` instead.
///
/// # Arguments
///
/// * `upper_bound` - The statistical upper bound
/// * `max` - The historical maximum
/// * `current` - The latest observed value
/// * `factor` - The improvement factor
///
/// # Returns
///
/// * `T` - The suggested goal
///
/// # Examples
///
/// ```
/// # use goal_statistics::{suggested_goal, upper_bound};
/// # use assert_approx_eq::assert_approx_eq;
/// let bound = upper_bound(100.0_f64, 10.0, 1.645);
/// assert_approx_eq!(bound, 116.45, 1e-9);
/// assert_approx_eq!(suggested_goal(bound, 150.0, 120.0, 1.1), 128.095, 1e-9);
///
/// // below the current value: scale the current value instead
/// assert_approx_eq!(suggested_goal(bound, 150.0, 140.0, 1.1), 154.0, 1e-9);
/// ```
pub fn suggested_goal<T: Float>(upper_bound: T, max: T, current: T, factor: T) -> T {
    let goal = (upper_bound * factor).min(max * factor);
    if goal < current && factor >= T::one() {
        trace!("suggested goal below current value, scaling current value");
        current * factor
    } else {
        goal
    }
}
