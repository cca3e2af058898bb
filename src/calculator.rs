use num_traits::{Float, float::TotalOrder};
use tracing::debug;

use crate::{
    BaselineStatistics, GoalError, GoalParameters, GoalResult, MonthlyTarget, Observation, Result,
    Rounded, group_by_metric, monthly_targets,
};

/// The three result sets of one goal computation
///
/// Only produced when the metric has at least one observation, in which case
/// the baseline, the goal and all twelve monthly targets are present together.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GoalAnalysis<T> {
    baseline: BaselineStatistics<T>,
    goal: GoalResult<T>,
    targets: Vec<MonthlyTarget<T>>,
}

impl<T> GoalAnalysis<T> {
    /// Returns the baseline statistics
    pub const fn baseline(&self) -> &BaselineStatistics<T> {
        &self.baseline
    }

    /// Returns the goal
    pub const fn goal(&self) -> &GoalResult<T> {
        &self.goal
    }

    /// Returns the monthly targets ordered by period
    pub fn targets(&self) -> &[MonthlyTarget<T>] {
        &self.targets
    }
}

impl<T: Float> Rounded for GoalAnalysis<T> {
    fn rounded(&self) -> Self {
        Self {
            baseline: self.baseline.rounded(),
            goal: self.goal.rounded(),
            targets: self.targets.iter().map(Rounded::rounded).collect(),
        }
    }
}

/// Computes the baseline, suggested goal and monthly targets of a metric
///
/// Observations belonging to other metrics are ignored. The computation is a
/// pure function of its inputs: calling it twice with the same arguments gives
/// the same analysis.
///
/// # Arguments
///
/// * `metric` - The metric to analyse
/// * `observations` - Observations in any order, possibly of several metrics
/// * `params` - Confidence level, improvement factor and z-score method
///
/// # Returns
///
/// * `Result<GoalAnalysis<T>>` - The analysis, or [`GoalError::NoData`] when the
///   metric has no observation
///
/// # Examples
///
/// ```
/// # use goal_statistics::{GoalError, GoalParameters, Observation, Rounded, compute_goal};
/// # use chrono::NaiveDate;
/// let date = |m| NaiveDate::from_ymd_opt(2023, m, 1).unwrap();
/// let series = [
///     Observation::new("revenue", 100.0, date(1)),
///     Observation::new("revenue", 120.0, date(6)),
///     Observation::new("revenue", 150.0, date(12)),
/// ];
///
/// let analysis = compute_goal("revenue", &series, &GoalParameters::default()).unwrap();
/// assert_eq!(analysis.targets().len(), 12);
/// assert_eq!(analysis.baseline().rounded().mean(), 123.33);
///
/// let missing = compute_goal("churn", &series, &GoalParameters::default());
/// assert!(matches!(missing, Err(GoalError::NoData { .. })));
/// ```
pub fn compute_goal<T: Float + Default + TotalOrder>(
    metric: &str,
    observations: &[Observation<T>],
    params: &GoalParameters,
) -> Result<GoalAnalysis<T>> {
    let series: Vec<Observation<T>> = observations
        .iter()
        .filter(|o| o.metric() == metric)
        .cloned()
        .collect();

    let Some(baseline) = BaselineStatistics::new(metric, &series) else {
        debug!(metric, "no observations for metric");
        return Err(GoalError::NoData {
            metric: metric.to_string(),
        });
    };

    let goal = GoalResult::new(&baseline, params)?;
    let targets = monthly_targets(baseline.current_value(), goal.suggested_goal())
        .ok_or(GoalError::NumericCast(crate::TARGET_PERIODS as f64))?;

    debug!(
        metric,
        data_points = baseline.data_points(),
        z_score = goal.z_score(),
        suggested_goal = goal.suggested_goal().to_f64(),
        "computed goal"
    );

    Ok(GoalAnalysis {
        baseline,
        goal,
        targets,
    })
}

/// Validates the parameters strictly, then computes the goal
///
/// Unlike [`compute_goal`], an out-of-range confidence level or improvement
/// factor is reported instead of silently falling back.
pub fn compute_goal_strict<T: Float + Default + TotalOrder>(
    metric: &str,
    observations: &[Observation<T>],
    params: &GoalParameters,
) -> Result<GoalAnalysis<T>> {
    params.validate()?;
    compute_goal(metric, observations, params)
}

/// Computes a goal for every metric present in a mixed batch
///
/// Each metric is analysed independently of the others.
///
/// # Returns
///
/// * `Vec<(String, Result<GoalAnalysis<T>>)>` - One entry per metric, sorted by name
pub fn compute_goals<T: Float + Default + TotalOrder>(
    observations: &[Observation<T>],
    params: &GoalParameters,
) -> Vec<(String, Result<GoalAnalysis<T>>)> {
    group_by_metric(observations)
        .into_iter()
        .map(|(metric, series)| {
            let analysis = compute_goal(&metric, &series, params);
            (metric, analysis)
        })
        .collect()
}
