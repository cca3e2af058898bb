use num_traits::Float;

use crate::{Rounded, helper::round_to};

/// Number of periods in a target ramp
pub const TARGET_PERIODS: usize = 12;

/// One step of the ramp from the current value to the suggested goal
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonthlyTarget<T> {
    /// Period number, starting at 1
    period: usize,
    /// Target value for the period
    target: T,
}

impl<T: Copy> MonthlyTarget<T> {
    /// Returns the period number
    pub const fn period(&self) -> usize {
        self.period
    }

    /// Returns the target value
    pub const fn target(&self) -> T {
        self.target
    }
}

impl<T: Float> Rounded for MonthlyTarget<T> {
    fn rounded(&self) -> Self {
        Self {
            period: self.period,
            target: round_to(self.target, 2),
        }
    }
}

/// Builds the linear ramp of monthly targets
///
/// Period `p` targets `current + ((goal - current) / 12) * p`. The current value
/// itself (period 0) is not emitted and the last period lands on the goal.
///
/// The ramp is strictly monotonic toward the goal as long as the monthly step
/// is larger than the float spacing around `current`. Below that resolution
/// neighbouring periods may round to the same value; the ramp then only stays
/// non-decreasing (or non-increasing).
///
/// # Arguments
///
/// * `current` - The latest observed value
/// * `goal` - The suggested goal
///
/// # Returns
///
/// * `Option<Vec<MonthlyTarget<T>>>` - Exactly twelve targets ordered by period,
///   or `None` if the period count is not representable in `T`
///
/// # Examples
///
/// ```
/// # use goal_statistics::monthly_targets;
/// # use assert_approx_eq::assert_approx_eq;
/// let targets = monthly_targets(100.0_f64, 160.0).unwrap();
///
/// assert_eq!(targets.len(), 12);
/// assert_eq!(targets[0].period(), 1);
/// assert_approx_eq!(targets[0].target(), 105.0, 1e-9);
/// assert_approx_eq!(targets[11].target(), 160.0, 1e-9);
/// ```
pub fn monthly_targets<T: Float>(current: T, goal: T) -> Option<Vec<MonthlyTarget<T>>> {
    let step = (goal - current) / T::from(TARGET_PERIODS)?;

    (1..=TARGET_PERIODS)
        .map(|period| {
            Some(MonthlyTarget {
                period,
                target: current + step * T::from(period)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    fn values(targets: &[MonthlyTarget<f64>]) -> Vec<f64> {
        targets.iter().map(MonthlyTarget::target).collect()
    }

    #[test]
    fn increasing_ramp() {
        let targets = monthly_targets(100.0, 128.095).unwrap();
        let periods: Vec<_> = targets.iter().map(MonthlyTarget::period).collect();
        assert_eq!(periods, (1..=12).collect::<Vec<_>>());

        let values = values(&targets);
        assert!(values.windows(2).all(|w| w[0] < w[1]));
        assert!(values[0] > 100.0);
        assert_approx_eq!(values[11], 128.095, 1e-9);
    }

    #[test]
    fn decreasing_ramp() {
        let values = values(&monthly_targets(50.0, 26.0).unwrap());
        assert!(values.windows(2).all(|w| w[0] > w[1]));
        assert_approx_eq!(values[0], 48.0, 1e-9);
        assert_approx_eq!(values[11], 26.0, 1e-9);
    }

    #[test]
    fn flat_ramp() {
        let values = values(&monthly_targets(7.0, 7.0).unwrap());
        assert_eq!(values, vec![7.0; TARGET_PERIODS]);
    }

    #[test]
    fn step_below_float_spacing_stays_monotonic() {
        let values = values(&monthly_targets(1e16, 1e16 + 12.0).unwrap());
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert!(values.windows(2).any(|w| w[0] == w[1]));
        assert_eq!(values[11], 1e16 + 12.0);

        let values = self::values(&monthly_targets(1e16 + 12.0, 1e16).unwrap());
        assert!(values.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(values[11], 1e16);
    }

    #[test]
    fn rounded_target() {
        let targets = monthly_targets(0.0, 1.0).unwrap();
        assert_eq!(targets[0].rounded().target(), 0.08);
        assert_eq!(targets[0].rounded().period(), 1);
    }
}
