use num_traits::{Float, float::TotalOrder};

use crate::{
    Kbn, Observation, Rounded,
    helper::{median_from_sorted_slice, round_to, sorted_copy},
};

/// Descriptive summary of a metric's history
///
/// The snapshot is derived fresh from a series of observations and never
/// updated afterwards. Aggregates (mean, median, standard deviation, extrema)
/// ignore ordering; the first and current values are picked by date.
///
/// When several observations share the earliest date, the first one supplied
/// is the first value. When several share the latest date, the last one
/// supplied is the current value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaselineStatistics<T> {
    /// Category label, the metric name
    category: String,
    /// Arithmetic mean
    mean: T,
    /// Exact median
    median: T,
    /// Sample standard deviation, zero below two observations
    std_dev: T,
    /// Smallest value
    min: T,
    /// Largest value
    max: T,
    /// Number of observations
    data_points: usize,
    /// Value of the earliest observation
    first_value: T,
    /// Value of the latest observation
    current_value: T,
    /// Average change per observation between first and current value
    trend: T,
}

impl<T: Float + Default + TotalOrder> BaselineStatistics<T> {
    /// Computes the baseline statistics of a series
    ///
    /// Every observation is assumed to belong to `category`; filtering by metric
    /// is the caller's job.
    ///
    /// # Arguments
    ///
    /// * `category` - The metric name used as category label
    /// * `observations` - The observations of that metric, in any order
    ///
    /// # Returns
    ///
    /// * `Option<Self>` - The statistics, or `None` if the series is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use goal_statistics::{BaselineStatistics, Observation};
    /// # use chrono::NaiveDate;
    /// # use assert_approx_eq::assert_approx_eq;
    /// let series = [
    ///     Observation::new("visits", 100.0_f64, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()),
    ///     Observation::new("visits", 150.0, NaiveDate::from_ymd_opt(2023, 12, 1).unwrap()),
    /// ];
    ///
    /// let baseline = BaselineStatistics::new("visits", &series).unwrap();
    /// assert_eq!(baseline.mean(), 125.0);
    /// assert_eq!(baseline.trend(), 25.0);
    /// assert_approx_eq!(baseline.std_dev(), 35.3553, 0.0001);
    /// ```
    pub fn new(category: impl Into<String>, observations: &[Observation<T>]) -> Option<Self> {
        let first = observations.iter().min_by_key(|o| o.date())?;
        // max_by_key keeps the last of equal maxima
        let current = observations.iter().max_by_key(|o| o.date())?;

        let values: Vec<T> = observations.iter().map(Observation::value).collect();
        let data_points = values.len();
        let n = T::from(data_points)?;

        let mean = mean(&values, n);
        let std_dev = sample_std_dev(&values, mean, data_points)?;
        let sorted = sorted_copy(&values);
        let median = median_from_sorted_slice(&sorted)?;
        let min = values.iter().copied().reduce(T::min)?;
        let max = values.iter().copied().reduce(T::max)?;

        let first_value = first.value();
        let current_value = current.value();
        let trend = if data_points >= 2 {
            (current_value - first_value) / n
        } else {
            T::zero()
        };

        Some(Self {
            category: category.into(),
            mean,
            median,
            std_dev,
            min,
            max,
            data_points,
            first_value,
            current_value,
            trend,
        })
    }
}

impl<T: Copy> BaselineStatistics<T> {
    /// Returns the category label (metric name)
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the arithmetic mean
    pub const fn mean(&self) -> T {
        self.mean
    }

    /// Returns the median
    ///
    /// Odd-sized series yield the middle element, even-sized series the average
    /// of the two middle elements.
    pub const fn median(&self) -> T {
        self.median
    }

    /// Returns the sample standard deviation (n - 1 denominator)
    pub const fn std_dev(&self) -> T {
        self.std_dev
    }

    /// Returns the smallest value
    pub const fn min(&self) -> T {
        self.min
    }

    /// Returns the largest value
    pub const fn max(&self) -> T {
        self.max
    }

    /// Returns the number of observations
    pub const fn data_points(&self) -> usize {
        self.data_points
    }

    /// Returns the value of the earliest observation
    pub const fn first_value(&self) -> T {
        self.first_value
    }

    /// Returns the value of the latest observation
    pub const fn current_value(&self) -> T {
        self.current_value
    }

    /// Returns the trend per period
    ///
    /// The endpoint difference `(current - first)` divided by the number of
    /// observations. This is not a least-squares slope. Zero when fewer than two
    /// observations exist.
    pub const fn trend(&self) -> T {
        self.trend
    }
}

impl<T: Float> Rounded for BaselineStatistics<T> {
    fn rounded(&self) -> Self {
        Self {
            category: self.category.clone(),
            mean: round_to(self.mean, 2),
            median: round_to(self.median, 2),
            std_dev: round_to(self.std_dev, 2),
            min: round_to(self.min, 2),
            max: round_to(self.max, 2),
            data_points: self.data_points,
            first_value: round_to(self.first_value, 2),
            current_value: round_to(self.current_value, 2),
            trend: round_to(self.trend, 4),
        }
    }
}

#[inline]
fn mean<T: Float + Default>(values: &[T], n: T) -> T {
    let mut sum: Kbn<T> = Kbn::default();
    for &value in values {
        sum += value;
    }
    sum.total() / n
}

// Two-pass variance around the already computed mean
#[inline]
fn sample_std_dev<T: Float + Default>(values: &[T], mean: T, data_points: usize) -> Option<T> {
    if data_points < 2 {
        return Some(T::zero());
    }

    let mut sum_sq: Kbn<T> = Kbn::default();
    for &value in values {
        let delta = value - mean;
        sum_sq += delta * delta;
    }

    let dof = T::from(data_points - 1)?;
    Some((sum_sq.total() / dof).sqrt())
}
