use ahash::RandomState;
use chrono::NaiveDate;
use hashbrown::HashMap;

/// A single dated value of a named metric
///
/// Observations are immutable inputs to the goal calculator. They may be supplied
/// in any order; the date only matters when picking the first and current values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observation<T> {
    /// Name of the metric this value belongs to
    metric: String,
    /// Observed value
    value: T,
    /// Date the value was recorded
    date: NaiveDate,
}

impl<T: Copy> Observation<T> {
    /// Creates a new observation
    ///
    /// # Arguments
    ///
    /// * `metric` - The metric name
    /// * `value` - The observed value
    /// * `date` - The observation date
    ///
    /// # Returns
    ///
    /// * `Self` - The observation
    pub fn new(metric: impl Into<String>, value: T, date: NaiveDate) -> Self {
        Self {
            metric: metric.into(),
            value,
            date,
        }
    }

    /// Returns the metric name
    pub fn metric(&self) -> &str {
        &self.metric
    }

    /// Returns the observed value
    pub const fn value(&self) -> T {
        self.value
    }

    /// Returns the observation date
    pub const fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Partitions a mixed batch of observations into per-metric series
///
/// Insertion order is preserved inside each series, which keeps the date
/// tie-break of the calculator reproducible.
///
/// # Arguments
///
/// * `observations` - Observations of any number of metrics
///
/// # Returns
///
/// * `Vec<(String, Vec<Observation<T>>)>` - One series per metric, sorted by metric name
///
/// # Examples
///
/// ```
/// # use goal_statistics::{Observation, group_by_metric};
/// # use chrono::NaiveDate;
/// let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
/// let batch = [
///     Observation::new("revenue", 10.0, date),
///     Observation::new("churn", 0.2, date),
///     Observation::new("revenue", 12.0, date),
/// ];
///
/// let groups = group_by_metric(&batch);
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].0, "churn");
/// assert_eq!(groups[1].1.len(), 2);
/// ```
pub fn group_by_metric<T: Copy>(
    observations: &[Observation<T>],
) -> Vec<(String, Vec<Observation<T>>)> {
    let mut groups: HashMap<&str, Vec<Observation<T>>, RandomState> =
        HashMap::with_hasher(RandomState::new());

    for observation in observations {
        groups
            .entry(observation.metric())
            .or_default()
            .push(observation.clone());
    }

    let mut groups: Vec<_> = groups
        .into_iter()
        .map(|(metric, series)| (metric.to_string(), series))
        .collect();
    groups.sort_by(|a, b| a.0.cmp(&b.0));
    groups
}
