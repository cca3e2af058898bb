//! Error types for goal computation

use thiserror::Error;

/// Outcomes that stop a goal computation from producing results
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GoalError {
    /// No observation exists for the requested metric
    #[error("no data found for metric: {metric}")]
    NoData {
        /// The metric that was requested
        metric: String,
    },

    /// Confidence level outside (0, 1], only reported by strict validation
    #[error("invalid confidence level: {0} (expected a value in (0, 1])")]
    InvalidConfidenceLevel(f64),

    /// Negative or non-finite improvement factor, only reported by strict validation
    #[error("invalid improvement factor: {0} (expected a finite value >= 0)")]
    InvalidImprovementFactor(f64),

    /// A parameter or constant could not be represented in the value type
    #[error("numeric value not representable: {0}")]
    NumericCast(f64),
}

/// Result alias used throughout the crate
pub type Result<T> = core::result::Result<T, GoalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_data_names_the_metric() {
        let err = GoalError::NoData {
            metric: "revenue".to_string(),
        };
        assert_eq!(err.to_string(), "no data found for metric: revenue");
    }

    #[test]
    fn numeric_cast_names_the_value() {
        assert_eq!(
            GoalError::NumericCast(1.645).to_string(),
            "numeric value not representable: 1.645"
        );
    }
}
