#![doc = include_str!("../README.md")]
#![deny(
    unsafe_code,
    unused_imports,
    unused_variables,
    unused_must_use,
    missing_docs,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented
)]
#![allow(clippy::just_underscores_and_digits)]

pub(crate) type Kbn<T> = compensated_summation::KahanBabuskaNeumaier<T>;

mod utils;
pub(crate) use utils::helper;

mod traits;
pub use traits::Rounded;

mod error;
pub use error::{GoalError, Result};

mod observation;
pub use observation::{Observation, group_by_metric};

mod zscore;
pub use zscore::{
    DEFAULT_Z_SCORE, Z_SCORE_BANDS, ZScoreMethod, z_score_continuous, z_score_from_table,
};

mod params;
pub use params::{DEFAULT_CONFIDENCE_LEVEL, DEFAULT_IMPROVEMENT_FACTOR, GoalParameters};

mod baseline;
pub use baseline::BaselineStatistics;

mod goal;
pub use goal::{GoalResult, suggested_goal, upper_bound};

mod targets;
pub use targets::{MonthlyTarget, TARGET_PERIODS, monthly_targets};

mod calculator;
pub use calculator::{GoalAnalysis, compute_goal, compute_goal_strict, compute_goals};
