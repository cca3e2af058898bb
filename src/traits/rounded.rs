/// Presentation rounding for computed results
///
/// Computations always run at full precision. Implementors return a copy whose
/// reported values are rounded for display: two decimals for statistics and
/// goal values, four decimals for the trend.
pub trait Rounded {
    /// Returns a copy of the result rounded for display
    fn rounded(&self) -> Self;
}
