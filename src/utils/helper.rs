use num_traits::{Float, float::TotalOrder};

/// Returns the median from a sorted slice
///
/// # Arguments
///
/// * `ss` - The sorted slice
///
/// # Returns
///
/// * `Option<T>` - The median, or `None` if the slice is empty
#[inline]
pub fn median_from_sorted_slice<T: Float>(ss: &[T]) -> Option<T> {
    let len = ss.len();
    if len == 0 {
        return None;
    }
    let mid = len / 2;
    let _2 = T::one() + T::one();
    if len % 2 == 0 {
        Some((ss[mid - 1] + ss[mid]) / _2)
    } else {
        Some(ss[mid])
    }
}

/// Returns an ascending copy of the values
///
/// Sorts by the IEEE 754 total order, so NaN never breaks the comparator:
/// positive NaN sorts after `+inf`, negative NaN before `-inf`.
///
/// # Arguments
///
/// * `values` - The values to sort
///
/// # Returns
///
/// * `Vec<T>` - The sorted copy
#[inline]
pub fn sorted_copy<T: Float + TotalOrder>(values: &[T]) -> Vec<T> {
    let mut sorted = values.to_vec();
    sorted.sort_by(TotalOrder::total_cmp);
    sorted
}

/// Rounds a value to the given number of decimal places, half away from zero
///
/// # Arguments
///
/// * `value` - The value to round
/// * `decimals` - The number of decimal places to keep
///
/// # Returns
///
/// * `T` - The rounded value, or the value untouched if the scale is not representable
#[inline]
pub fn round_to<T: Float>(value: T, decimals: i32) -> T {
    match T::from(10.0_f64.powi(decimals)) {
        Some(scale) => (value * scale).round() / scale,
        None => value,
    }
}
