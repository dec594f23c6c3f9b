//! Small helpers for working with indicator output.

use crate::traits::Sample;

/// Standard tolerance for high-precision comparisons.
pub const EPSILON: f64 = 1e-10;

/// Approximate equality; two NaNs compare equal for testing convenience.
#[inline]
#[must_use]
pub fn approx_eq<T: Sample>(a: T, b: T, tolerance: T) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < tolerance
}

/// Counts NaN entries at the start of a slice - the realised lookback of a
/// whole-series indicator output.
#[inline]
#[must_use]
pub fn count_nan_prefix<T: Sample>(data: &[T]) -> usize {
    data.iter().take_while(|v| v.is_nan()).count()
}

/// Counts all NaN entries in a slice.
#[inline]
#[must_use]
pub fn count_nans<T: Sample>(data: &[T]) -> usize {
    data.iter().filter(|v| v.is_nan()).count()
}
