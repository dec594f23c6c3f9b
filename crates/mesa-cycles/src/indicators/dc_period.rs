//! Dominant-cycle period.
//!
//! Emits the doubly smoothed cycle-period estimate of the Hilbert engine,
//! one value per bar, expressed in bars and clamped to [6, 50]. Useful on
//! its own and as the adaptation input for period-aware indicators.
//!
//! # Lookback
//!
//! 32 bars, plus the configured unstable period for
//! [`CycleIndicator::DcPeriod`].

use crate::error::{Error, Result};
use crate::hilbert::{CycleEngine, SMOOTHER_WARMUP};
use crate::settings::{unstable_period, CycleIndicator};
use crate::traits::Sample;
use crate::window::{validate_output, validate_window, OutputRange};

const STRUCTURAL_LOOKBACK: usize = 32;

/// Returns the current lookback for the dominant-cycle period.
#[inline]
#[must_use]
pub fn dc_period_lookback() -> usize {
    STRUCTURAL_LOOKBACK + unstable_period(CycleIndicator::DcPeriod)
}

/// Returns the minimum input length that yields one output sample.
#[inline]
#[must_use]
pub fn dc_period_min_len() -> usize {
    dc_period_lookback() + 1
}

/// Computes the dominant-cycle period over the window `start..=end`.
///
/// Output is written aligned - `out[i]` holds the value for `data[i]` - for
/// every index in the returned range; entries outside it are untouched. The
/// engine reads exactly [`dc_period_lookback`] samples before the first
/// output index for warm-up. A window that lies entirely inside the
/// lookback succeeds with an empty range.
///
/// # Errors
///
/// * [`Error::EmptyInput`] - `data` is empty.
/// * [`Error::WindowOutOfRange`] - `start > end` or `end >= data.len()`.
/// * [`Error::BufferTooSmall`] - `out.len() < end + 1`.
pub fn dc_period_range_into<T: Sample>(
    data: &[T],
    start: usize,
    end: usize,
    out: &mut [T],
) -> Result<OutputRange> {
    validate_window(data.len(), start, end)?;
    validate_output("dc_period", out.len(), end)?;

    let lookback = dc_period_lookback();
    let first = start.max(lookback);
    if first > end {
        return Ok(OutputRange::empty());
    }

    let trailing = first - lookback;
    let mut engine = CycleEngine::new(&data[trailing..trailing + SMOOTHER_WARMUP]);
    for bar in trailing + SMOOTHER_WARMUP..=end {
        let sample = engine.step(bar, data[bar]);
        if bar >= first {
            out[bar] = sample.smooth_period;
        }
    }
    Ok(OutputRange { start: first, end: end + 1 })
}

/// Computes the dominant-cycle period for a whole series into `out`.
///
/// The first [`dc_period_lookback`] entries are set to NaN.
///
/// # Errors
///
/// * [`Error::EmptyInput`] - `data` is empty.
/// * [`Error::InsufficientData`] - fewer than [`dc_period_min_len`] samples.
/// * [`Error::BufferTooSmall`] - `out` shorter than `data`.
pub fn dc_period_into<T: Sample>(data: &[T], out: &mut [T]) -> Result<()> {
    let n = data.len();
    if n == 0 {
        return Err(Error::EmptyInput);
    }
    let min_len = dc_period_min_len();
    if n < min_len {
        return Err(Error::InsufficientData {
            indicator: "dc_period",
            required: min_len,
            actual: n,
        });
    }
    if out.len() < n {
        return Err(Error::BufferTooSmall {
            indicator: "dc_period",
            required: n,
            actual: out.len(),
        });
    }
    for slot in &mut out[..min_len - 1] {
        *slot = T::nan();
    }
    dc_period_range_into(data, 0, n - 1, out)?;
    Ok(())
}

/// Computes the dominant-cycle period for a whole series.
///
/// # Example
///
/// ```
/// use mesa_cycles::indicators::dc_period;
///
/// let prices: Vec<f64> = (0..128)
///     .map(|i| 100.0 + (i as f64 * 0.3).sin() * 5.0)
///     .collect();
/// let period = dc_period(&prices).unwrap();
/// assert!(period[31].is_nan());
/// assert!(period[32].is_finite());
/// assert!(period[64] >= 6.0 && period[64] <= 50.0);
/// ```
///
/// # Errors
///
/// Same as [`dc_period_into`].
pub fn dc_period<T: Sample>(data: &[T]) -> Result<Vec<T>> {
    let mut out = vec![T::nan(); data.len()];
    dc_period_into(data, &mut out)?;
    Ok(out)
}
