//! Instantaneous trendline.
//!
//! Averages the most recent `round(smoothPeriod + 0.5)` raw samples - an
//! adaptive-span mean that always covers one dominant cycle, so the cyclic
//! component integrates out - then blends the last four such means with
//! weights (4, 3, 2, 1)/10 to suppress the residual wobble.
//!
//! # Lookback
//!
//! 63 bars, plus the configured unstable period for
//! [`CycleIndicator::Trendline`].

use crate::error::{Error, Result};
use crate::hilbert::{CycleEngine, SMOOTHER_WARMUP};
use crate::settings::{unstable_period, CycleIndicator};
use crate::traits::Sample;
use crate::window::{validate_output, validate_window, OutputRange};

const STRUCTURAL_LOOKBACK: usize = 63;

/// Returns the current lookback for the instantaneous trendline.
#[inline]
#[must_use]
pub fn trendline_lookback() -> usize {
    STRUCTURAL_LOOKBACK + unstable_period(CycleIndicator::Trendline)
}

/// Returns the minimum input length that yields one output sample.
#[inline]
#[must_use]
pub fn trendline_min_len() -> usize {
    trendline_lookback() + 1
}

/// Computes the instantaneous trendline over the window `start..=end`.
///
/// Output is written aligned for every index in the returned range; entries
/// outside it are untouched.
///
/// # Errors
///
/// * [`Error::EmptyInput`] - `data` is empty.
/// * [`Error::WindowOutOfRange`] - `start > end` or `end >= data.len()`.
/// * [`Error::BufferTooSmall`] - `out.len() < end + 1`.
pub fn trendline_range_into<T: Sample>(
    data: &[T],
    start: usize,
    end: usize,
    out: &mut [T],
) -> Result<OutputRange> {
    validate_window(data.len(), start, end)?;
    validate_output("trendline", out.len(), end)?;

    let lookback = trendline_lookback();
    let first = start.max(lookback);
    if first > end {
        return Ok(OutputRange::empty());
    }

    let trailing = first - lookback;
    let mut engine = CycleEngine::new(&data[trailing..trailing + SMOOTHER_WARMUP]);
    let mut trend1 = T::zero();
    let mut trend2 = T::zero();
    let mut trend3 = T::zero();
    for bar in trailing + SMOOTHER_WARMUP..=end {
        let sample = engine.step(bar, data[bar]);

        // Span of the adaptive mean, capped at the bars this call has
        // consumed so far; in the output region the cap is never active
        // (span <= 50 against >= 63 bars of history).
        let span = (sample.smooth_period + T::constant(0.5))
            .to_usize()
            .unwrap_or(0)
            .min(bar - trailing + 1);
        let mut mean = T::zero();
        for offset in 0..span {
            mean = mean + data[bar - offset];
        }
        if span > 0 {
            mean = mean / T::constant(span as f64);
        }

        let blended = (T::constant(4.0) * mean
            + T::constant(3.0) * trend1
            + T::constant(2.0) * trend2
            + trend3)
            / T::constant(10.0);
        trend3 = trend2;
        trend2 = trend1;
        trend1 = mean;

        if bar >= first {
            out[bar] = blended;
        }
    }
    Ok(OutputRange { start: first, end: end + 1 })
}

/// Computes the instantaneous trendline for a whole series into `out`.
///
/// The first [`trendline_lookback`] entries are set to NaN.
///
/// # Errors
///
/// * [`Error::EmptyInput`] - `data` is empty.
/// * [`Error::InsufficientData`] - fewer than [`trendline_min_len`] samples.
/// * [`Error::BufferTooSmall`] - `out` shorter than `data`.
pub fn trendline_into<T: Sample>(data: &[T], out: &mut [T]) -> Result<()> {
    let n = data.len();
    if n == 0 {
        return Err(Error::EmptyInput);
    }
    let min_len = trendline_min_len();
    if n < min_len {
        return Err(Error::InsufficientData {
            indicator: "trendline",
            required: min_len,
            actual: n,
        });
    }
    if out.len() < n {
        return Err(Error::BufferTooSmall {
            indicator: "trendline",
            required: n,
            actual: out.len(),
        });
    }
    for slot in &mut out[..min_len - 1] {
        *slot = T::nan();
    }
    trendline_range_into(data, 0, n - 1, out)?;
    Ok(())
}

/// Computes the instantaneous trendline for a whole series.
///
/// # Example
///
/// ```
/// use mesa_cycles::indicators::trendline;
///
/// let prices: Vec<f64> = (0..128)
///     .map(|i| 100.0 + (i as f64 * 0.3).sin() * 5.0)
///     .collect();
/// let trend = trendline(&prices).unwrap();
/// assert!(trend[62].is_nan());
/// assert!(trend[63].is_finite());
/// ```
///
/// # Errors
///
/// Same as [`trendline_into`].
pub fn trendline<T: Sample>(data: &[T]) -> Result<Vec<T>> {
    let mut out = vec![T::nan(); data.len()];
    trendline_into(data, &mut out)?;
    Ok(out)
}
