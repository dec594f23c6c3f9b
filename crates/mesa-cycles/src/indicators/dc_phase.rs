//! Dominant-cycle phase.
//!
//! Correlates the recent smoothed prices against one cycle of sine and
//! cosine over a window of `round(smoothPeriod + 0.5)` bars and reports the
//! resulting phase angle in degrees, lag-compensated and wrapped into the
//! (−45°, 315°] band.
//!
//! # Lookback
//!
//! 63 bars, plus the configured unstable period for
//! [`CycleIndicator::DcPhase`]: the phase correlation needs a populated
//! price history on top of the transform's own warm-up.

use crate::error::{Error, Result};
use crate::hilbert::phase::PhaseExtractor;
use crate::hilbert::{CycleEngine, SMOOTHER_WARMUP};
use crate::settings::{unstable_period, CycleIndicator};
use crate::traits::Sample;
use crate::window::{validate_output, validate_window, OutputRange};

const STRUCTURAL_LOOKBACK: usize = 63;

/// Returns the current lookback for the dominant-cycle phase.
#[inline]
#[must_use]
pub fn dc_phase_lookback() -> usize {
    STRUCTURAL_LOOKBACK + unstable_period(CycleIndicator::DcPhase)
}

/// Returns the minimum input length that yields one output sample.
#[inline]
#[must_use]
pub fn dc_phase_min_len() -> usize {
    dc_phase_lookback() + 1
}

/// Computes the dominant-cycle phase over the window `start..=end`.
///
/// Output is written aligned for every index in the returned range; entries
/// outside it are untouched. A window that lies entirely inside the
/// lookback succeeds with an empty range.
///
/// # Errors
///
/// * [`Error::EmptyInput`] - `data` is empty.
/// * [`Error::WindowOutOfRange`] - `start > end` or `end >= data.len()`.
/// * [`Error::BufferTooSmall`] - `out.len() < end + 1`.
pub fn dc_phase_range_into<T: Sample>(
    data: &[T],
    start: usize,
    end: usize,
    out: &mut [T],
) -> Result<OutputRange> {
    validate_window(data.len(), start, end)?;
    validate_output("dc_phase", out.len(), end)?;

    let lookback = dc_phase_lookback();
    let first = start.max(lookback);
    if first > end {
        return Ok(OutputRange::empty());
    }

    let trailing = first - lookback;
    let mut engine = CycleEngine::new(&data[trailing..trailing + SMOOTHER_WARMUP]);
    let mut extractor = PhaseExtractor::new();
    for bar in trailing + SMOOTHER_WARMUP..=end {
        let sample = engine.step(bar, data[bar]);
        extractor.push(sample.smoothed);
        let phase = extractor.update(sample.smooth_period);
        if bar >= first {
            out[bar] = phase;
        }
    }
    Ok(OutputRange { start: first, end: end + 1 })
}

/// Computes the dominant-cycle phase for a whole series into `out`.
///
/// The first [`dc_phase_lookback`] entries are set to NaN.
///
/// # Errors
///
/// * [`Error::EmptyInput`] - `data` is empty.
/// * [`Error::InsufficientData`] - fewer than [`dc_phase_min_len`] samples.
/// * [`Error::BufferTooSmall`] - `out` shorter than `data`.
pub fn dc_phase_into<T: Sample>(data: &[T], out: &mut [T]) -> Result<()> {
    let n = data.len();
    if n == 0 {
        return Err(Error::EmptyInput);
    }
    let min_len = dc_phase_min_len();
    if n < min_len {
        return Err(Error::InsufficientData {
            indicator: "dc_phase",
            required: min_len,
            actual: n,
        });
    }
    if out.len() < n {
        return Err(Error::BufferTooSmall {
            indicator: "dc_phase",
            required: n,
            actual: out.len(),
        });
    }
    for slot in &mut out[..min_len - 1] {
        *slot = T::nan();
    }
    dc_phase_range_into(data, 0, n - 1, out)?;
    Ok(())
}

/// Computes the dominant-cycle phase for a whole series.
///
/// # Example
///
/// ```
/// use mesa_cycles::indicators::dc_phase;
///
/// let prices: Vec<f64> = (0..128)
///     .map(|i| 100.0 + (i as f64 * 0.3).sin() * 5.0)
///     .collect();
/// let phase = dc_phase(&prices).unwrap();
/// assert!(phase[62].is_nan());
/// assert!(phase[63].is_finite());
/// ```
///
/// # Errors
///
/// Same as [`dc_phase_into`].
pub fn dc_phase<T: Sample>(data: &[T]) -> Result<Vec<T>> {
    let mut out = vec![T::nan(); data.len()];
    dc_phase_into(data, &mut out)?;
    Ok(out)
}
