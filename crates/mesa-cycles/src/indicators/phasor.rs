//! In-phase / quadrature phasor pair.
//!
//! Exposes the engine's raw `I1`/`Q1` components directly, with no
//! post-processing, for callers building their own cycle logic on top of
//! the transform.
//!
//! # Lookback
//!
//! 32 bars, plus the configured unstable period for
//! [`CycleIndicator::Phasor`].

use crate::error::{Error, Result};
use crate::hilbert::{CycleEngine, SMOOTHER_WARMUP};
use crate::settings::{unstable_period, CycleIndicator};
use crate::traits::Sample;
use crate::window::{validate_output, validate_window, OutputRange};

const STRUCTURAL_LOOKBACK: usize = 32;

/// Owned output of [`phasor`]: the two component series.
#[derive(Debug, Clone)]
pub struct PhasorOutput<T> {
    /// In-phase component, one value per input bar.
    pub in_phase: Vec<T>,
    /// Quadrature component, one value per input bar.
    pub quadrature: Vec<T>,
}

/// Returns the current lookback for the phasor pair.
#[inline]
#[must_use]
pub fn phasor_lookback() -> usize {
    STRUCTURAL_LOOKBACK + unstable_period(CycleIndicator::Phasor)
}

/// Returns the minimum input length that yields one output sample.
#[inline]
#[must_use]
pub fn phasor_min_len() -> usize {
    phasor_lookback() + 1
}

/// Computes the phasor pair over the window `start..=end`.
///
/// Both buffers are written aligned for every index in the returned range;
/// entries outside it are untouched.
///
/// # Errors
///
/// * [`Error::EmptyInput`] - `data` is empty.
/// * [`Error::WindowOutOfRange`] - `start > end` or `end >= data.len()`.
/// * [`Error::BufferTooSmall`] - either buffer shorter than `end + 1`.
pub fn phasor_range_into<T: Sample>(
    data: &[T],
    start: usize,
    end: usize,
    in_phase_out: &mut [T],
    quadrature_out: &mut [T],
) -> Result<OutputRange> {
    validate_window(data.len(), start, end)?;
    validate_output("phasor", in_phase_out.len(), end)?;
    validate_output("phasor", quadrature_out.len(), end)?;

    let lookback = phasor_lookback();
    let first = start.max(lookback);
    if first > end {
        return Ok(OutputRange::empty());
    }

    let trailing = first - lookback;
    let mut engine = CycleEngine::new(&data[trailing..trailing + SMOOTHER_WARMUP]);
    for bar in trailing + SMOOTHER_WARMUP..=end {
        let sample = engine.step(bar, data[bar]);
        if bar >= first {
            in_phase_out[bar] = sample.in_phase;
            quadrature_out[bar] = sample.quadrature;
        }
    }
    Ok(OutputRange { start: first, end: end + 1 })
}

/// Computes the phasor pair for a whole series into caller buffers.
///
/// The first [`phasor_lookback`] entries of both buffers are set to NaN.
///
/// # Errors
///
/// * [`Error::EmptyInput`] - `data` is empty.
/// * [`Error::InsufficientData`] - fewer than [`phasor_min_len`] samples.
/// * [`Error::BufferTooSmall`] - either buffer shorter than `data`.
pub fn phasor_into<T: Sample>(
    data: &[T],
    in_phase_out: &mut [T],
    quadrature_out: &mut [T],
) -> Result<()> {
    let n = data.len();
    if n == 0 {
        return Err(Error::EmptyInput);
    }
    let min_len = phasor_min_len();
    if n < min_len {
        return Err(Error::InsufficientData {
            indicator: "phasor",
            required: min_len,
            actual: n,
        });
    }
    for (name, len) in [("phasor", in_phase_out.len()), ("phasor", quadrature_out.len())] {
        if len < n {
            return Err(Error::BufferTooSmall {
                indicator: name,
                required: n,
                actual: len,
            });
        }
    }
    for slot in &mut in_phase_out[..min_len - 1] {
        *slot = T::nan();
    }
    for slot in &mut quadrature_out[..min_len - 1] {
        *slot = T::nan();
    }
    phasor_range_into(data, 0, n - 1, in_phase_out, quadrature_out)?;
    Ok(())
}

/// Computes the phasor pair for a whole series.
///
/// # Example
///
/// ```
/// use mesa_cycles::indicators::phasor;
///
/// let prices: Vec<f64> = (0..128)
///     .map(|i| 100.0 + (i as f64 * 0.3).sin() * 5.0)
///     .collect();
/// let out = phasor(&prices).unwrap();
/// assert!(out.in_phase[31].is_nan());
/// assert!(out.in_phase[32].is_finite());
/// assert!(out.quadrature[32].is_finite());
/// ```
///
/// # Errors
///
/// Same as [`phasor_into`].
pub fn phasor<T: Sample>(data: &[T]) -> Result<PhasorOutput<T>> {
    let mut in_phase = vec![T::nan(); data.len()];
    let mut quadrature = vec![T::nan(); data.len()];
    phasor_into(data, &mut in_phase, &mut quadrature)?;
    Ok(PhasorOutput { in_phase, quadrature })
}
