//! Sine-wave cycle indicator.
//!
//! Projects the dominant-cycle phase onto `sin(phase)` and
//! `sin(phase + 45°)`. The two series cross near cycle turning points, a
//! quarter cycle before the price itself turns, which is the indicator's
//! whole purpose. The phase is computed inline with exactly the same wrap
//! behaviour as the dominant-cycle phase indicator.
//!
//! # Lookback
//!
//! 63 bars, plus the configured unstable period for
//! [`CycleIndicator::SineWave`].

use crate::error::{Error, Result};
use crate::hilbert::phase::PhaseExtractor;
use crate::hilbert::{CycleEngine, SMOOTHER_WARMUP};
use crate::settings::{unstable_period, CycleIndicator};
use crate::traits::Sample;
use crate::window::{validate_output, validate_window, OutputRange};

const STRUCTURAL_LOOKBACK: usize = 63;

/// Degrees-to-radians factor.
const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Owned output of [`sine_wave`]: the sine and lead-sine series.
#[derive(Debug, Clone)]
pub struct SineWaveOutput<T> {
    /// `sin(phase)` per bar.
    pub sine: Vec<T>,
    /// `sin(phase + 45°)` per bar.
    pub lead_sine: Vec<T>,
}

/// Returns the current lookback for the sine-wave indicator.
#[inline]
#[must_use]
pub fn sine_wave_lookback() -> usize {
    STRUCTURAL_LOOKBACK + unstable_period(CycleIndicator::SineWave)
}

/// Returns the minimum input length that yields one output sample.
#[inline]
#[must_use]
pub fn sine_wave_min_len() -> usize {
    sine_wave_lookback() + 1
}

/// Computes the sine-wave pair over the window `start..=end`.
///
/// Both buffers are written aligned for every index in the returned range;
/// entries outside it are untouched.
///
/// # Errors
///
/// * [`Error::EmptyInput`] - `data` is empty.
/// * [`Error::WindowOutOfRange`] - `start > end` or `end >= data.len()`.
/// * [`Error::BufferTooSmall`] - either buffer shorter than `end + 1`.
pub fn sine_wave_range_into<T: Sample>(
    data: &[T],
    start: usize,
    end: usize,
    sine_out: &mut [T],
    lead_sine_out: &mut [T],
) -> Result<OutputRange> {
    validate_window(data.len(), start, end)?;
    validate_output("sine_wave", sine_out.len(), end)?;
    validate_output("sine_wave", lead_sine_out.len(), end)?;

    let lookback = sine_wave_lookback();
    let first = start.max(lookback);
    if first > end {
        return Ok(OutputRange::empty());
    }

    let deg_to_rad = T::constant(DEG_TO_RAD);
    let lead = T::constant(45.0);
    let trailing = first - lookback;
    let mut engine = CycleEngine::new(&data[trailing..trailing + SMOOTHER_WARMUP]);
    let mut extractor = PhaseExtractor::new();
    for bar in trailing + SMOOTHER_WARMUP..=end {
        let sample = engine.step(bar, data[bar]);
        extractor.push(sample.smoothed);
        let phase = extractor.update(sample.smooth_period);
        if bar >= first {
            sine_out[bar] = (phase * deg_to_rad).sin();
            lead_sine_out[bar] = ((phase + lead) * deg_to_rad).sin();
        }
    }
    Ok(OutputRange { start: first, end: end + 1 })
}

/// Computes the sine-wave pair for a whole series into caller buffers.
///
/// The first [`sine_wave_lookback`] entries of both buffers are set to NaN.
///
/// # Errors
///
/// * [`Error::EmptyInput`] - `data` is empty.
/// * [`Error::InsufficientData`] - fewer than [`sine_wave_min_len`] samples.
/// * [`Error::BufferTooSmall`] - either buffer shorter than `data`.
pub fn sine_wave_into<T: Sample>(
    data: &[T],
    sine_out: &mut [T],
    lead_sine_out: &mut [T],
) -> Result<()> {
    let n = data.len();
    if n == 0 {
        return Err(Error::EmptyInput);
    }
    let min_len = sine_wave_min_len();
    if n < min_len {
        return Err(Error::InsufficientData {
            indicator: "sine_wave",
            required: min_len,
            actual: n,
        });
    }
    for len in [sine_out.len(), lead_sine_out.len()] {
        if len < n {
            return Err(Error::BufferTooSmall {
                indicator: "sine_wave",
                required: n,
                actual: len,
            });
        }
    }
    for slot in &mut sine_out[..min_len - 1] {
        *slot = T::nan();
    }
    for slot in &mut lead_sine_out[..min_len - 1] {
        *slot = T::nan();
    }
    sine_wave_range_into(data, 0, n - 1, sine_out, lead_sine_out)?;
    Ok(())
}

/// Computes the sine-wave pair for a whole series.
///
/// # Example
///
/// ```
/// use mesa_cycles::indicators::sine_wave;
///
/// let prices: Vec<f64> = (0..128)
///     .map(|i| 100.0 + (i as f64 * 0.3).sin() * 5.0)
///     .collect();
/// let out = sine_wave(&prices).unwrap();
/// assert!(out.sine[62].is_nan());
/// assert!(out.sine[63] >= -1.0 && out.sine[63] <= 1.0);
/// assert!(out.lead_sine[63] >= -1.0 && out.lead_sine[63] <= 1.0);
/// ```
///
/// # Errors
///
/// Same as [`sine_wave_into`].
pub fn sine_wave<T: Sample>(data: &[T]) -> Result<SineWaveOutput<T>> {
    let mut sine = vec![T::nan(); data.len()];
    let mut lead_sine = vec![T::nan(); data.len()];
    sine_wave_into(data, &mut sine, &mut lead_sine)?;
    Ok(SineWaveOutput { sine, lead_sine })
}
