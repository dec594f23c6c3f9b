//! MAMA / FAMA adaptive moving-average pair.
//!
//! The smoothing factor adapts to the rate of phase change measured by the
//! Hilbert engine: fast phase movement (short cycles) tightens the average
//! toward `fast_limit`, slow movement relaxes it toward `slow_limit`. FAMA
//! follows MAMA at half the bar-to-bar alpha, so the two cross decisively
//! only when price commits to a direction.
//!
//! # Parameters
//!
//! `fast_limit` and `slow_limit` must lie in [0.01, 0.99]; the defaults are
//! 0.5 and 0.05.
//!
//! # Lookback
//!
//! 32 bars, plus the configured unstable period for
//! [`CycleIndicator::Mama`].

use crate::error::{Error, Result};
use crate::hilbert::{CycleEngine, SMOOTHER_WARMUP};
use crate::settings::{unstable_period, CycleIndicator};
use crate::traits::Sample;
use crate::window::{validate_output, validate_window, OutputRange};

const STRUCTURAL_LOOKBACK: usize = 32;

/// Smallest accepted value for either limit.
pub const MIN_LIMIT: f64 = 0.01;
/// Largest accepted value for either limit.
pub const MAX_LIMIT: f64 = 0.99;

/// Default `fast_limit`.
pub const DEFAULT_FAST_LIMIT: f64 = 0.5;
/// Default `slow_limit`.
pub const DEFAULT_SLOW_LIMIT: f64 = 0.05;

/// Degrees per radian.
const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Owned output of [`mama`]: the adaptive average and its follower.
#[derive(Debug, Clone)]
pub struct MamaOutput<T> {
    /// MESA adaptive moving average.
    pub mama: Vec<T>,
    /// Following adaptive moving average.
    pub fama: Vec<T>,
}

/// Returns the current lookback for the MAMA/FAMA pair.
#[inline]
#[must_use]
pub fn mama_lookback() -> usize {
    STRUCTURAL_LOOKBACK + unstable_period(CycleIndicator::Mama)
}

/// Returns the minimum input length that yields one output sample.
#[inline]
#[must_use]
pub fn mama_min_len() -> usize {
    mama_lookback() + 1
}

fn validate_limit<T: Sample>(param: &'static str, value: T) -> Result<()> {
    if value < T::constant(MIN_LIMIT) || value > T::constant(MAX_LIMIT) {
        return Err(Error::LimitOutOfRange {
            param,
            value: value.as_f64(),
            min: MIN_LIMIT,
            max: MAX_LIMIT,
        });
    }
    Ok(())
}

/// Computes MAMA/FAMA over the window `start..=end` with explicit limits.
///
/// Parameter and window validation happens before any computation; on error
/// the output buffers are untouched. Both buffers are written aligned for
/// every index in the returned range; entries outside it are untouched.
///
/// # Errors
///
/// * [`Error::LimitOutOfRange`] - either limit outside [0.01, 0.99].
/// * [`Error::EmptyInput`] - `data` is empty.
/// * [`Error::WindowOutOfRange`] - `start > end` or `end >= data.len()`.
/// * [`Error::BufferTooSmall`] - either buffer shorter than `end + 1`.
pub fn mama_range_into<T: Sample>(
    data: &[T],
    start: usize,
    end: usize,
    fast_limit: T,
    slow_limit: T,
    mama_out: &mut [T],
    fama_out: &mut [T],
) -> Result<OutputRange> {
    validate_limit("fast_limit", fast_limit)?;
    validate_limit("slow_limit", slow_limit)?;
    validate_window(data.len(), start, end)?;
    validate_output("mama", mama_out.len(), end)?;
    validate_output("mama", fama_out.len(), end)?;

    let lookback = mama_lookback();
    let first = start.max(lookback);
    if first > end {
        return Ok(OutputRange::empty());
    }

    let trailing = first - lookback;
    let mut engine = CycleEngine::new(&data[trailing..trailing + SMOOTHER_WARMUP]);

    // Seeding from the first warm-up price keeps both averages convex
    // combinations of observed prices from the very first bar.
    let mut mama = data[trailing];
    let mut fama = data[trailing];
    let mut prev_phase = T::zero();
    let rad_to_deg = T::constant(RAD_TO_DEG);
    let one = T::one();
    let half = T::constant(0.5);

    for bar in trailing + SMOOTHER_WARMUP..=end {
        let sample = engine.step(bar, data[bar]);

        let phase = if sample.in_phase != T::zero() {
            (sample.quadrature / sample.in_phase).atan() * rad_to_deg
        } else {
            T::zero()
        };
        let mut delta_phase = prev_phase - phase;
        prev_phase = phase;
        if delta_phase < one {
            delta_phase = one;
        }
        let alpha = if delta_phase > one {
            let ratio = fast_limit / delta_phase;
            if ratio < slow_limit {
                slow_limit
            } else {
                ratio
            }
        } else {
            fast_limit
        };

        let price = data[bar];
        mama = alpha * price + (one - alpha) * mama;
        let follow = half * alpha;
        fama = follow * mama + (one - follow) * fama;

        if bar >= first {
            mama_out[bar] = mama;
            fama_out[bar] = fama;
        }
    }
    Ok(OutputRange { start: first, end: end + 1 })
}

/// Computes MAMA/FAMA for a whole series into caller buffers, with explicit
/// limits.
///
/// The first [`mama_lookback`] entries of both buffers are set to NaN.
///
/// # Errors
///
/// * [`Error::LimitOutOfRange`] - either limit outside [0.01, 0.99].
/// * [`Error::EmptyInput`] - `data` is empty.
/// * [`Error::InsufficientData`] - fewer than [`mama_min_len`] samples.
/// * [`Error::BufferTooSmall`] - either buffer shorter than `data`.
pub fn mama_into<T: Sample>(
    data: &[T],
    fast_limit: T,
    slow_limit: T,
    mama_out: &mut [T],
    fama_out: &mut [T],
) -> Result<()> {
    validate_limit("fast_limit", fast_limit)?;
    validate_limit("slow_limit", slow_limit)?;
    let n = data.len();
    if n == 0 {
        return Err(Error::EmptyInput);
    }
    let min_len = mama_min_len();
    if n < min_len {
        return Err(Error::InsufficientData {
            indicator: "mama",
            required: min_len,
            actual: n,
        });
    }
    for len in [mama_out.len(), fama_out.len()] {
        if len < n {
            return Err(Error::BufferTooSmall {
                indicator: "mama",
                required: n,
                actual: len,
            });
        }
    }
    for slot in &mut mama_out[..min_len - 1] {
        *slot = T::nan();
    }
    for slot in &mut fama_out[..min_len - 1] {
        *slot = T::nan();
    }
    mama_range_into(data, 0, n - 1, fast_limit, slow_limit, mama_out, fama_out)?;
    Ok(())
}

/// Computes MAMA/FAMA with explicit limits.
///
/// # Errors
///
/// Same as [`mama_into`].
pub fn mama_with_limits<T: Sample>(
    data: &[T],
    fast_limit: T,
    slow_limit: T,
) -> Result<MamaOutput<T>> {
    let mut mama_out = vec![T::nan(); data.len()];
    let mut fama_out = vec![T::nan(); data.len()];
    mama_into(data, fast_limit, slow_limit, &mut mama_out, &mut fama_out)?;
    Ok(MamaOutput { mama: mama_out, fama: fama_out })
}

/// Computes MAMA/FAMA with the default limits (0.5, 0.05).
///
/// # Example
///
/// ```
/// use mesa_cycles::indicators::mama;
///
/// let prices: Vec<f64> = (0..128)
///     .map(|i| 100.0 + (i as f64 * 0.3).sin() * 5.0)
///     .collect();
/// let out = mama(&prices).unwrap();
/// assert!(out.mama[31].is_nan());
/// assert!(out.mama[32].is_finite());
/// assert!(out.fama[32].is_finite());
/// ```
///
/// # Errors
///
/// Same as [`mama_into`].
pub fn mama<T: Sample>(data: &[T]) -> Result<MamaOutput<T>> {
    mama_with_limits(
        data,
        T::constant(DEFAULT_FAST_LIMIT),
        T::constant(DEFAULT_SLOW_LIMIT),
    )
}
