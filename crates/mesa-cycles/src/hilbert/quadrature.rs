//! Discretised quadrature (Hilbert) filter with parity-indexed delay lanes.
//!
//! One [`QuadFilter`] computes, per bar,
//!
//! ```text
//! out = (A·x[0] + B·x[-2] - B·x[-4] - A·x[-6]) · gain
//! ```
//!
//! where the lags are measured in bars and `gain` is the adaptive factor
//! derived from the previous bar's period estimate. Because the formula only
//! references even lags, even- and odd-indexed bars never share history:
//! each filter keeps two independent delay lanes and the bar's parity
//! selects which lane is read and written. The 3-slot rings of all filters
//! rotate together under a single cursor owned by the engine, advanced once
//! per even bar.

use crate::traits::Sample;

/// Leading/trailing coefficient of the discretised Hilbert transformer.
const A: f64 = 0.0962;
/// Inner coefficient of the discretised Hilbert transformer.
const B: f64 = 0.5769;

/// Number of same-parity bars a ring slot spans (a 6-bar lag).
pub(crate) const RING_SLOTS: usize = 3;

/// Bar parity; selects the active delay lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    /// Even-indexed bar.
    Even,
    /// Odd-indexed bar.
    Odd,
}

impl Parity {
    /// Parity of an absolute bar index.
    #[inline]
    #[must_use]
    pub fn of(bar: usize) -> Self {
        if bar % 2 == 0 {
            Self::Even
        } else {
            Self::Odd
        }
    }
}

/// Delay state for one parity: the scaled 6-bar-lag ring plus the carried
/// 2-/4-bar-lag terms.
#[derive(Debug, Clone, Copy)]
struct Lane<T> {
    ring: [T; RING_SLOTS],
    carry: T,
    last_input: T,
}

impl<T: Sample> Lane<T> {
    fn zeroed() -> Self {
        Self {
            ring: [T::zero(); RING_SLOTS],
            carry: T::zero(),
            last_input: T::zero(),
        }
    }
}

/// One quadrature FIR with independent even/odd delay lanes.
#[derive(Debug, Clone)]
pub(crate) struct QuadFilter<T> {
    even: Lane<T>,
    odd: Lane<T>,
}

impl<T: Sample> QuadFilter<T> {
    pub(crate) fn new() -> Self {
        Self {
            even: Lane::zeroed(),
            odd: Lane::zeroed(),
        }
    }

    /// Applies the filter for one bar.
    ///
    /// `slot` is the engine's shared ring cursor. Only the lane matching
    /// `parity` is touched; the other lane keeps the previous bar's state.
    #[inline]
    pub(crate) fn apply(&mut self, parity: Parity, slot: usize, input: T, gain: T) -> T {
        let lane = match parity {
            Parity::Even => &mut self.even,
            Parity::Odd => &mut self.odd,
        };
        let scaled = T::constant(A) * input;
        let mut out = -lane.ring[slot];
        lane.ring[slot] = scaled;
        out = out + scaled;
        out = out - lane.carry;
        lane.carry = T::constant(B) * lane.last_input;
        out = out + lane.carry;
        lane.last_input = input;
        out * gain
    }
}
