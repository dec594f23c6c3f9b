//! The shared adaptive cycle engine.
//!
//! [`CycleEngine`] threads the whole per-bar pipeline through one explicit
//! state value: smoothing, the four parity-laned quadrature filters, the
//! cross-parity in-phase bridge, the I2/Q2 blend, the homodyne discriminator
//! and the period clamp chain. Each indicator drives the engine bar by bar
//! and post-processes the returned [`CycleSample`]; state from bar *n* feeds
//! bar *n + 1*, most visibly through the adaptive lag factor
//! `0.075 · period + 0.54` consumed by the filters on the next bar.

use crate::traits::Sample;

use super::quadrature::{Parity, QuadFilter, RING_SLOTS};
use super::smoother::{PriceSmoother, SMOOTHER_WARMUP};

/// Degrees per radian.
const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Hard clamp bounds for the cycle period, in bars.
const MIN_PERIOD: f64 = 6.0;
/// Upper hard clamp for the cycle period, in bars.
const MAX_PERIOD: f64 = 50.0;

/// Per-bar observables shared by all six projections.
#[derive(Debug, Clone, Copy)]
pub struct CycleSample<T> {
    /// 4-tap weighted average of the raw input.
    pub smoothed: T,
    /// In-phase component `I1` (the detrender delayed three bars, bridged
    /// across parity).
    pub in_phase: T,
    /// Quadrature component `Q1`.
    pub quadrature: T,
    /// Smoothed cycle-period estimate, clamped to [6, 50].
    pub period: T,
    /// Doubly smoothed period consumed by the phase-based projections.
    pub smooth_period: T,
}

/// Cross-parity bridge: the detrender values from two and three bars ago on
/// one parity lane, read by the *other* parity's bars.
#[derive(Debug, Clone, Copy)]
struct InPhaseBridge<T> {
    prev2: T,
    prev3: T,
}

/// The adaptive cycle pipeline state, owned by exactly one call.
#[derive(Debug, Clone)]
pub struct CycleEngine<T> {
    smoother: PriceSmoother<T>,
    detrender: QuadFilter<T>,
    quadrature: QuadFilter<T>,
    advance_i: QuadFilter<T>,
    advance_q: QuadFilter<T>,
    /// Shared ring cursor for all four filters; advances on even bars only.
    slot: usize,
    even: InPhaseBridge<T>,
    odd: InPhaseBridge<T>,
    prev_i2: T,
    prev_q2: T,
    re: T,
    im: T,
    period: T,
    smooth_period: T,
}

impl<T: Sample> CycleEngine<T> {
    /// Builds an engine from the first [`SMOOTHER_WARMUP`] raw samples.
    ///
    /// The first three seed the smoother window; the remaining nine are run
    /// through it so the weighted window has fully settled before the first
    /// [`step`](Self::step). The period state starts at the lower clamp
    /// bound, which keeps the [6, 50] invariant inductive from bar one.
    ///
    /// # Panics
    ///
    /// Panics if `warmup` holds fewer than [`SMOOTHER_WARMUP`] samples; the
    /// indicator drivers always slice exactly that many.
    #[must_use]
    pub fn new(warmup: &[T]) -> Self {
        let mut smoother = PriceSmoother::seed(warmup[0], warmup[1], warmup[2]);
        for &sample in &warmup[3..SMOOTHER_WARMUP] {
            let _ = smoother.update(sample);
        }
        let zero = T::zero();
        Self {
            smoother,
            detrender: QuadFilter::new(),
            quadrature: QuadFilter::new(),
            advance_i: QuadFilter::new(),
            advance_q: QuadFilter::new(),
            slot: 0,
            even: InPhaseBridge { prev2: zero, prev3: zero },
            odd: InPhaseBridge { prev2: zero, prev3: zero },
            prev_i2: zero,
            prev_q2: zero,
            re: zero,
            im: zero,
            period: T::constant(MIN_PERIOD),
            smooth_period: T::constant(MIN_PERIOD),
        }
    }

    /// Advances the pipeline by one bar.
    ///
    /// `bar` is the absolute input index (its parity selects the active
    /// delay lanes), `price` the raw sample at that index.
    pub fn step(&mut self, bar: usize, price: T) -> CycleSample<T> {
        let gain = T::constant(0.075) * self.period + T::constant(0.54);
        let smoothed = self.smoother.update(price);

        let parity = Parity::of(bar);
        let slot = self.slot;
        let detrender = self.detrender.apply(parity, slot, smoothed, gain);
        let q1 = self.quadrature.apply(parity, slot, detrender, gain);

        // The bar's I1 is the active lane's three-bar-old detrender; the
        // phasor advance of I1 and Q1 yields the 90-degree-shifted pair used
        // to assemble I2/Q2. The opposite lane's bridge then takes this
        // bar's detrender for the bars ahead.
        let (i1, i2_raw, q2_raw) = match parity {
            Parity::Even => {
                let i1 = self.even.prev3;
                let ji = self.advance_i.apply(parity, slot, i1, gain);
                let jq = self.advance_q.apply(parity, slot, q1, gain);
                self.slot = (self.slot + 1) % RING_SLOTS;
                self.odd.prev3 = self.odd.prev2;
                self.odd.prev2 = detrender;
                (i1, i1 - jq, q1 + ji)
            }
            Parity::Odd => {
                let i1 = self.odd.prev3;
                let ji = self.advance_i.apply(parity, slot, i1, gain);
                let jq = self.advance_q.apply(parity, slot, q1, gain);
                self.even.prev3 = self.even.prev2;
                self.even.prev2 = detrender;
                (i1, i1 - jq, q1 + ji)
            }
        };

        let new_w = T::constant(0.2);
        let old_w = T::constant(0.8);
        let i2 = new_w * i2_raw + old_w * self.prev_i2;
        let q2 = new_w * q2_raw + old_w * self.prev_q2;

        // Homodyne discriminator: the rotation between consecutive smoothed
        // phasors encodes the instantaneous cycle period.
        self.re = new_w * (i2 * self.prev_i2 + q2 * self.prev_q2) + old_w * self.re;
        self.im = new_w * (i2 * self.prev_q2 - q2 * self.prev_i2) + old_w * self.im;
        self.prev_i2 = i2;
        self.prev_q2 = q2;

        let prev_period = self.period;
        let mut period = prev_period;
        if self.im != T::zero() && self.re != T::zero() {
            period = T::constant(360.0) / ((self.im / self.re).atan() * T::constant(RAD_TO_DEG));
        }
        let ceiling = T::constant(1.5) * prev_period;
        if period > ceiling {
            period = ceiling;
        }
        let floor = T::constant(0.67) * prev_period;
        if period < floor {
            period = floor;
        }
        if period < T::constant(MIN_PERIOD) {
            period = T::constant(MIN_PERIOD);
        } else if period > T::constant(MAX_PERIOD) {
            period = T::constant(MAX_PERIOD);
        }
        self.period = new_w * period + old_w * prev_period;
        self.smooth_period =
            T::constant(0.33) * self.period + T::constant(0.67) * self.smooth_period;

        CycleSample {
            smoothed,
            in_phase: i1,
            quadrature: q1,
            period: self.period,
            smooth_period: self.smooth_period,
        }
    }
}
