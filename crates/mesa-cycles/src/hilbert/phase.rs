//! Dominant-cycle phase extraction.
//!
//! The phase projections correlate the recent smoothed prices against one
//! cycle of sine/cosine - a miniature discrete correlation over the last
//! `round(smoothPeriod + 0.5)` bars, not a full transform - and convert the
//! result to a phase angle in degrees. The wrap rules are empirically tuned
//! and the sine-wave projection depends on reproducing them exactly: +90°
//! base correction, +360°/smoothPeriod for the one-bar smoothing lag, +180°
//! when the imaginary part is negative, a −360° wrap above 315°, and a ±90°
//! nudge of the carried phase when the imaginary part vanishes.

use crate::traits::Sample;

/// Degrees per radian.
const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Capacity of the smoothed-price history; one slot per bar of the largest
/// admissible cycle period.
pub(crate) const PRICE_RING_LEN: usize = 50;

/// Smoothed-price ring plus the carried phase angle.
#[derive(Debug, Clone)]
pub(crate) struct PhaseExtractor<T> {
    prices: [T; PRICE_RING_LEN],
    head: usize,
    dc_phase: T,
}

impl<T: Sample> PhaseExtractor<T> {
    pub(crate) fn new() -> Self {
        Self {
            prices: [T::zero(); PRICE_RING_LEN],
            head: 0,
            dc_phase: T::zero(),
        }
    }

    /// Records this bar's smoothed price.
    #[inline]
    pub(crate) fn push(&mut self, smoothed: T) {
        self.head = (self.head + 1) % PRICE_RING_LEN;
        self.prices[self.head] = smoothed;
    }

    /// Computes the dominant-cycle phase for the bar whose smoothed price
    /// was just pushed, in degrees.
    pub(crate) fn update(&mut self, smooth_period: T) -> T {
        let span = (smooth_period + T::constant(0.5))
            .to_usize()
            .unwrap_or(0)
            .min(PRICE_RING_LEN);

        let mut real_part = T::zero();
        let mut imag_part = T::zero();
        if span > 0 {
            let span_t = T::constant(span as f64);
            let mut idx = self.head;
            for k in 0..span {
                let angle = T::constant(k as f64) * T::constant(std::f64::consts::TAU) / span_t;
                let price = self.prices[idx];
                real_part = real_part + angle.sin() * price;
                imag_part = imag_part + angle.cos() * price;
                idx = if idx == 0 { PRICE_RING_LEN - 1 } else { idx - 1 };
            }
        }

        let magnitude = imag_part.abs();
        if magnitude > T::zero() {
            self.dc_phase = (real_part / imag_part).atan() * T::constant(RAD_TO_DEG);
        } else if magnitude <= T::constant(0.01) {
            if real_part < T::zero() {
                self.dc_phase = self.dc_phase - T::constant(90.0);
            } else if real_part > T::zero() {
                self.dc_phase = self.dc_phase + T::constant(90.0);
            }
        }

        self.dc_phase = self.dc_phase + T::constant(90.0);
        // One bar of lag from the 4-tap weighted smoothing.
        self.dc_phase = self.dc_phase + T::constant(360.0) / smooth_period;
        if imag_part < T::zero() {
            self.dc_phase = self.dc_phase + T::constant(180.0);
        }
        if self.dc_phase > T::constant(315.0) {
            self.dc_phase = self.dc_phase - T::constant(360.0);
        }
        self.dc_phase
    }
}
