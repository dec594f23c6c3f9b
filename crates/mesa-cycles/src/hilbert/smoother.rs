//! Incremental 4-tap weighted smoother.
//!
//! Every bar the engine consumes a weighted average of the four most recent
//! raw samples, weights (4, 3, 2, 1)/10 from newest to oldest. The smoother
//! keeps a running weighted sum and a running plain window sum so each
//! update is O(1): add the newest sample with full weight, emit, then decay
//! every in-window sample by one weight step by subtracting the window sum.

use crate::traits::Sample;

/// Number of input samples consumed before the first engine bar: three seed
/// samples plus nine discarded smoothed values while the window settles.
pub const SMOOTHER_WARMUP: usize = 12;

const TAPS: usize = 4;

/// Rolling 4-tap weighted-average state.
#[derive(Debug, Clone)]
pub struct PriceSmoother<T> {
    /// Plain sum of the samples currently in the window.
    window_sum: T,
    /// Weighted sum, already decayed for the next update.
    weighted_sum: T,
    /// The last `TAPS` raw samples; `head` points at the slot holding the
    /// sample about to leave the window.
    ring: [T; TAPS],
    head: usize,
}

impl<T: Sample> PriceSmoother<T> {
    /// Seeds the window with the first three raw samples.
    ///
    /// The fourth sample arrives through [`update`](Self::update), which
    /// also produces the first (still settling) smoothed value.
    #[must_use]
    pub fn seed(first: T, second: T, third: T) -> Self {
        let two = T::constant(2.0);
        let three = T::constant(3.0);
        Self {
            window_sum: first + second + third,
            weighted_sum: first + second * two + third * three,
            ring: [first, second, third, T::zero()],
            head: TAPS - 1,
        }
    }

    /// Pushes the next raw sample and returns the smoothed value.
    #[inline]
    pub fn update(&mut self, sample: T) -> T {
        let leaving = self.ring[self.head];
        self.window_sum = self.window_sum + sample - leaving;
        self.weighted_sum = self.weighted_sum + sample * T::constant(4.0);
        let smoothed = self.weighted_sum * T::constant(0.1);
        self.weighted_sum = self.weighted_sum - self.window_sum;
        self.ring[self.head] = sample;
        self.head = (self.head + 1) % TAPS;
        smoothed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn direct_wma4(w: &[f64]) -> f64 {
        debug_assert_eq!(w.len(), 4);
        (4.0 * w[3] + 3.0 * w[2] + 2.0 * w[1] + w[0]) / 10.0
    }

    #[test]
    fn first_update_matches_direct_formula() {
        let mut s = PriceSmoother::seed(1.0, 2.0, 3.0);
        let got = s.update(4.0);
        assert!((got - direct_wma4(&[1.0, 2.0, 3.0, 4.0])).abs() < 1e-12);
    }

    #[test]
    fn rolling_updates_match_direct_formula() {
        let data: Vec<f64> = (0..40).map(|i| 100.0 + (i as f64 * 0.7).sin() * 5.0).collect();
        let mut s = PriceSmoother::seed(data[0], data[1], data[2]);
        for i in 3..data.len() {
            let got = s.update(data[i]);
            let want = direct_wma4(&data[i - 3..=i]);
            assert!(
                (got - want).abs() < 1e-9,
                "bar {i}: got {got}, want {want}"
            );
        }
    }

    #[test]
    fn constant_input_reaches_steady_state() {
        let mut s = PriceSmoother::seed(42.5, 42.5, 42.5);
        let mut last = 0.0_f64;
        for _ in 0..8 {
            last = s.update(42.5);
        }
        assert!((last - 42.5).abs() < 1e-12);
    }

    #[test]
    fn works_in_f32() {
        let mut s = PriceSmoother::<f32>::seed(1.0, 2.0, 3.0);
        let got = s.update(4.0);
        assert!((got - 3.0).abs() < 1e-5);
    }
}
