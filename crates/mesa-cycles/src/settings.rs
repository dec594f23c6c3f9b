//! Process-wide unstable-period configuration.
//!
//! The adaptive engine carries internal state whose early values depend on
//! how the warm-up happened to unfold. Callers who distrust those early bars
//! can widen each indicator's warm-up by an extra number of bars: the
//! *unstable period*. The setting is a read-mostly table consulted once per
//! call - configure it before computation starts; concurrent readers are
//! safe, and results are deterministic for a fixed table.
//!
//! ```
//! use mesa_cycles::settings::{set_unstable_period, unstable_period, CycleIndicator};
//! use mesa_cycles::indicators::dc_period_lookback;
//!
//! let before = dc_period_lookback();
//! set_unstable_period(CycleIndicator::DcPeriod, 8);
//! assert_eq!(dc_period_lookback(), before + 8);
//! set_unstable_period(CycleIndicator::DcPeriod, 0);
//! assert_eq!(unstable_period(CycleIndicator::DcPeriod), 0);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};

/// Identifies one adaptive-cycle indicator in the unstable-period table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CycleIndicator {
    /// Dominant-cycle period.
    DcPeriod,
    /// Dominant-cycle phase.
    DcPhase,
    /// In-phase/quadrature phasor pair.
    Phasor,
    /// Sine-wave cycle indicator.
    SineWave,
    /// Instantaneous trendline.
    Trendline,
    /// MAMA/FAMA adaptive moving-average pair.
    Mama,
}

const TABLE_LEN: usize = 6;

static UNSTABLE_PERIODS: [AtomicUsize; TABLE_LEN] = [
    AtomicUsize::new(0),
    AtomicUsize::new(0),
    AtomicUsize::new(0),
    AtomicUsize::new(0),
    AtomicUsize::new(0),
    AtomicUsize::new(0),
];

impl CycleIndicator {
    #[inline]
    const fn slot(self) -> usize {
        match self {
            Self::DcPeriod => 0,
            Self::DcPhase => 1,
            Self::Phasor => 2,
            Self::SineWave => 3,
            Self::Trendline => 4,
            Self::Mama => 5,
        }
    }
}

/// Sets the extra warm-up bars discarded by `indicator` on every call.
#[inline]
pub fn set_unstable_period(indicator: CycleIndicator, bars: usize) {
    UNSTABLE_PERIODS[indicator.slot()].store(bars, Ordering::Relaxed);
}

/// Sets the same unstable period for all six indicators.
pub fn set_unstable_period_all(bars: usize) {
    for slot in &UNSTABLE_PERIODS {
        slot.store(bars, Ordering::Relaxed);
    }
}

/// Returns the configured unstable period for `indicator` (default 0).
#[inline]
#[must_use]
pub fn unstable_period(indicator: CycleIndicator) -> usize {
    UNSTABLE_PERIODS[indicator.slot()].load(Ordering::Relaxed)
}
