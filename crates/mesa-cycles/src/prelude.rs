//! Convenient glob import for typical usage.
//!
//! ```
//! use mesa_cycles::prelude::*;
//!
//! let prices: Vec<f64> = (0..128)
//!     .map(|i| 100.0 + (i as f64 * 0.3).sin() * 5.0)
//!     .collect();
//! let period = dc_period(&prices).unwrap();
//! let wave = sine_wave(&prices).unwrap();
//! assert_eq!(period.len(), wave.sine.len());
//! ```

pub use crate::error::{Error, Result};
pub use crate::settings::{
    set_unstable_period, set_unstable_period_all, unstable_period, CycleIndicator,
};
pub use crate::traits::Sample;
pub use crate::window::OutputRange;

pub use crate::indicators::{
    dc_period, dc_period_into, dc_period_lookback, dc_period_min_len, dc_period_range_into,
    dc_phase, dc_phase_into, dc_phase_lookback, dc_phase_min_len, dc_phase_range_into, mama,
    mama_into, mama_lookback, mama_min_len, mama_range_into, mama_with_limits, phasor,
    phasor_into, phasor_lookback, phasor_min_len, phasor_range_into, sine_wave, sine_wave_into,
    sine_wave_lookback, sine_wave_min_len, sine_wave_range_into, trendline, trendline_into,
    trendline_lookback, trendline_min_len, trendline_range_into, MamaOutput, PhasorOutput,
    SineWaveOutput,
};
