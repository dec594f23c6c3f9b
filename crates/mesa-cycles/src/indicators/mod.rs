//! The six cycle-indicator projections.
//!
//! Every indicator shares the same adaptive pipeline (see
//! [`crate::hilbert`]) and the same calling convention:
//!
//! - `<name>_lookback()` / `<name>_min_len()` - warm-up reporting; depends
//!   only on the unstable-period configuration, never on data.
//! - `<name>_range_into(data, start, end, out...)` - windowed computation
//!   into caller buffers, returning the [`OutputRange`](crate::OutputRange)
//!   actually produced. Insufficient history is a successful empty range.
//! - `<name>_into(data, out...)` - whole-series computation with a NaN
//!   lookback prefix.
//! - `<name>(data)` - allocating wrapper.
//!
//! | Indicator | Output | Lookback |
//! |---|---|---|
//! | [`dc_period()`] | dominant-cycle period, bars | 32 |
//! | [`dc_phase()`] | dominant-cycle phase, degrees | 63 |
//! | [`phasor()`] | raw I1/Q1 pair | 32 |
//! | [`sine_wave()`] | sine and 45°-lead sine | 63 |
//! | [`trendline()`] | adaptive instantaneous trendline | 63 |
//! | [`mama()`] | MAMA/FAMA adaptive average pair | 32 |

pub mod dc_period;
pub mod dc_phase;
pub mod mama;
pub mod phasor;
pub mod sine_wave;
pub mod trendline;

pub use dc_period::{dc_period, dc_period_into, dc_period_lookback, dc_period_min_len, dc_period_range_into};
pub use dc_phase::{dc_phase, dc_phase_into, dc_phase_lookback, dc_phase_min_len, dc_phase_range_into};
pub use mama::{
    mama, mama_into, mama_lookback, mama_min_len, mama_range_into, mama_with_limits, MamaOutput,
    DEFAULT_FAST_LIMIT, DEFAULT_SLOW_LIMIT,
};
pub use phasor::{phasor, phasor_into, phasor_lookback, phasor_min_len, phasor_range_into, PhasorOutput};
pub use sine_wave::{
    sine_wave, sine_wave_into, sine_wave_lookback, sine_wave_min_len, sine_wave_range_into,
    SineWaveOutput,
};
pub use trendline::{
    trendline, trendline_into, trendline_lookback, trendline_min_len, trendline_range_into,
};
