//! mesa-cycles: Hilbert-Transform adaptive cycle indicators.
//!
//! This crate implements the adaptive cycle engine behind six classic
//! indicators: dominant-cycle period and phase, the in-phase/quadrature
//! phasor pair, the sine-wave cycle indicator, the instantaneous trendline,
//! and the MAMA/FAMA adaptive moving-average pair. A discrete quadrature
//! (Hilbert) transform with a period-dependent lag tracks the dominant cycle
//! bar by bar; a homodyne discriminator feeds the estimated period back into
//! the transform, and each indicator is a different projection of that
//! shared state.
//!
//! # Quick start
//!
//! ```
//! use mesa_cycles::indicators::{dc_period, mama};
//!
//! let prices: Vec<f64> = (0..200)
//!     .map(|i| 100.0 + 10.0 * (i as f64 * std::f64::consts::TAU / 20.0).sin())
//!     .collect();
//!
//! // Dominant cycle length in bars, clamped to [6, 50].
//! let period = dc_period(&prices).unwrap();
//! assert!(period[150] > 6.0 && period[150] < 50.0);
//!
//! // Adaptive moving-average pair.
//! let averages = mama(&prices).unwrap();
//! assert!(averages.mama[150].is_finite());
//! ```
//!
//! # Calling conventions
//!
//! Each indicator offers three entry points: an allocating whole-series
//! call (`dc_period`), a whole-series call into caller buffers
//! (`dc_period_into`), and a windowed call (`dc_period_range_into`) that
//! computes an inclusive index window `[start, end]` and reports the
//! half-open [`OutputRange`] actually produced. Output warm-up is
//! documented per indicator by its `_lookback()` function and can be
//! widened globally through [`settings`].
//!
//! # Numeric behaviour
//!
//! All computations are generic over `f32`/`f64` via [`Sample`]. Results
//! are deterministic: a fixed input, window, and unstable-period
//! configuration always produces bit-identical output. Degenerate
//! denominators inside the engine hold the previous state instead of
//! emitting NaN or infinity.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::many_single_char_names)]

pub mod batch;
pub mod error;
pub mod hilbert;
pub mod indicators;
pub mod prelude;
pub mod settings;
pub mod traits;
pub mod utils;
mod window;

pub use error::{Error, Result};
pub use traits::Sample;
pub use window::OutputRange;
