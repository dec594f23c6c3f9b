//! Error types for cycle-indicator computation.
//!
//! Every failure is detected before the per-bar loop starts and reported
//! synchronously; nothing inside the hot loop can fail. Numerical
//! degeneracies (zero denominators in the period discriminator or the phase
//! arctangent) are not errors - the engine holds the previous state instead
//! of propagating NaN or infinity.

use thiserror::Error;

/// The error type shared by all indicator entry points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The input series contains no samples.
    #[error("empty input: no samples provided")]
    EmptyInput,

    /// The input series is too short for the whole-series convenience API.
    ///
    /// Returned only by the allocating/`_into` wrappers. The windowed
    /// `_range_into` calls report insufficient history as a successful
    /// empty [`OutputRange`](crate::OutputRange) instead.
    #[error("insufficient data for {indicator}: required {required} samples, got {actual}")]
    InsufficientData {
        /// Name of the indicator that rejected the input.
        indicator: &'static str,
        /// Minimum number of samples needed for one output value.
        required: usize,
        /// Number of samples actually provided.
        actual: usize,
    },

    /// An output buffer cannot hold the requested window.
    #[error("output buffer for {indicator} holds {actual} samples, need {required}")]
    BufferTooSmall {
        /// Name of the indicator that rejected the buffer.
        indicator: &'static str,
        /// Required buffer length.
        required: usize,
        /// Provided buffer length.
        actual: usize,
    },

    /// The requested index window is inconsistent with the input length.
    #[error("window [{start}, {end}] is out of range for a series of {len} samples")]
    WindowOutOfRange {
        /// First requested input index (inclusive).
        start: usize,
        /// Last requested input index (inclusive).
        end: usize,
        /// Length of the input series.
        len: usize,
    },

    /// A tunable limit lies outside its documented range.
    ///
    /// Raised for MAMA's `fast_limit`/`slow_limit` outside [0.01, 0.99].
    #[error("{param} = {value} is outside the valid range [{min}, {max}]")]
    LimitOutOfRange {
        /// Name of the offending parameter.
        param: &'static str,
        /// The rejected value.
        value: f64,
        /// Smallest accepted value.
        min: f64,
        /// Largest accepted value.
        max: f64,
    },

    /// A numeric conversion into the generic sample type failed.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },
}

/// Convenience alias for results using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
