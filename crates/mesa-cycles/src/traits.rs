//! Numeric abstraction shared by every indicator.
//!
//! All engine code is generic over [`Sample`], which covers `f32` and `f64`
//! through a blanket impl. The trait adds the handful of conversions the
//! cycle engine needs on top of `num_traits::Float`: checked conversions for
//! counts coming from the caller, and an infallible constructor for the
//! filter constants baked into the algorithm.

use num_traits::{Float, NumCast};

use crate::error::{Error, Result};

/// A floating-point sample type usable in a price/volume series.
///
/// Implemented for `f32` and `f64`. The bounds follow IEEE-754 semantics via
/// `num_traits::Float`; `Send + Sync` lets independent invocations run on
/// different threads without extra ceremony.
pub trait Sample: Float + NumCast + Copy + Default + Send + Sync + 'static {
    /// Checked conversion from a `usize` count (window spans, periods).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NumericConversion`] if the value cannot be
    /// represented in this type.
    #[inline]
    fn from_usize(value: usize) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "usize to sample",
        })
    }

    /// Checked conversion from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NumericConversion`] if the value cannot be
    /// represented in this type.
    #[inline]
    fn from_f64(value: f64) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "f64 to sample",
        })
    }

    /// Converts a small algorithm constant into this type.
    ///
    /// Every constant the engine uses (filter coefficients, clamp bounds,
    /// degree conversions) is exactly representable in both `f32` and `f64`,
    /// so the conversion cannot fail.
    #[inline]
    #[must_use]
    fn constant(value: f64) -> Self {
        // Safe unwrap: the engine only passes small, finite literals.
        <Self as NumCast>::from(value).unwrap()
    }

    /// Lossy view of the value as `f64`, used in error reports.
    #[inline]
    #[must_use]
    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl<T: Float + NumCast + Copy + Default + Send + Sync + 'static> Sample for T {}
