//! Fan-out over many independent series.
//!
//! Every indicator call owns its state, so distinct instruments can be
//! computed in parallel with no synchronisation. With the `parallel` feature
//! enabled this module spreads the work over rayon's thread pool; without it
//! the same API degrades to a sequential loop.
//!
//! ```toml
//! [dependencies]
//! mesa-cycles = { version = "0.1", features = ["parallel"] }
//! ```

use crate::error::Result;
use crate::traits::Sample;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Applies one indicator closure across a batch of series.
///
/// Small batches stay sequential to avoid fork/join overhead; the cutover
/// point is configurable.
#[derive(Debug, Clone)]
pub struct SeriesBatch {
    sequential_below: usize,
}

impl Default for SeriesBatch {
    fn default() -> Self {
        Self::new()
    }
}

impl SeriesBatch {
    /// Creates a batch runner with the default sequential cutover (8 series).
    #[must_use]
    pub const fn new() -> Self {
        Self { sequential_below: 8 }
    }

    /// Sets the minimum batch size that triggers parallel execution.
    #[must_use]
    pub const fn sequential_below(mut self, threshold: usize) -> Self {
        self.sequential_below = threshold;
        self
    }

    /// Runs `indicator` on every series, preserving order.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `indicator`.
    ///
    /// # Example
    ///
    /// ```
    /// use mesa_cycles::batch::SeriesBatch;
    /// use mesa_cycles::indicators::dc_period;
    ///
    /// let series: Vec<Vec<f64>> = (0..4)
    ///     .map(|k| {
    ///         (0..128)
    ///             .map(|i| 100.0 + ((i + k * 7) as f64 * 0.3).sin() * 5.0)
    ///             .collect()
    ///     })
    ///     .collect();
    /// let periods = SeriesBatch::new()
    ///     .run(&series, |s| dc_period(s))
    ///     .unwrap();
    /// assert_eq!(periods.len(), 4);
    /// ```
    #[cfg(feature = "parallel")]
    pub fn run<T, F, R>(&self, series: &[Vec<T>], indicator: F) -> Result<Vec<R>>
    where
        T: Sample,
        F: Fn(&[T]) -> Result<R> + Send + Sync,
        R: Send,
    {
        if series.len() < self.sequential_below {
            series.iter().map(|s| indicator(s)).collect()
        } else {
            series.par_iter().map(|s| indicator(s)).collect()
        }
    }

    /// Runs `indicator` on every series, preserving order (sequential build).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `indicator`.
    #[cfg(not(feature = "parallel"))]
    pub fn run<T, F, R>(&self, series: &[Vec<T>], indicator: F) -> Result<Vec<R>>
    where
        T: Sample,
        F: Fn(&[T]) -> Result<R>,
    {
        series.iter().map(|s| indicator(s)).collect()
    }
}
