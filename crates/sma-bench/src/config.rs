//! Benchmark configuration.
//!
//! The benchmark has no command-line, file or environment configuration.
//! Its parameters are plain values collected in [`BenchConfig`], whose
//! [`Default`] reproduces the canonical run: one million samples averaged
//! over windows of 4, 8, 16, 32, 64 and 128 elements. Tests build smaller
//! configurations with the `with_*` methods.
//!
//! # Example
//!
//! ```
//! use sma_bench::config::{Accumulation, BenchConfig, Seed};
//!
//! let config = BenchConfig::default()
//!     .with_length(1_000)
//!     .with_windows(vec![2, 3])
//!     .with_seed(Seed::Fixed(42))
//!     .with_accumulation(Accumulation::Rolling);
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.windows, vec![2, 3]);
//! ```

use std::fmt;

use crate::error::{Error, Result};

/// Number of samples generated per precision in the canonical run.
pub const DEFAULT_LENGTH: usize = 1_000_000;

/// Window ("screen") sizes of the canonical run, in iteration order.
pub const DEFAULT_WINDOWS: [usize; 6] = [4, 8, 16, 32, 64, 128];

/// How the random source is seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Seed {
    /// Seed from the wall clock, in whole seconds since the UNIX epoch.
    ///
    /// Two runs started within the same second generate identical data.
    #[default]
    Clock,
    /// Seed from a fixed value, for reproducible runs.
    Fixed(u64),
}

/// Strategy used to accumulate each window sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accumulation {
    /// Re-sum every window from scratch in `f64`. O(N·W).
    ///
    /// Each output is the left-to-right `f64` sum of its window, so results
    /// are reproducible bit for bit.
    #[default]
    Windowed,
    /// Maintain one running `f64` sum, adding the entering element and
    /// subtracting the leaving one. O(N).
    ///
    /// Agrees with [`Accumulation::Windowed`] up to rounding, infinite
    /// samples included: the sum is rebuilt from the window whenever a
    /// non-finite or dominating sample leaves it.
    Rolling,
}

impl fmt::Display for Accumulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windowed => f.write_str("windowed"),
            Self::Rolling => f.write_str("rolling"),
        }
    }
}

/// Parameters for one benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Number of samples generated for each precision.
    pub length: usize,
    /// Window sizes, benchmarked in this order.
    pub windows: Vec<usize>,
    /// Seed for the sample generator.
    pub seed: Seed,
    /// Window-sum accumulation strategy.
    pub accumulation: Accumulation,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            windows: DEFAULT_WINDOWS.to_vec(),
            seed: Seed::Clock,
            accumulation: Accumulation::Windowed,
        }
    }
}

impl BenchConfig {
    /// Sets the number of samples per precision.
    #[must_use]
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Sets the window sizes.
    #[must_use]
    pub fn with_windows(mut self, windows: Vec<usize>) -> Self {
        self.windows = windows;
        self
    }

    /// Sets the generator seed.
    #[must_use]
    pub fn with_seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the accumulation strategy.
    #[must_use]
    pub fn with_accumulation(mut self, accumulation: Accumulation) -> Self {
        self.accumulation = accumulation;
        self
    }

    /// Checks that every window size is usable.
    ///
    /// Windows larger than `length` are accepted here; they produce an
    /// empty result, which is reported as [`Error::EmptyResult`] when the
    /// benchmark reaches them.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidWindow` for a zero window.
    pub fn validate(&self) -> Result<()> {
        match self.windows.iter().find(|&&w| w == 0) {
            Some(&window) => Err(Error::InvalidWindow {
                window,
                reason: "window must be at least 1",
            }),
            None => Ok(()),
        }
    }
}
