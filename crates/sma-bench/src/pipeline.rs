//! Benchmark orchestration.
//!
//! [`Benchmark::run`] generates the single- and double-precision datasets
//! once, then for every configured window:
//!
//! 1. times the moving average over the `f32` samples,
//! 2. times the moving average over the `f64` samples,
//! 3. hands the `f32` report, then the `f64` report, to the caller's sink.
//!
//! The first error (an empty result, or whatever the sink returns) stops
//! the run and is returned to the caller.
//!
//! # Example
//!
//! ```
//! use sma_bench::config::{BenchConfig, Seed};
//! use sma_bench::data::rng_from_seed;
//! use sma_bench::pipeline::Benchmark;
//!
//! let config = BenchConfig::default()
//!     .with_length(1_000)
//!     .with_windows(vec![4, 8])
//!     .with_seed(Seed::Fixed(42));
//! let mut rng = rng_from_seed(config.seed);
//!
//! let reports = Benchmark::new(config).run_collect(&mut rng).unwrap();
//! assert_eq!(reports.len(), 4);
//! ```

use rand::Rng;
use tracing::{debug, info_span};

use crate::config::BenchConfig;
use crate::data::Samples;
use crate::error::{Error, Result};
use crate::moving_average::moving_average_with;
use crate::report::{report, Report};
use crate::timing::{time, Timed};
use crate::traits::SeriesElement;

/// A configured benchmark run.
#[derive(Debug, Clone)]
pub struct Benchmark {
    config: BenchConfig,
}

impl Benchmark {
    /// Creates a benchmark from its configuration.
    #[must_use]
    pub const fn new(config: BenchConfig) -> Self {
        Self { config }
    }

    /// Runs the benchmark, passing every report to `sink` as soon as it is
    /// ready.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered:
    /// - `Error::InvalidWindow` if the configuration has a zero window
    /// - `Error::EmptyResult` when a window is not smaller than the input
    /// - any error returned by `sink`
    pub fn run<R, F, E>(&self, rng: &mut R, mut sink: F) -> std::result::Result<(), E>
    where
        R: Rng + ?Sized,
        F: FnMut(Report) -> std::result::Result<(), E>,
        E: From<Error>,
    {
        self.config.validate()?;

        let samples = Samples::generate(self.config.length, rng)?;

        for &window in &self.config.windows {
            let _span = info_span!("window", window).entered();

            let single = self.measure(&samples.single, window)?;
            let double = self.measure(&samples.double, window)?;

            sink(report(&single.value, window, single.elapsed, samples.len())?)?;
            sink(report(&double.value, window, double.elapsed, samples.len())?)?;
        }

        Ok(())
    }

    /// Runs the benchmark and collects every report in order.
    ///
    /// # Errors
    ///
    /// See [`Benchmark::run`].
    pub fn run_collect<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Report>> {
        let mut reports = Vec::with_capacity(self.config.windows.len() * 2);
        self.run(rng, |report| {
            reports.push(report);
            Ok::<(), Error>(())
        })?;
        Ok(reports)
    }

    fn measure<T: SeriesElement>(&self, samples: &[T], window: usize) -> Result<Timed<Vec<T>>> {
        let accumulation = self.config.accumulation;
        let Timed { value, elapsed } = time(|| moving_average_with(accumulation, samples, window));
        let value = value?;
        debug!(
            precision = %T::precision(),
            %accumulation,
            outputs = value.len(),
            elapsed_us = elapsed.as_micros(),
            "computed moving average"
        );
        Ok(Timed { value, elapsed })
    }
}
