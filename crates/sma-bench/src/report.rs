//! Benchmark reports.
//!
//! A [`Report`] describes one timed moving-average computation: which
//! precision and window it ran with, how long it took, and how many input
//! elements per millisecond and per second that amounts to.
//!
//! Throughput is always relative to the full input length, not to the
//! number of averages produced. When the measured duration is exactly zero
//! no throughput is reported; see [`Throughput::from_elapsed`].
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use sma_bench::report::report;
//!
//! let average = vec![1.5_f64, 2.5, 3.5, 4.5];
//! let report = report(&average, 2, Duration::from_millis(10), 1_000_000).unwrap();
//!
//! let throughput = report.throughput.unwrap();
//! assert_eq!(throughput.per_millisecond, 100_000.0);
//! assert_eq!(throughput.per_second, 100_000_000.0);
//! ```

use std::fmt;
use std::time::Duration;

use tracing::warn;

use crate::error::{Error, Result};
use crate::timing::as_millis_f64;
use crate::traits::{Precision, SeriesElement};

/// Input elements processed per unit of time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Throughput {
    /// Elements per millisecond.
    pub per_millisecond: f64,
    /// Elements per second.
    pub per_second: f64,
}

impl Throughput {
    /// Computes the throughput of processing `elements` in `elapsed`.
    ///
    /// Returns `None` for a zero duration instead of dividing by zero.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if `elements` does not fit in `f64`.
    pub fn from_elapsed(elements: usize, elapsed: Duration) -> Result<Option<Self>> {
        let millis = as_millis_f64(elapsed);
        if millis <= 0.0 {
            return Ok(None);
        }

        let elements: f64 = SeriesElement::from_usize(elements)?;
        let per_millisecond = elements / millis;
        Ok(Some(Self {
            per_millisecond,
            per_second: per_millisecond * 1_000.0,
        }))
    }
}

/// Outcome of one timed moving-average computation.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Precision of the input samples.
    pub precision: Precision,
    /// Window size used.
    pub window: usize,
    /// Time spent computing the moving average.
    pub elapsed: Duration,
    /// Number of input samples.
    pub input_len: usize,
    /// Derived throughput, absent if `elapsed` was zero.
    pub throughput: Option<Throughput>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Execution time for {}, with screen = {} is {:.3} ms.",
            self.precision,
            self.window,
            as_millis_f64(self.elapsed)
        )?;
        match self.throughput {
            Some(t) => write!(
                f,
                "Counting speed is {:.0} units per millisecond, that equals {:.0} units per second.",
                t.per_millisecond, t.per_second
            ),
            None => write!(
                f,
                "Counting speed is unmeasurable: {} units finished within the clock resolution.",
                self.input_len
            ),
        }
    }
}

/// Builds the report for one computation.
///
/// `input_len` is the length of the sample series the average was computed
/// from, and is what throughput is measured against.
///
/// # Errors
///
/// Returns `Error::EmptyResult` if `average` is empty. No throughput is
/// computed in that case.
pub fn report<T: SeriesElement>(
    average: &[T],
    window: usize,
    elapsed: Duration,
    input_len: usize,
) -> Result<Report> {
    if average.is_empty() {
        return Err(Error::EmptyResult { window });
    }

    let throughput = Throughput::from_elapsed(input_len, elapsed)?;
    if throughput.is_none() {
        warn!(window, precision = %T::precision(), "elapsed time below clock resolution");
    }

    Ok(Report {
        precision: T::precision(),
        window,
        elapsed,
        input_len,
        throughput,
    })
}
