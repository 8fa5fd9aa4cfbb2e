//! Commonly used types and functions for convenient importing.
//!
//! ```
//! use sma_bench::prelude::*;
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let average = moving_average(&data, 2).unwrap();
//! assert_eq!(average.len(), 4);
//! ```

pub use crate::config::{Accumulation, BenchConfig, Seed};
pub use crate::data::{generate_samples, rng_from_seed, Samples};
pub use crate::error::{Error, Result};
pub use crate::moving_average::{
    moving_average, moving_average_into, moving_average_rolling, moving_average_with,
};
pub use crate::pipeline::Benchmark;
pub use crate::report::{report, Report, Throughput};
pub use crate::traits::{Precision, SeriesElement};
