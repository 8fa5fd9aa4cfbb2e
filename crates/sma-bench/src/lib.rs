//! sma-bench: simple moving average throughput benchmark
//!
//! Compares how fast a simple moving average can be computed over a large
//! sequence of `f32` samples versus the same computation over `f64` samples,
//! across several window ("screen") sizes.
//!
//! # Pipeline
//!
//! - [`data`]: seeded generation of the two sample series
//! - [`moving_average`](mod@moving_average): the moving average itself, summed in `f64`
//! - [`timing`]: wall-clock measurement of one computation
//! - [`report`]: elapsed time and throughput for one computation
//! - [`pipeline`]: ties the above together for every configured window
//!
//! # Quick Start
//!
//! ```
//! use sma_bench::prelude::*;
//!
//! let config = BenchConfig::default()
//!     .with_length(10_000)
//!     .with_seed(Seed::Fixed(1));
//! let mut rng = rng_from_seed(config.seed);
//!
//! for report in Benchmark::new(config).run_collect(&mut rng).unwrap() {
//!     println!("{report}");
//! }
//! ```
//!
//! # Error Handling
//!
//! Functions return [`Result<T, Error>`]. A window that is not smaller than
//! the input produces an empty average, which the reporter turns into
//! [`Error::EmptyResult`]:
//!
//! ```
//! use sma_bench::prelude::*;
//!
//! let config = BenchConfig::default()
//!     .with_length(100)
//!     .with_windows(vec![128])
//!     .with_seed(Seed::Fixed(1));
//! let mut rng = rng_from_seed(config.seed);
//!
//! let result = Benchmark::new(config).run_collect(&mut rng);
//! assert_eq!(result, Err(Error::EmptyResult { window: 128 }));
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod data;
pub mod error;
pub mod moving_average;
pub mod pipeline;
pub mod prelude;
pub mod report;
pub mod timing;
pub mod traits;
pub mod utils;

pub use error::{Error, Result};
pub use moving_average::moving_average;
pub use traits::{Precision, SeriesElement};
