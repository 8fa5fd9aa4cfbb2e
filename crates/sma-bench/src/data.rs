//! Synthetic sample generation.
//!
//! Every sample is the quotient of two independently drawn integers in
//! `0..=RAND_MAX`, each cast to the element type before dividing. Values are
//! therefore non-negative and unbounded above; a zero denominator produces
//! `inf` (or `NaN` for `0 / 0`) and is left in the data as is.
//!
//! The random source is always passed in explicitly, so tests can use a
//! fixed seed and get identical data on every run.
//!
//! # Example
//!
//! ```
//! use sma_bench::config::Seed;
//! use sma_bench::data::{generate_samples, rng_from_seed};
//!
//! let mut rng = rng_from_seed(Seed::Fixed(42));
//! let samples: Vec<f64> = generate_samples(1_000, &mut rng).unwrap();
//! assert_eq!(samples.len(), 1_000);
//! assert!(samples.iter().all(|v| v.is_nan() || *v >= 0.0));
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::config::Seed;
use crate::error::Result;
use crate::traits::SeriesElement;

/// Largest integer a single draw can produce.
pub const RAND_MAX: u32 = i32::MAX as u32;

/// Seconds since the UNIX epoch, or 0 if the clock is set before it.
#[must_use]
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Builds the benchmark's random source from a [`Seed`].
#[must_use]
pub fn rng_from_seed(seed: Seed) -> ChaCha8Rng {
    let value = match seed {
        Seed::Clock => clock_seed(),
        Seed::Fixed(value) => value,
    };
    ChaCha8Rng::seed_from_u64(value)
}

/// Generates `len` samples of type `T` from `rng`.
///
/// # Errors
///
/// Returns `Error::NumericConversion` if a drawn integer cannot be
/// represented in `T`. This does not happen for `f32` or `f64`.
pub fn generate_samples<T, R>(len: usize, rng: &mut R) -> Result<Vec<T>>
where
    T: SeriesElement,
    R: Rng + ?Sized,
{
    let mut samples = Vec::with_capacity(len);
    for _ in 0..len {
        let numerator = T::from_u32(rng.random_range(0..=RAND_MAX))?;
        let denominator = T::from_u32(rng.random_range(0..=RAND_MAX))?;
        samples.push(numerator / denominator);
    }
    Ok(samples)
}

/// The two datasets of one benchmark run.
///
/// Generated once, then only read.
#[derive(Debug, Clone, PartialEq)]
pub struct Samples {
    /// 32-bit samples.
    pub single: Vec<f32>,
    /// 64-bit samples.
    pub double: Vec<f64>,
}

impl Samples {
    /// Generates `len` single-precision samples, then `len` double-precision
    /// samples, from the same random source.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`generate_samples`].
    pub fn generate<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Result<Self> {
        let single = generate_samples::<f32, _>(len, rng)?;
        info!(len, precision = "float", "generated samples");
        let double = generate_samples::<f64, _>(len, rng)?;
        info!(len, precision = "double", "generated samples");
        Ok(Self { single, double })
    }

    /// Number of samples per precision.
    #[must_use]
    pub fn len(&self) -> usize {
        self.single.len()
    }

    /// Returns true if no samples were generated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.single.is_empty()
    }
}
