//! Wall-clock timing of a single computation.
//!
//! Measured with [`Instant`], which is monotonic and resolves well below a
//! millisecond, so fast windows do not collapse to a zero duration.

use std::time::{Duration, Instant};

/// A value together with the time it took to produce.
#[derive(Debug, Clone, PartialEq)]
pub struct Timed<T> {
    /// The computed value.
    pub value: T,
    /// Elapsed wall-clock time.
    pub elapsed: Duration,
}

/// Runs `f` to completion and measures how long it took.
///
/// # Example
///
/// ```
/// use sma_bench::timing::time;
///
/// let timed = time(|| (1..=10).sum::<u32>());
/// assert_eq!(timed.value, 55);
/// ```
#[inline]
pub fn time<F, R>(f: F) -> Timed<R>
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let value = f();
    let elapsed = start.elapsed();
    Timed { value, elapsed }
}

/// Milliseconds in `duration`, with the sub-millisecond fraction kept.
#[inline]
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn as_millis_f64(duration: Duration) -> f64 {
    // Whole nanoseconds divided once, so integral millisecond counts are exact
    duration.as_nanos() as f64 / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_returns_value() {
        let timed = time(|| vec![1, 2, 3]);
        assert_eq!(timed.value, vec![1, 2, 3]);
    }

    #[test]
    fn test_time_measures_sleep() {
        let timed = time(|| std::thread::sleep(Duration::from_millis(5)));
        assert!(timed.elapsed >= Duration::from_millis(5));
    }

    #[test]
    fn test_as_millis_f64() {
        assert!((as_millis_f64(Duration::from_millis(10)) - 10.0).abs() < 1e-12);
        assert!((as_millis_f64(Duration::from_micros(250)) - 0.25).abs() < 1e-12);
        assert_eq!(as_millis_f64(Duration::ZERO), 0.0);
    }
}
