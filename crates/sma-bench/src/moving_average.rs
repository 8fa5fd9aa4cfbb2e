//! Simple Moving Average over a fixed window.
//!
//! For an input of length `N` and a window `W`, the output has `N - W`
//! values and
//!
//! ```text
//! output[i] = (input[i] + input[i + 1] + ... + input[i + W - 1]) / W
//! ```
//!
//! The first output is the mean of `input[0..W]`, and each following output
//! advances the window by one element. The element `input[N - 1]` never
//! enters a window, and there is no NaN-filled lookback prefix.
//!
//! # Accumulation precision
//!
//! Window sums are always accumulated in `f64`, whatever the element type,
//! then divided by `W` in `f64` and narrowed back to the element type. For
//! `f32` input this gives a different (and better) rounding than summing in
//! `f32`, and it is part of the numeric contract: changing it changes the
//! output bits.
//!
//! Two accumulation orders are provided:
//! - [`moving_average`] re-sums every window from its first element. O(N·W),
//!   reproducible bit for bit.
//! - [`moving_average_rolling`] keeps a running sum. O(N), equal to the
//!   windowed form up to rounding. The sum is rebuilt from the window when a
//!   non-finite sample leaves it, when a leaving sample dwarfs what remains,
//!   and every [`RESUM_INTERVAL`] steps, so neither `inf - inf` nor the
//!   residue of a huge sample outlives its window.
//!
//! # Example
//!
//! ```
//! use sma_bench::moving_average::moving_average;
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let result = moving_average(&data, 2).unwrap();
//! assert_eq!(result, vec![1.5, 2.5, 3.5, 4.5]);
//! ```

use crate::config::Accumulation;
use crate::error::{Error, Result};
use crate::traits::SeriesElement;

/// Maximum number of slides between two full re-sums of the rolling window.
pub const RESUM_INTERVAL: usize = 1024;

/// A leaving sample this many times larger than the remaining sum forces a
/// re-sum; the subtraction would otherwise leave ~2^-40 relative residue.
const CANCELLATION_RATIO: f64 = 8192.0;

/// Number of outputs for an input of `len` elements and the given window.
///
/// Zero when the window is not smaller than the input.
#[inline]
#[must_use]
pub const fn output_len(len: usize, window: usize) -> usize {
    len.saturating_sub(window)
}

#[inline]
const fn validate_window(window: usize) -> Result<()> {
    if window == 0 {
        Err(Error::InvalidWindow {
            window,
            reason: "window must be at least 1",
        })
    } else {
        Ok(())
    }
}

#[inline]
fn window_sum<T: SeriesElement>(window: &[T]) -> f64 {
    window.iter().fold(0.0_f64, |acc, &x| acc + x.to_f64_lossy())
}

/// Computes the simple moving average of `data`, re-summing every window.
///
/// # Errors
///
/// Returns `Error::InvalidWindow` if `window` is zero. A window that is not
/// smaller than `data` is not an error here: the result is simply empty.
///
/// # Example
///
/// ```
/// use sma_bench::moving_average::moving_average;
///
/// let data = vec![2.0_f32, 2.0, 2.0, 2.0];
/// assert_eq!(moving_average(&data, 3).unwrap(), vec![2.0, 2.0]);
/// assert!(moving_average(&data, 4).unwrap().is_empty());
/// ```
pub fn moving_average<T: SeriesElement>(data: &[T], window: usize) -> Result<Vec<T>> {
    validate_window(window)?;

    let len = output_len(data.len(), window);
    let mut result = vec![T::zero(); len];
    fill_windowed(data, window, &mut result)?;
    Ok(result)
}

/// Computes the simple moving average into a pre-allocated output buffer.
///
/// Uses the same accumulation order as [`moving_average`] and writes the
/// first `N - W` slots of `output`; any remaining slots are left untouched.
///
/// # Returns
///
/// The number of values written.
///
/// # Errors
///
/// Returns an error if:
/// - `window` is zero (`Error::InvalidWindow`)
/// - `output` is shorter than `N - W` (`Error::BufferTooSmall`)
///
/// # Example
///
/// ```
/// use sma_bench::moving_average::moving_average_into;
///
/// let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
/// let mut output = vec![0.0; 5];
/// let written = moving_average_into(&data, 2, &mut output).unwrap();
///
/// assert_eq!(written, 4);
/// assert_eq!(&output[..written], &[1.5, 2.5, 3.5, 4.5]);
/// ```
pub fn moving_average_into<T: SeriesElement>(
    data: &[T],
    window: usize,
    output: &mut [T],
) -> Result<usize> {
    validate_window(window)?;

    let len = output_len(data.len(), window);
    if output.len() < len {
        return Err(Error::BufferTooSmall {
            required: len,
            actual: output.len(),
        });
    }

    fill_windowed(data, window, &mut output[..len])?;
    Ok(len)
}

fn fill_windowed<T: SeriesElement>(data: &[T], window: usize, output: &mut [T]) -> Result<()> {
    let divisor: f64 = SeriesElement::from_usize(window)?;

    for (start, slot) in output.iter_mut().enumerate() {
        let sum = window_sum(&data[start..start + window]);
        *slot = T::from_f64(sum / divisor)?;
    }

    Ok(())
}

/// Computes the simple moving average of `data` with a running `f64` sum.
///
/// # Errors
///
/// Returns `Error::InvalidWindow` if `window` is zero.
///
/// # Example
///
/// ```
/// use sma_bench::moving_average::moving_average_rolling;
///
/// let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
/// let result = moving_average_rolling(&data, 2).unwrap();
/// assert_eq!(result, vec![1.5, 2.5, 3.5, 4.5]);
/// ```
pub fn moving_average_rolling<T: SeriesElement>(data: &[T], window: usize) -> Result<Vec<T>> {
    validate_window(window)?;

    let len = output_len(data.len(), window);
    if len == 0 {
        return Ok(Vec::new());
    }

    let divisor: f64 = SeriesElement::from_usize(window)?;
    let mut result = Vec::with_capacity(len);

    let mut sum = window_sum(&data[..window]);
    result.push(T::from_f64(sum / divisor)?);

    // Slide: add the entering element, subtract the leaving one
    for start in 1..len {
        let leaving = data[start - 1].to_f64_lossy();
        sum = sum + data[start + window - 1].to_f64_lossy() - leaving;

        if !leaving.is_finite()
            || leaving.abs() > CANCELLATION_RATIO * sum.abs()
            || start % RESUM_INTERVAL == 0
        {
            sum = window_sum(&data[start..start + window]);
        }

        result.push(T::from_f64(sum / divisor)?);
    }

    Ok(result)
}

/// Computes the simple moving average with the chosen accumulation strategy.
///
/// # Errors
///
/// Returns `Error::InvalidWindow` if `window` is zero.
pub fn moving_average_with<T: SeriesElement>(
    accumulation: Accumulation,
    data: &[T],
    window: usize,
) -> Result<Vec<T>> {
    match accumulation {
        Accumulation::Windowed => moving_average(data, window),
        Accumulation::Rolling => moving_average_rolling(data, window),
    }
}
