//! Floating-point comparison helpers.
//!
//! Moving averages computed with different accumulation orders agree only
//! up to rounding, so comparisons between them use a tolerance.
//!
//! # Example
//!
//! ```
//! use sma_bench::utils::{approx_eq, EPSILON};
//!
//! let a = 1.0 / 3.0;
//! let b = 0.333333333333333;
//! assert!(approx_eq(a, b, EPSILON));
//! ```

use crate::traits::SeriesElement;

/// Standard epsilon for `f64` comparisons.
pub const EPSILON: f64 = 1e-10;

/// Standard epsilon for `f32` comparisons.
pub const EPSILON_F32: f32 = 1e-5;

/// Approximate equality check for floating-point values.
///
/// Returns `true` if `a` and `b` are within `tolerance` of each other,
/// if both are NaN, or if both are the same infinity.
///
/// ```
/// use sma_bench::utils::{approx_eq, EPSILON};
///
/// assert!(approx_eq(1.0, 1.0 + 1e-11, EPSILON));
/// assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
/// assert!(approx_eq(f64::INFINITY, f64::INFINITY, EPSILON));
/// assert!(!approx_eq(f64::NAN, 1.0, EPSILON));
/// ```
#[inline]
#[must_use]
pub fn approx_eq<T: SeriesElement>(a: T, b: T, tolerance: T) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    if a.is_infinite() || b.is_infinite() {
        return a == b;
    }
    (a - b).abs() < tolerance
}

/// Relative approximate equality check for floating-point values.
///
/// More appropriate than [`approx_eq`] for the quotient samples, whose
/// magnitudes span many orders.
///
/// ```
/// use sma_bench::utils::approx_eq_relative;
///
/// assert!(approx_eq_relative(1e10, 1e10 + 1.0, 1e-9));
/// ```
#[inline]
#[must_use]
pub fn approx_eq_relative<T: SeriesElement>(a: T, b: T, rel_tolerance: T) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    if a.is_infinite() || b.is_infinite() {
        return a == b;
    }

    let diff = (a - b).abs();
    let max_abs = a.abs().max(b.abs());

    if max_abs == T::zero() {
        return diff == T::zero();
    }

    diff / max_abs < rel_tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq_basic() {
        assert!(approx_eq(1.0_f64, 1.0, EPSILON));
        assert!(!approx_eq(1.0_f64, 2.0, EPSILON));
        assert!(approx_eq(1.0_f32, 1.0 + 1e-6, EPSILON_F32));
    }

    #[test]
    fn test_approx_eq_infinity() {
        assert!(approx_eq(f64::INFINITY, f64::INFINITY, EPSILON));
        assert!(!approx_eq(f64::INFINITY, f64::NEG_INFINITY, EPSILON));
        assert!(!approx_eq(f64::INFINITY, 1e300, EPSILON));
    }

    #[test]
    fn test_approx_eq_relative_basic() {
        assert!(approx_eq_relative(1.0_f64, 1.0, 1e-10));
        assert!(!approx_eq_relative(1.0_f64, 2.0, 1e-10));
    }

    #[test]
    fn test_approx_eq_relative_zero() {
        assert!(approx_eq_relative(0.0_f64, 0.0, 1e-10));
        assert!(!approx_eq_relative(0.0_f64, 1e-11, 1e-10));
    }
}
