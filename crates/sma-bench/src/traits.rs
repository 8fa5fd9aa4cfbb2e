//! Core traits for sma-bench numeric operations.
//!
//! The primary trait is [`SeriesElement`], which abstracts over `f32` and
//! `f64` sample types. The benchmark compares exactly these two precisions,
//! tagged at runtime by [`Precision`].
//!
//! # Example
//!
//! ```
//! use sma_bench::traits::{Precision, SeriesElement};
//!
//! assert_eq!(f32::precision(), Precision::Single);
//! assert_eq!(f64::precision(), Precision::Double);
//!
//! let window: f64 = SeriesElement::from_usize(16).unwrap();
//! assert!((window - 16.0).abs() < 1e-10);
//! ```

use std::fmt;

use num_traits::{Float, NumCast, ToPrimitive};

use crate::error::{Error, Result};

/// Floating-point precision of a sample series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    /// 32-bit IEEE-754 (`f32`).
    Single,
    /// 64-bit IEEE-754 (`f64`).
    Double,
}

impl Precision {
    /// Short human-readable label used in reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Single => "float",
            Self::Double => "double",
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A trait for types that can be used as elements in a sample series.
///
/// The trait requires:
/// - `Float`: Standard floating-point operations (NaN handling, infinity, arithmetic)
/// - `NumCast`: Safe conversion between numeric types
/// - `Copy`, `Default`, `Send`, `Sync`: plain value semantics
///
/// It is implemented for every type meeting these bounds, which in practice
/// means `f32` and `f64`.
pub trait SeriesElement: Float + NumCast + Copy + Default + Send + Sync + 'static {
    /// Creates a series element from a `usize` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_usize(value: usize) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "usize to series element",
        })
    }

    /// Creates a series element from a `u32` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_u32(value: u32) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "u32 to series element",
        })
    }

    /// Creates a series element from an `f64` value, rounding to nearest.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_f64(value: f64) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "f64 to series element",
        })
    }

    /// Widens this element to `f64`.
    ///
    /// Widening `f32`/`f64` into `f64` is exact, NaN and infinities included.
    #[inline]
    #[must_use]
    fn to_f64_lossy(self) -> f64 {
        ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
    }

    /// Precision tag of this element type.
    #[inline]
    #[must_use]
    fn precision() -> Precision {
        if std::mem::size_of::<Self>() <= std::mem::size_of::<f32>() {
            Precision::Single
        } else {
            Precision::Double
        }
    }
}

impl<T: Float + NumCast + Copy + Default + Send + Sync + 'static> SeriesElement for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_element_from_usize() {
        let val: f64 = SeriesElement::from_usize(42).unwrap();
        assert!((val - 42.0).abs() < 1e-10);

        let val_f32: f32 = SeriesElement::from_usize(100).unwrap();
        assert!((val_f32 - 100.0).abs() < 1e-5);
    }

    #[test]
    fn test_series_element_from_u32() {
        let val: f64 = SeriesElement::from_u32(u32::MAX).unwrap();
        assert!((val - 4_294_967_295.0).abs() < 1e-10);

        // f32 rounds to nearest representable value
        let val_f32: f32 = SeriesElement::from_u32(16_777_217).unwrap();
        assert!((val_f32 - 16_777_216.0).abs() < 1e-5);
    }

    #[test]
    fn test_series_element_from_f64_narrows() {
        let val_f32: f32 = SeriesElement::from_f64(std::f64::consts::PI).unwrap();
        assert!((val_f32 - std::f32::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn test_to_f64_lossy_preserves_special_values() {
        assert!(f32::NAN.to_f64_lossy().is_nan());
        assert_eq!(f32::INFINITY.to_f64_lossy(), f64::INFINITY);
        assert_eq!(1.5_f32.to_f64_lossy(), 1.5_f64);
    }

    #[test]
    fn test_precision_tags() {
        assert_eq!(f32::precision(), Precision::Single);
        assert_eq!(f64::precision(), Precision::Double);
    }

    #[test]
    fn test_precision_labels() {
        assert_eq!(Precision::Single.label(), "float");
        assert_eq!(Precision::Double.label(), "double");
        assert_eq!(Precision::Double.to_string(), "double");
    }
}
