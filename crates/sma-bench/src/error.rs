//! Error types for sma-bench.
//!
//! This module defines the error types used throughout the benchmark
//! for handling the few failure conditions the pipeline can hit.

use thiserror::Error;

/// The main error type for sma-bench operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A moving-average computation produced no values.
    ///
    /// This happens when the window size is greater than or equal to the
    /// input length. The reporter refuses to report on an empty result.
    #[error("moving average is empty (window {window})")]
    EmptyResult {
        /// The window size that produced the empty result.
        window: usize,
    },

    /// The window size parameter is invalid.
    #[error("invalid window {window}: {reason}")]
    InvalidWindow {
        /// The invalid window size that was provided.
        window: usize,
        /// Description of why the window is invalid.
        reason: &'static str,
    },

    /// Failed to convert a numeric value to the target type.
    ///
    /// This error occurs when using `NumCast::from()` to convert values
    /// (e.g., converting a `usize` window to a generic `Float` type) and
    /// the conversion fails.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },

    /// The caller-provided output buffer cannot hold the result.
    #[error("output buffer too small: required {required} elements, got {actual}")]
    BufferTooSmall {
        /// The number of output slots required.
        required: usize,
        /// The number of output slots provided.
        actual: usize,
    },
}

/// Convenience type alias for Results using the sma-bench Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_error() {
        let err = Error::EmptyResult { window: 128 };
        assert_eq!(err.to_string(), "moving average is empty (window 128)");
    }

    #[test]
    fn test_invalid_window_error() {
        let err = Error::InvalidWindow {
            window: 0,
            reason: "window must be at least 1",
        };
        assert_eq!(err.to_string(), "invalid window 0: window must be at least 1");
    }

    #[test]
    fn test_numeric_conversion_error() {
        let err = Error::NumericConversion {
            context: "converting window to float",
        };
        assert_eq!(
            err.to_string(),
            "numeric conversion failed: converting window to float"
        );
    }

    #[test]
    fn test_buffer_too_small_error() {
        let err = Error::BufferTooSmall {
            required: 10,
            actual: 4,
        };
        assert_eq!(
            err.to_string(),
            "output buffer too small: required 10 elements, got 4"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            Error::EmptyResult { window: 4 },
            Error::EmptyResult { window: 4 }
        );
        assert_ne!(
            Error::EmptyResult { window: 4 },
            Error::EmptyResult { window: 8 }
        );
    }

    #[test]
    fn test_error_is_std_error() {
        fn accepts_std_error<E: std::error::Error>(_: E) {}
        accepts_std_error(Error::EmptyResult { window: 1 });
    }
}
