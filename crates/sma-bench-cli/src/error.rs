//! CLI error types.
//!
//! [`CliError`] wraps everything that can end a benchmark run early. Every
//! variant maps to exit status 1.

use std::fmt;
use std::io;

/// CLI error type encompassing all possible error conditions.
#[derive(Debug)]
pub enum CliError {
    /// The benchmark itself failed.
    Benchmark {
        /// The underlying sma-bench error.
        source: sma_bench::Error,
    },
    /// Writing the report to stdout failed.
    IoError {
        /// The underlying I/O error.
        source: io::Error,
    },
}

impl CliError {
    /// Process exit status for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            CliError::Benchmark { .. } | CliError::IoError { .. } => 1,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Benchmark { source } => write!(f, "{source}"),
            CliError::IoError { source } => write!(f, "failed to write report: {source}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Benchmark { source } => Some(source),
            CliError::IoError { source } => Some(source),
        }
    }
}

impl From<sma_bench::Error> for CliError {
    fn from(err: sma_bench::Error) -> Self {
        CliError::Benchmark { source: err }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::IoError { source: err }
    }
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_benchmark_error_display() {
        let err = CliError::from(sma_bench::Error::EmptyResult { window: 128 });
        assert_eq!(err.to_string(), "moving average is empty (window 128)");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_io_error_display() {
        let err = CliError::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert_eq!(err.to_string(), "failed to write report: pipe closed");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_error_source() {
        let err = CliError::from(sma_bench::Error::EmptyResult { window: 4 });
        assert!(err.source().is_some());
    }
}
