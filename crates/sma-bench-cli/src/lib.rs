//! sma-bench CLI library
//!
//! Runs the benchmark with its canonical configuration and writes one
//! report block per (window, precision) pair. Exposed as a library so the
//! runner can be tested against an in-memory writer.

pub mod error;

pub use error::{CliError, Result};

use std::io::Write;

use sma_bench::config::BenchConfig;
use sma_bench::data::rng_from_seed;
use sma_bench::pipeline::Benchmark;
use tracing::info;

/// Runs the benchmark described by `config`, writing each report to `out`.
///
/// Reports are flushed as they are produced, so blocks already written stay
/// visible when a later window fails.
///
/// # Errors
///
/// Returns `CliError::Benchmark` if the benchmark fails and
/// `CliError::IoError` if `out` cannot be written.
pub fn run<W: Write>(config: BenchConfig, out: &mut W) -> Result<()> {
    info!(
        length = config.length,
        windows = ?config.windows,
        accumulation = %config.accumulation,
        "starting benchmark"
    );

    let mut rng = rng_from_seed(config.seed);
    Benchmark::new(config).run(&mut rng, |report| -> Result<()> {
        writeln!(out, "{report}")?;
        out.flush()?;
        Ok(())
    })?;

    info!("benchmark finished");
    Ok(())
}

/// Writes the final error line for `err` to `out`.
///
/// Write failures are ignored: stdout may already be closed, and the exit
/// status still reports the error.
pub fn print_error<W: Write>(err: &CliError, out: &mut W) {
    let _ = writeln!(out, "Program interrupted with error: {err}");
    let _ = out.flush();
}
