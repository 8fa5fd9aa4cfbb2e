//! sma-bench command-line interface
//!
//! Takes no arguments. Benchmarks the moving average over one million
//! `f32` and `f64` samples for windows 4 through 128 and prints the results
//! to stdout. Diagnostics go to stderr.

use std::io;
use std::process;

use sma_bench::config::BenchConfig;
use sma_bench_cli::{print_error, run};
use tracing::{error, Level};

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let result = run(BenchConfig::default(), &mut io::stdout().lock());

    if let Err(err) = result {
        error!(%err, "benchmark aborted");
        print_error(&err, &mut io::stdout());
        process::exit(err.exit_code());
    }
}
