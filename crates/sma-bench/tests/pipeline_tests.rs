//! End-to-end tests of the benchmark pipeline with small, seeded configurations.

use std::time::Duration;

use sma_bench::prelude::*;
use sma_bench::utils::approx_eq_relative;

fn seeded(length: usize, windows: Vec<usize>) -> (Benchmark, rand_chacha::ChaCha8Rng) {
    let config = BenchConfig::default()
        .with_length(length)
        .with_windows(windows)
        .with_seed(Seed::Fixed(20_240_101));
    let rng = rng_from_seed(config.seed);
    (Benchmark::new(config), rng)
}

#[test]
fn test_default_windows_produce_twelve_reports() {
    let (bench, mut rng) = seeded(4_096, vec![4, 8, 16, 32, 64, 128]);
    let reports = bench.run_collect(&mut rng).unwrap();

    assert_eq!(reports.len(), 12);
    for pair in reports.chunks(2) {
        assert_eq!(pair[0].precision, Precision::Single);
        assert_eq!(pair[1].precision, Precision::Double);
        assert_eq!(pair[0].window, pair[1].window);
    }

    let windows: Vec<usize> = reports.iter().step_by(2).map(|r| r.window).collect();
    assert_eq!(windows, vec![4, 8, 16, 32, 64, 128]);
}

#[test]
fn test_reports_measure_against_input_length() {
    let (bench, mut rng) = seeded(2_000, vec![16]);
    for report in bench.run_collect(&mut rng).unwrap() {
        assert_eq!(report.input_len, 2_000);
        if let Some(throughput) = report.throughput {
            let millis = report.elapsed.as_nanos() as f64 / 1e6;
            assert!(approx_eq_relative(throughput.per_millisecond, 2_000.0 / millis, 1e-9));
            assert!(approx_eq_relative(
                throughput.per_second,
                throughput.per_millisecond * 1_000.0,
                1e-12
            ));
        }
    }
}

#[test]
fn test_window_len_minus_one_succeeds() {
    let (bench, mut rng) = seeded(129, vec![128]);
    assert_eq!(bench.run_collect(&mut rng).unwrap().len(), 2);
}

#[test]
fn test_window_equal_to_len_is_empty_result() {
    let (bench, mut rng) = seeded(128, vec![4, 128]);
    assert_eq!(
        bench.run_collect(&mut rng),
        Err(Error::EmptyResult { window: 128 })
    );
}

#[test]
fn test_zero_length_is_empty_result() {
    let (bench, mut rng) = seeded(0, vec![4]);
    assert_eq!(
        bench.run_collect(&mut rng),
        Err(Error::EmptyResult { window: 4 })
    );
}

#[test]
fn test_same_seed_same_samples() {
    let mut a = rng_from_seed(Seed::Fixed(5));
    let mut b = rng_from_seed(Seed::Fixed(5));
    assert_eq!(
        Samples::generate(1_000, &mut a).unwrap(),
        Samples::generate(1_000, &mut b).unwrap()
    );
}

#[test]
fn test_samples_average_matches_direct_mean() {
    let mut rng = rng_from_seed(Seed::Fixed(11));
    let samples = Samples::generate(500, &mut rng).unwrap();

    let average = moving_average(&samples.double, 8).unwrap();
    assert_eq!(average.len(), 492);
    for (i, value) in average.iter().enumerate() {
        let expected = samples.double[i..i + 8].iter().sum::<f64>() / 8.0;
        if expected.is_finite() {
            assert!(approx_eq_relative(*value, expected, 1e-12));
        } else {
            // zero denominators make inf samples
            assert!(!value.is_finite());
        }
    }
}

#[test]
fn test_report_scenario_ten_millis() {
    let average = vec![0.5_f32, 1.0, 1.5, 2.0];
    let report = report(&average, 4, Duration::from_millis(10), 1_000_000).unwrap();
    let throughput = report.throughput.unwrap();
    assert_eq!(throughput.per_millisecond, 100_000.0);
    assert_eq!(throughput.per_second, 100_000_000.0);
}

#[test]
fn test_report_scenario_empty() {
    let average: Vec<f32> = Vec::new();
    assert_eq!(
        report(&average, 4, Duration::from_millis(10), 1_000_000),
        Err(Error::EmptyResult { window: 4 })
    );
}
