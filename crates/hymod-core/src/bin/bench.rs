/// Pure Rust core benchmark for HYMOD.
///
/// Uses std::time::Instant for timing, a deterministic LCG PRNG for data generation,
/// and std::hint::black_box to prevent dead-code elimination.
use std::hint::black_box;
use std::time::{Duration, Instant};

use hymod_core::hymod::params::Parameters;
use hymod_core::hymod::run;
use hymod_core::metrics::{score, ErrorMetric};

const REPEATS: usize = 7;

/// Simple LCG PRNG for deterministic data generation.
fn make_data(n: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut state = seed;
    let mut next_f64 = || -> f64 {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) as f64 / (1u64 << 31) as f64
    };

    // Mostly dry days with occasional storms.
    let precip: Vec<f64> = (0..n)
        .map(|_| {
            let u = next_f64();
            if u < 0.6 {
                0.0
            } else {
                next_f64() * 40.0
            }
        })
        .collect();
    let pet: Vec<f64> = (0..n).map(|_| 0.5 + next_f64() * 4.5).collect();
    (precip, pet)
}

/// Run a closure `REPEATS` times, return the median duration.
fn median_time<F: FnMut()>(mut f: F) -> Duration {
    let mut times: Vec<Duration> = (0..REPEATS)
        .map(|_| {
            let start = Instant::now();
            f();
            start.elapsed()
        })
        .collect();
    times.sort();
    times[REPEATS / 2]
}

fn bench_run(label: &'static str, params: &Parameters, sizes: &[usize]) -> Vec<(&'static str, usize, Duration)> {
    let mut results = Vec::new();

    for &n in sizes {
        let (precip, pet) = make_data(n, 42);

        // Warmup
        let _ = black_box(run::run(params, &precip, &pet, None));

        let dur = median_time(|| {
            let _ = black_box(run::run(params, &precip, &pet, None));
        });
        results.push((label, n, dur));
    }
    results
}

fn bench_metrics(sizes: &[usize]) -> Vec<(&'static str, usize, Duration)> {
    let mut results = Vec::new();

    for &n in sizes {
        let (obs, sim) = make_data(n, 7);

        let dur = median_time(|| {
            for metric in ErrorMetric::ALL {
                let _ = black_box(score(&obs, &sim, &obs, metric));
            }
        });
        results.push(("metrics", n, dur));
    }
    results
}

fn main() {
    let sizes = [365, 3_650, 36_500, 365_000];

    let default_params = Parameters::default();
    let long_cascade = Parameters {
        n_reservoirs: 7,
        ..Parameters::default()
    };

    let mut rows = Vec::new();
    rows.extend(bench_run("hymod n=3", &default_params, &sizes));
    rows.extend(bench_run("hymod n=7", &long_cascade, &sizes));
    rows.extend(bench_metrics(&sizes));

    println!("{:<12} | {:>9} | {:>12} | {:>12}", "case", "steps", "median", "ns/step");
    println!("{:-<12}-+-{:->9}-+-{:->12}-+-{:->12}", "", "", "", "");
    for (label, n, dur) in rows {
        println!(
            "{:<12} | {:>9} | {:>12.3?} | {:>12.1}",
            label,
            n,
            dur,
            dur.as_nanos() as f64 / n as f64
        );
    }
}
