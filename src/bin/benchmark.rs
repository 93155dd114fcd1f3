//! Minimal benchmark runner for the reversible generators.
//!
//! Usage:
//!     benchmark [--number N] [--repeat R] [--config path.json]
//!
//! Output:
//!     One CSV row per generator shape:
//!     `name, <next ns> (ns), <previous ns> (ns)`

use std::fmt::Debug;
use std::hint::black_box;

use clap::Parser;

use rrng::bench_utils::{average_over, time_per_call, BenchConfig, DEFAULT_NUMBER, DEFAULT_REPEAT};
use rrng::dist::Distribution;
use rrng::engine::ReversibleEngine;
use rrng::{
    Exponential, Normal, ReversibleMersenne, ReversiblePcg32, ReversiblePcg64, ReversibleRng,
    UniformInt, UniformReal,
};

#[derive(Parser)]
#[command(name = "benchmark")]
#[command(about = "Average nanoseconds per call for each reversible generator")]
struct Args {
    /// Path to a JSON benchmark configuration
    #[arg(long)]
    config: Option<String>,

    /// Calls per measurement round
    #[arg(long, default_value_t = DEFAULT_NUMBER)]
    number: usize,

    /// Measurement rounds to average
    #[arg(long, default_value_t = DEFAULT_REPEAT)]
    repeat: usize,
}

fn bench_generator<D, E>(name: &str, mut rng: ReversibleRng<D, E>, config: BenchConfig)
where
    E: ReversibleEngine,
    D: Distribution<E::Output>,
    D::Value: PartialEq + Debug,
{
    let first = rng.next().expect("forward draw failed");

    let next = average_over(
        || {
            time_per_call(
                || {
                    black_box(rng.next().expect("forward draw failed"));
                },
                config.number,
            )
        },
        config.repeat,
    );
    let previous = average_over(
        || {
            time_per_call(
                || {
                    black_box(rng.previous().expect("backward draw failed"));
                },
                config.number,
            )
        },
        config.repeat,
    );

    // Equal forward and backward call counts put the generator right after
    // its first draw; one more backward step must reproduce it.
    let replayed = rng.previous().expect("backward draw failed");
    assert_eq!(replayed, first, "{}: reversal failed", name);

    println!("{}, {:.2} (ns), {:.2} (ns)", name, next, previous);
}

fn main() {
    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => rrng::bench_utils::load_config(path),
        None => BenchConfig::default(),
    };
    if args.number != DEFAULT_NUMBER {
        config.number = args.number;
    }
    if args.repeat != DEFAULT_REPEAT {
        config.repeat = args.repeat;
    }

    bench_generator::<_, ReversiblePcg64>(
        "uniform_int_pcg64",
        ReversibleRng::new(UniformInt::new(-10i32, 10).expect("valid bounds")),
        config,
    );
    bench_generator::<_, ReversiblePcg64>(
        "uniform_real_pcg64",
        ReversibleRng::new(UniformReal::new(0.0f64, 1.0).expect("valid bounds")),
        config,
    );
    bench_generator::<_, ReversiblePcg64>(
        "normal_pcg64",
        ReversibleRng::new(Normal::new(0.0f64, 1.0).expect("valid parameters")),
        config,
    );
    bench_generator::<_, ReversiblePcg64>(
        "exponential_pcg64",
        ReversibleRng::new(Exponential::new(1.0f64).expect("valid parameters")),
        config,
    );
    bench_generator::<_, ReversiblePcg32>(
        "uniform_real_pcg32",
        ReversibleRng::new(UniformReal::new(0.0f64, 1.0).expect("valid bounds")),
        config,
    );
    bench_generator::<_, ReversibleMersenne>(
        "uniform_real_mersenne",
        ReversibleRng::new(UniformReal::new(0.0f64, 1.0).expect("valid bounds")),
        config,
    );
    bench_generator::<_, ReversibleMersenne>(
        "normal_mersenne",
        ReversibleRng::new(Normal::new(0.0f64, 1.0).expect("valid parameters")),
        config,
    );
}
