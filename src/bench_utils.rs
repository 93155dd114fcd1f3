//! Benchmark utilities shared between the Criterion benchmarks and the
//! benchmark binary.

use std::fs;
use std::time::Instant;

use serde::Deserialize;

/// Measurement rounds averaged per row.
pub const DEFAULT_REPEAT: usize = 5;

/// Calls per measurement round.
pub const DEFAULT_NUMBER: usize = 10_000_000;

/// Benchmark configuration loadable from JSON.
#[derive(Deserialize, Clone, Copy)]
pub struct BenchConfig {
    /// Measurement rounds averaged per row.
    #[serde(default = "default_repeat")]
    pub repeat: usize,
    /// Calls per measurement round.
    #[serde(default = "default_number")]
    pub number: usize,
}

fn default_repeat() -> usize {
    DEFAULT_REPEAT
}

fn default_number() -> usize {
    DEFAULT_NUMBER
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            repeat: DEFAULT_REPEAT,
            number: DEFAULT_NUMBER,
        }
    }
}

/// Loads a [`BenchConfig`] from a JSON file.
pub fn load_config(path: &str) -> BenchConfig {
    let content = fs::read_to_string(path).expect("Failed to read benchmark config");
    serde_json::from_str(&content).expect("Failed to parse benchmark config JSON")
}

/// Average nanoseconds per call of `op` over `number` invocations.
pub fn time_per_call<F: FnMut()>(mut op: F, number: usize) -> f64 {
    let start = Instant::now();
    for _ in 0..number {
        op();
    }
    start.elapsed().as_nanos() as f64 / number as f64
}

/// Averages `measure` over `repeat` rounds.
pub fn average_over<F: FnMut() -> f64>(mut measure: F, repeat: usize) -> f64 {
    let mut sum = 0.0;
    for _ in 0..repeat {
        sum += measure();
    }
    sum / repeat as f64
}
