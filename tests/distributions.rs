//! Distribution-level properties: range correctness, consumption
//! determinism, and the widening path for narrow sources.

use rrng::dist::Distribution;
use rrng::engine::{BitGenerator, ReversibleEngine};
use rrng::{
    Exponential, Normal, PolarNormal, ReversiblePcg32, ReversiblePcg64, ReversibleRng, RngError,
    UniformInt, UniformReal,
};

/// Wrapper that counts how many words a distribution pulls from the
/// underlying source.
struct Counting<E> {
    inner: E,
    words: u64,
}

impl<E> Counting<E> {
    fn new(inner: E) -> Self {
        Self { inner, words: 0 }
    }
}

impl<E: BitGenerator> BitGenerator for Counting<E> {
    type Output = E::Output;

    fn generate(&mut self) -> E::Output {
        self.words += 1;
        self.inner.generate()
    }
}

impl<E: ReversibleEngine> ReversibleEngine for Counting<E> {
    fn previous(&mut self) -> E::Output {
        self.words += 1;
        self.inner.previous()
    }

    fn seed(&mut self, seed: u64) {
        self.inner.seed(seed);
    }

    fn discard(&mut self, n: u64) {
        self.inner.discard(n);
    }
}

// =============================================================================
// Consumption determinism
// =============================================================================

#[test]
fn test_normal_consumes_exactly_one_word_per_sample() {
    let mut dist = Normal::new(0.0f64, 1.0).unwrap();
    let mut source = Counting::new(ReversiblePcg64::new(42));

    let samples: u64 = 1_000_000;
    for _ in 0..samples {
        dist.sample(&mut source).unwrap();
    }

    assert_eq!(source.words, samples);
}

#[test]
fn test_normal_backward_consumption_matches_forward() {
    let mut dist = Normal::new(0.0f64, 1.0).unwrap();
    let mut source = Counting::new(ReversiblePcg64::new(42));

    for _ in 0..10_000 {
        dist.sample(&mut source).unwrap();
    }
    let forward_words = source.words;

    let mut reversed = rrng::ReversedEngine::new(&mut source);
    let mut dist = Normal::new(0.0f64, 1.0).unwrap();
    for _ in 0..10_000 {
        dist.sample(&mut reversed).unwrap();
    }

    assert_eq!(source.words, 2 * forward_words);
}

#[test]
fn test_exponential_consumes_exactly_one_word_per_sample() {
    let mut dist = Exponential::new(1.0f64).unwrap();
    let mut source = Counting::new(ReversiblePcg64::new(42));

    for _ in 0..100_000u64 {
        dist.sample(&mut source).unwrap();
    }

    assert_eq!(source.words, 100_000);
}

#[test]
fn test_uniform_real_consumes_exactly_one_word_per_sample() {
    let mut dist = UniformReal::new(-1.0f64, 1.0).unwrap();
    let mut source = Counting::new(ReversiblePcg64::new(42));

    for _ in 0..100_000u64 {
        dist.sample(&mut source).unwrap();
    }

    assert_eq!(source.words, 100_000);
}

#[test]
fn test_widening_path_consumes_exactly_three_words_per_sample() {
    let mut dist = UniformInt::new(0u64, u64::MAX - 1).unwrap();
    let mut source = Counting::new(ReversiblePcg32::new(42));

    for _ in 0..10_000u64 {
        dist.sample(&mut source).unwrap();
    }

    assert_eq!(source.words, 30_000);
}

// =============================================================================
// Range correctness
// =============================================================================

#[test]
fn test_uniform_int_covers_bounds() {
    let mut rng: ReversibleRng<_, ReversiblePcg64> =
        ReversibleRng::with_seed(UniformInt::new(0i32, 3).unwrap(), 42);
    let mut seen = [false; 4];
    for _ in 0..1000 {
        seen[rng.next().unwrap() as usize] = true;
    }
    assert_eq!(seen, [true; 4]);
}

#[test]
fn test_uniform_int_in_range() {
    let mut rng: ReversibleRng<_, ReversiblePcg64> =
        ReversibleRng::with_seed(UniformInt::new(-1000i64, 1000).unwrap(), 42);
    for _ in 0..100_000 {
        assert!((-1000..=1000).contains(&rng.next().unwrap()));
    }
}

#[test]
fn test_uniform_real_in_half_open_range() {
    let mut rng: ReversibleRng<_, ReversiblePcg64> =
        ReversibleRng::with_seed(UniformReal::new(-10.0f64, 10.0).unwrap(), 42);
    for _ in 0..100_000 {
        let value = rng.next().unwrap();
        assert!((-10.0..10.0).contains(&value));
    }
}

#[test]
fn test_exponential_non_negative() {
    let mut rng: ReversibleRng<_, ReversiblePcg64> =
        ReversibleRng::with_seed(Exponential::new(0.5f64).unwrap(), 42);
    for _ in 0..100_000 {
        let value = rng.next().unwrap();
        assert!(value >= 0.0 && value.is_finite());
    }
}

#[test]
fn test_normal_finite() {
    let mut rng: ReversibleRng<_, ReversiblePcg64> =
        ReversibleRng::with_seed(Normal::new(5.0f64, 2.0).unwrap(), 42);
    for _ in 0..100_000 {
        assert!(rng.next().unwrap().is_finite());
    }
}

// =============================================================================
// Widening path reversal (32-bit engine, 64-bit span)
// =============================================================================

#[test]
fn test_wide_span_reverses_over_narrow_engine() {
    let dist = UniformInt::new(0u64, u64::MAX).unwrap();
    let mut rng: ReversibleRng<_, ReversiblePcg32> = ReversibleRng::with_seed(dist, 42);

    let forward = rng.next_n(10_000).unwrap();
    let backward = rng.previous_n(10_000).unwrap();
    assert_eq!(forward, backward);
    assert_eq!(rng.position(), 0);
}

#[test]
fn test_wide_span_values_spread_over_u64() {
    // The xor-seeded expansion must reach words a 32-bit source alone
    // cannot produce.
    let dist = UniformInt::new(0u64, u64::MAX).unwrap();
    let mut rng: ReversibleRng<_, ReversiblePcg32> = ReversibleRng::with_seed(dist, 42);
    let mut above_32_bits = 0;
    for _ in 0..1000 {
        if rng.next().unwrap() > u64::from(u32::MAX) {
            above_32_bits += 1;
        }
    }
    assert!(above_32_bits > 900);
}

// =============================================================================
// Parameter validation at the composite boundary
// =============================================================================

#[test]
fn test_invalid_parameters_reported() {
    assert!(matches!(
        UniformInt::new(10i32, -10),
        Err(RngError::InvalidParameter { .. })
    ));
    assert!(matches!(
        Normal::new(0.0f64, -1.0),
        Err(RngError::InvalidParameter { .. })
    ));
    assert!(matches!(
        Exponential::new(0.0f64),
        Err(RngError::InvalidParameter { .. })
    ));
    assert!(matches!(
        PolarNormal::new(0.0f64, 0.0),
        Err(RngError::InvalidParameter { .. })
    ));
}

// =============================================================================
// Polar method (buffered distribution) through direction changes
// =============================================================================

#[test]
fn test_polar_long_round_trip() {
    let mut rng = PolarNormal::with_seed(5.0f64, 2.0, 42).unwrap();
    let forward: Vec<f64> = (0..10_001).map(|_| rng.next().unwrap()).collect();
    for value in forward.into_iter().rev() {
        assert_eq!(value, rng.previous().unwrap());
    }
}

#[test]
fn test_polar_interleaved_directions() {
    let mut rng = PolarNormal::with_seed(0.0f64, 1.0, 9).unwrap();
    let mut trace = Vec::new();
    for _ in 0..100 {
        trace.push(rng.next().unwrap());
    }
    // Walk back 30, forward 30, repeatedly; the replay must match the
    // trace at every step.
    for _ in 0..3 {
        for i in (70..100).rev() {
            assert_eq!(rng.previous().unwrap(), trace[i]);
        }
        for i in 70..100 {
            assert_eq!(rng.next().unwrap(), trace[i]);
        }
    }
}
