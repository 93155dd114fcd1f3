//! Round-trip properties for every engine and every distribution.

use rrng::dist::Distribution;
use rrng::engine::{BitGenerator, ReversibleEngine};
use rrng::{
    Exponential, Normal, ReversibleMersenne, ReversiblePcg32, ReversiblePcg64,
    ReversiblePcg64Cheap, ReversibleRng, UniformInt, UniformReal,
};

const ENGINE_DRAWS: usize = 1_000_000;
const COMPOSITE_DRAWS: usize = 10_000;

// =============================================================================
// Engine-level round trips
// =============================================================================

fn engine_round_trip<E>(mut engine: E)
where
    E: ReversibleEngine,
    E::Output: std::fmt::Debug,
{
    let forward: Vec<E::Output> = (0..ENGINE_DRAWS).map(|_| engine.generate()).collect();
    for value in forward.into_iter().rev() {
        assert_eq!(value, engine.previous());
    }
}

#[test]
fn test_pcg32_engine_round_trip() {
    engine_round_trip(ReversiblePcg32::new(42));
}

#[test]
fn test_pcg64_engine_round_trip() {
    engine_round_trip(ReversiblePcg64::new(42));
}

#[test]
fn test_pcg64_cheap_engine_round_trip() {
    engine_round_trip(ReversiblePcg64Cheap::new(42));
}

#[test]
fn test_mersenne_engine_round_trip() {
    engine_round_trip(ReversibleMersenne::new(42));
}

#[test]
fn test_pcg_round_trip_restores_state_exactly() {
    let mut engine = ReversiblePcg64::new(42);
    let initial = engine.clone();
    for _ in 0..1000 {
        engine.next();
    }
    for _ in 0..1000 {
        engine.previous();
    }
    assert_eq!(engine, initial);
}

// =============================================================================
// Composite round trips over the engine x distribution matrix
// =============================================================================

fn composite_round_trip<D, E>(mut rng: ReversibleRng<D, E>)
where
    E: ReversibleEngine,
    D: Distribution<E::Output> + Clone + PartialEq + std::fmt::Debug,
    D::Value: PartialEq + std::fmt::Debug,
    ReversibleRng<D, E>: Clone + PartialEq,
{
    let twin = rng.clone();

    let forward = rng.next_n(COMPOSITE_DRAWS).unwrap();
    assert_eq!(rng.position(), COMPOSITE_DRAWS as i64);

    let backward = rng.previous_n(COMPOSITE_DRAWS).unwrap();
    assert_eq!(forward, backward);
    assert_eq!(rng.position(), 0);

    // Observable equivalence with a twin that never round-tripped: all
    // further draws match. (The Mersenne block array may sit one twist
    // ahead of the seeded image, so bit-equality is checked only through
    // behavior here; the PCG engines are also covered bit-exactly above.)
    let mut twin = twin;
    assert_eq!(rng.next_n(500).unwrap(), twin.next_n(500).unwrap());
}

macro_rules! composite_matrix {
    ($name:ident, $engine:ty) => {
        mod $name {
            use super::*;

            #[test]
            fn test_uniform_int_round_trip() {
                composite_round_trip::<_, $engine>(ReversibleRng::with_seed(
                    UniformInt::new(-10i32, 10).unwrap(),
                    42,
                ));
            }

            #[test]
            fn test_uniform_real_round_trip() {
                composite_round_trip::<_, $engine>(ReversibleRng::with_seed(
                    UniformReal::new(-10.0f64, 10.0).unwrap(),
                    42,
                ));
            }

            #[test]
            fn test_uniform_real_f32_round_trip() {
                composite_round_trip::<_, $engine>(ReversibleRng::with_seed(
                    UniformReal::new(-10.0f32, 10.0).unwrap(),
                    42,
                ));
            }

            #[test]
            fn test_wide_uniform_int_round_trip() {
                composite_round_trip::<_, $engine>(ReversibleRng::with_seed(
                    UniformInt::new(0u64, u64::MAX).unwrap(),
                    42,
                ));
            }
        }
    };
}

composite_matrix!(pcg32, ReversiblePcg32);
composite_matrix!(pcg64, ReversiblePcg64);
composite_matrix!(pcg64_cheap, ReversiblePcg64Cheap);
composite_matrix!(mersenne, ReversibleMersenne);

// The normal and exponential distributions consume 64-bit words, so they
// pair with the 64-bit engines.
macro_rules! composite_matrix_64 {
    ($name:ident, $engine:ty) => {
        mod $name {
            use super::*;

            #[test]
            fn test_normal_round_trip() {
                composite_round_trip::<_, $engine>(ReversibleRng::with_seed(
                    Normal::new(0.0f64, 1.0).unwrap(),
                    42,
                ));
            }

            #[test]
            fn test_normal_f32_round_trip() {
                composite_round_trip::<_, $engine>(ReversibleRng::with_seed(
                    Normal::new(0.0f32, 1.0).unwrap(),
                    42,
                ));
            }

            #[test]
            fn test_exponential_round_trip() {
                composite_round_trip::<_, $engine>(ReversibleRng::with_seed(
                    Exponential::new(1.0f64).unwrap(),
                    42,
                ));
            }
        }
    };
}

composite_matrix_64!(pcg64_real_dists, ReversiblePcg64);
composite_matrix_64!(pcg64_cheap_real_dists, ReversiblePcg64Cheap);
composite_matrix_64!(mersenne_real_dists, ReversibleMersenne);

// =============================================================================
// Discard equivalence
// =============================================================================

fn engine_discard_equivalence<E>(mut discarded: E, mut stepped: E)
where
    E: ReversibleEngine + PartialEq + std::fmt::Debug,
{
    discarded.discard(ENGINE_DRAWS as u64);
    for _ in 0..ENGINE_DRAWS {
        stepped.generate();
    }
    assert_eq!(discarded, stepped);
    assert_eq!(discarded.generate(), stepped.generate());
}

#[test]
fn test_pcg32_discard_equivalence() {
    engine_discard_equivalence(ReversiblePcg32::new(7), ReversiblePcg32::new(7));
}

#[test]
fn test_pcg64_discard_equivalence() {
    engine_discard_equivalence(ReversiblePcg64::new(7), ReversiblePcg64::new(7));
}

#[test]
fn test_mersenne_discard_equivalence() {
    engine_discard_equivalence(ReversibleMersenne::new(7), ReversibleMersenne::new(7));
}

#[test]
fn test_composite_discard_equivalence() {
    let dist = Normal::new(0.0f64, 1.0).unwrap();
    let mut a: ReversibleRng<_, ReversiblePcg64> = ReversibleRng::with_seed(dist, 7);
    let mut b = a.clone();

    a.discard(10_000).unwrap();
    for _ in 0..10_000 {
        b.next().unwrap();
    }
    assert_eq!(a, b);
}

// =============================================================================
// Seed reproducibility
// =============================================================================

#[test]
fn test_seeded_engines_compare_equal_and_agree() {
    let mut a = ReversiblePcg64::new(1234);
    let mut b = ReversiblePcg64::new(1234);
    assert_eq!(a, b);
    for _ in 0..10_000 {
        assert_eq!(a.next(), b.next());
    }
}

#[test]
fn test_reseed_after_advance_restores_agreement() {
    let mut a = ReversibleMersenne::new(5);
    let mut b = ReversibleMersenne::new(99);
    b.discard(ENGINE_DRAWS as u64);
    b.seed(5);
    assert_eq!(a, b);
    assert_eq!(a.next(), b.next());
}

#[test]
fn test_seeded_composites_compare_equal() {
    let dist = UniformReal::new(0.0f64, 1.0).unwrap();
    let mut a: ReversibleRng<_, ReversiblePcg64> = ReversibleRng::with_seed(dist, 1234);
    let mut b: ReversibleRng<_, ReversiblePcg64> = ReversibleRng::with_seed(dist, 1234);
    assert_eq!(a, b);
    for _ in 0..1000 {
        assert_eq!(a.next().unwrap(), b.next().unwrap());
    }
}

// =============================================================================
// Bulk parity
// =============================================================================

#[test]
fn test_bulk_forward_matches_scalar_draws() {
    let dist = Normal::new(0.0f64, 1.0).unwrap();
    let mut bulk: ReversibleRng<_, ReversiblePcg64> = ReversibleRng::with_seed(dist, 42);
    let mut scalar = bulk.clone();

    let values = bulk.next_n(1000).unwrap();
    let singles: Vec<f64> = (0..1000).map(|_| scalar.next().unwrap()).collect();
    assert_eq!(values, singles);
    assert_eq!(bulk, scalar);
}

#[test]
fn test_bulk_backward_fills_natural_order() {
    let dist = UniformInt::new(0i64, 1000).unwrap();
    let mut rng: ReversibleRng<_, ReversiblePcg64> = ReversibleRng::with_seed(dist, 42);

    let forward = rng.next_n(100).unwrap();
    let mut expected_tail = forward[60..].to_vec();
    let tail = rng.previous_n(40).unwrap();
    assert_eq!(tail, expected_tail);

    expected_tail = forward[..60].to_vec();
    assert_eq!(rng.previous_n(60).unwrap(), expected_tail);
    assert_eq!(rng.position(), 0);
}
