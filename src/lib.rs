/*!
# Rrng - Reversible random number generation

Rust implementation of pseudo-random number generators whose sequences can
be traversed forward (`next`) and backward (`previous`) with bit-for-bit
symmetry, across raw bit sources and the common continuous and discrete
distributions.

## Features

- Reversible PCG engines (32- and 64-bit output, default and cheap
  128-bit multipliers) that invert their LCG state step algebraically
- A reversible 64-bit Mersenne twister that inverts its block update
- Uniform int/real, Ziggurat normal, and exponential distributions with
  deterministic bit-source consumption
- A composite generator with signed position tracking, bulk draws, and
  round-trippable textual serialization
- A C-compatible handle-based foreign-function surface

## Modules

- [`engine`] - Reversible bit sources and their traits
- [`dist`] - Distributions sampling from a bit source
- [`rng`] - The composite generator binding engine to distribution
- [`common`] - Low-level utilities: bit mapping, seed expansion
- [`battery`] - Statistical test-battery adapter
- [`ffi`] - C-compatible bindings

## Example

```rust
use rrng::{Normal, NormalRng, ReversibleRng};

fn main() -> Result<(), rrng::RngError> {
    let mut rng: NormalRng<f64> = ReversibleRng::with_seed(Normal::new(0.0, 1.0)?, 42);

    let forward = rng.next_n(1000)?;
    let backward = rng.previous_n(1000)?;

    assert_eq!(forward, backward);
    assert_eq!(rng.position(), 0);
    Ok(())
}
```
*/

// ============================================================================
// Core modules
// ============================================================================

/// Low-level utilities (bit mapping, seed expansion, auxiliary generation)
pub mod common;

/// Reversible bit sources: PCG and Mersenne engines, direction adapter
pub mod engine;

/// Distributions sampling from a reversible bit source
pub mod dist;

/// Composite reversible generator with position tracking
pub mod rng;

/// Error types
pub mod errors;

/// Statistical test-battery adapter
pub mod battery;

/// C-compatible foreign-function surface
pub mod ffi;

/// Textual state serialization
pub mod text;

/// Benchmark helpers shared by the criterion benches and the runner binary
pub mod bench_utils;

// ============================================================================
// Re-exports for convenience
// ============================================================================

// Engines
pub use engine::{
    BitGenerator, CheapMultiplier, DefaultMultiplier, Multiplier128, ReversedEngine,
    ReversibleEngine, ReversibleMersenne, ReversiblePcg128, ReversiblePcg32, ReversiblePcg64,
    ReversiblePcg64Cheap, Word,
};

// Auxiliary generators
pub use common::{SplitMix64, Xoshiro256};

// Distributions
pub use dist::{
    Distribution, Exponential, Float, Normal, PolarNormal, SampleInt, UniformInt, UniformReal,
};

// Composite generator
pub use rng::{ExponentialRng, NormalRng, ReversibleRng, UniformIntRng, UniformRealRng};

// Errors
pub use errors::RngError;

// Serialization
pub use text::TextState;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
