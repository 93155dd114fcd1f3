//! Core traits for uniform bit sources and their reversible refinement.

use std::fmt;

/// Unsigned output word of a uniform bit source.
///
/// Implemented for `u32` and `u64`, the two widths the engines emit.
/// Sources cover the full range `[0, Self::FULL]` so the distributions can
/// rely on every bit being uniform.
pub trait Word: Copy + Eq + Ord + fmt::Debug + fmt::Display {
    /// Width in bits.
    const BITS: u32;

    /// Largest representable word.
    const FULL: Self;

    /// Maps the word's high mantissa-width bits to `[0, 1)`.
    fn canonical(self) -> f64;

    /// Widens to `u64` without sign interpretation.
    fn to_u64(self) -> u64;
}

impl Word for u32 {
    const BITS: u32 = 32;
    const FULL: Self = u32::MAX;

    #[inline]
    fn canonical(self) -> f64 {
        crate::common::bits::float32(self) as f64
    }

    #[inline]
    fn to_u64(self) -> u64 {
        u64::from(self)
    }
}

impl Word for u64 {
    const BITS: u32 = 64;
    const FULL: Self = u64::MAX;

    #[inline]
    fn canonical(self) -> f64 {
        crate::common::bits::float64(self)
    }

    #[inline]
    fn to_u64(self) -> u64 {
        self
    }
}

/// A forward-drawing uniform random bit source.
///
/// Each call to [`generate`](Self::generate) consumes exactly one output
/// word; the distributions build their consumption guarantees on top of
/// that unit.
pub trait BitGenerator {
    /// Output word type (`u32` or `u64`).
    type Output: Word;

    /// Draws the next word.
    fn generate(&mut self) -> Self::Output;
}

/// A bit source that can also step backward, reseed, and skip ahead.
///
/// Invariant: after any interleaving of `generate` and `previous` calls,
/// the observable state equals the state reached by issuing the net call
/// count of `generate`s from the same seed, and the backward outputs are
/// the forward outputs in reverse order.
pub trait ReversibleEngine: BitGenerator {
    /// Inverse of [`BitGenerator::generate`].
    fn previous(&mut self) -> Self::Output;

    /// Reseeds the engine, discarding all current state.
    fn seed(&mut self, seed: u64);

    /// Advances the engine as if by `n` calls to `generate`.
    fn discard(&mut self, n: u64);
}
