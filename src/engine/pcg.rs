//! Reversible permuted congruential generators.
//!
//! The internal state evolves by a linear congruential step
//! `state' = state * MULTIPLIER + increment (mod 2^w)` and the output is a
//! permutation of the state. Stepping backward inverts ("unbumps") the LCG
//! step with the precomputed multiplicative inverse of the multiplier and
//! reapplies the same output permutation, so the backward stream is the
//! exact reverse of the forward stream.

use std::fmt;
use std::marker::PhantomData;
use std::str::{FromStr, SplitWhitespace};

use crate::engine::{BitGenerator, ReversibleEngine};
use crate::errors::RngError;
use crate::text::{next_token, parse_all, TextState};

const PCG32_MULTIPLIER: u64 = 6364136223846793005;
const PCG32_MULTIPLIER_INVERSE: u64 = 13877824140714322085;
const PCG32_DEFAULT_INCREMENT: u64 = 1442695040888963407;

const PCG64_DEFAULT_INCREMENT: u128 =
    (6364136223846793005u128 << 64) | 1442695040888963407u128;

/// State used by [`Default`] before the seeding bump is applied.
const DEFAULT_STATE: u64 = 0xcafef00dd15ea5e5;

/// Compile-time multiplier configuration for the 128-bit engines.
///
/// The inverse satisfies `MULTIPLIER * MULTIPLIER_INVERSE == 1 (mod 2^128)`.
pub trait Multiplier128 {
    /// LCG multiplier.
    const MULTIPLIER: u128;

    /// Multiplicative inverse of [`MULTIPLIER`](Self::MULTIPLIER) modulo
    /// 2^128.
    const MULTIPLIER_INVERSE: u128;
}

/// The standard 128-bit PCG multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultMultiplier;

impl Multiplier128 for DefaultMultiplier {
    const MULTIPLIER: u128 = (2549297995355413924u128 << 64) | 4865540595714422341u128;
    const MULTIPLIER_INVERSE: u128 =
        (566787436162029664u128 << 64) | 11001107174925446285u128;
}

/// The "cheap" 128-bit multiplier: fits in 64 bits, so the LCG step needs
/// one fewer wide multiplication on most targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheapMultiplier;

impl Multiplier128 for CheapMultiplier {
    const MULTIPLIER: u128 = 0xda942042e4dd58b5;
    const MULTIPLIER_INVERSE: u128 =
        (924194304566127212u128 << 64) | 10053033838670173597u128;
}

/// Reversible PCG with 64-bit state and 32-bit XSH-RR output.
///
/// This configuration emits the permutation of the *pre-step* state
/// ("output-previous"), so the backward step unbumps first and then applies
/// the permutation to the restored state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReversiblePcg32 {
    state: u64,
    increment: u64,
}

impl ReversiblePcg32 {
    /// Creates an engine on the default output stream.
    pub fn new(seed: u64) -> Self {
        let mut engine = Self {
            state: 0,
            increment: PCG32_DEFAULT_INCREMENT,
        };
        engine.seed(seed);
        engine
    }

    /// Creates an engine on the output stream selected by `stream`.
    ///
    /// The increment is forced odd, so each of the 2^63 streams is a
    /// distinct full-period sequence.
    pub fn with_stream(seed: u64, stream: u64) -> Self {
        let mut engine = Self {
            state: 0,
            increment: (stream << 1) | 1,
        };
        engine.seed(seed);
        engine
    }

    /// Reseeds the engine on its current stream.
    pub fn seed(&mut self, seed: u64) {
        self.state = self.bump(seed.wrapping_add(self.increment));
    }

    /// Draws the next 32-bit word.
    #[inline]
    pub fn next(&mut self) -> u32 {
        let old_state = self.state;
        self.state = self.bump(old_state);
        Self::output(old_state)
    }

    /// Inverse of [`next`](Self::next).
    #[inline]
    pub fn previous(&mut self) -> u32 {
        self.state = self.unbump(self.state);
        Self::output(self.state)
    }

    /// Advances the engine as if by `n` calls to [`next`](Self::next).
    pub fn discard(&mut self, n: u64) {
        for _ in 0..n {
            self.state = self.bump(self.state);
        }
    }

    #[inline]
    fn bump(&self, state: u64) -> u64 {
        state
            .wrapping_mul(PCG32_MULTIPLIER)
            .wrapping_add(self.increment)
    }

    #[inline]
    fn unbump(&self, state: u64) -> u64 {
        state
            .wrapping_sub(self.increment)
            .wrapping_mul(PCG32_MULTIPLIER_INVERSE)
    }

    // XSH-RR: xorshift high bits, then rotate by the top 5 bits.
    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl Default for ReversiblePcg32 {
    fn default() -> Self {
        Self::new(DEFAULT_STATE)
    }
}

impl BitGenerator for ReversiblePcg32 {
    type Output = u32;

    #[inline]
    fn generate(&mut self) -> u32 {
        self.next()
    }
}

impl ReversibleEngine for ReversiblePcg32 {
    #[inline]
    fn previous(&mut self) -> u32 {
        ReversiblePcg32::previous(self)
    }

    fn seed(&mut self, seed: u64) {
        ReversiblePcg32::seed(self, seed);
    }

    fn discard(&mut self, n: u64) {
        ReversiblePcg32::discard(self, n);
    }
}

impl TextState for ReversiblePcg32 {
    fn write_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.state, self.increment)
    }

    fn read_text(tokens: &mut SplitWhitespace<'_>) -> Result<Self, RngError> {
        let state = next_token(tokens, "pcg state")?;
        let increment = next_token(tokens, "pcg increment")?;
        Ok(Self { state, increment })
    }
}

impl fmt::Display for ReversiblePcg32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_text(f)
    }
}

impl FromStr for ReversiblePcg32 {
    type Err = RngError;

    fn from_str(s: &str) -> Result<Self, RngError> {
        parse_all(s)
    }
}

impl rand::RngCore for ReversiblePcg32 {
    fn next_u32(&mut self) -> u32 {
        self.next()
    }

    fn next_u64(&mut self) -> u64 {
        u64::from(self.next()) | (u64::from(self.next()) << 32)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_bytes_from_u64(|| rand::RngCore::next_u64(self), dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Reversible PCG with 128-bit state and 64-bit XSL-RR output, generic over
/// the multiplier configuration.
///
/// This configuration emits the permutation of the *post-step* state, so
/// the backward step applies the permutation to the current state and then
/// unbumps. Use the [`ReversiblePcg64`] and [`ReversiblePcg64Cheap`]
/// aliases rather than naming the multiplier directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReversiblePcg128<M: Multiplier128> {
    state: u128,
    increment: u128,
    multiplier: PhantomData<M>,
}

/// [`ReversiblePcg128`] on the standard multiplier.
pub type ReversiblePcg64 = ReversiblePcg128<DefaultMultiplier>;

/// [`ReversiblePcg128`] on the cheap 64-bit-wide multiplier.
pub type ReversiblePcg64Cheap = ReversiblePcg128<CheapMultiplier>;

impl<M: Multiplier128> ReversiblePcg128<M> {
    /// Creates an engine on the default output stream.
    pub fn new(seed: u64) -> Self {
        let mut engine = Self {
            state: 0,
            increment: PCG64_DEFAULT_INCREMENT,
            multiplier: PhantomData,
        };
        engine.seed(seed);
        engine
    }

    /// Creates an engine on the output stream selected by `stream`.
    pub fn with_stream(seed: u64, stream: u64) -> Self {
        let mut engine = Self {
            state: 0,
            increment: (u128::from(stream) << 1) | 1,
            multiplier: PhantomData,
        };
        engine.seed(seed);
        engine
    }

    /// Reseeds the engine on its current stream.
    pub fn seed(&mut self, seed: u64) {
        self.state = self.bump(u128::from(seed).wrapping_add(self.increment));
    }

    /// Draws the next 64-bit word.
    #[inline]
    pub fn next(&mut self) -> u64 {
        self.state = self.bump(self.state);
        Self::output(self.state)
    }

    /// Inverse of [`next`](Self::next).
    #[inline]
    pub fn previous(&mut self) -> u64 {
        let old_state = self.state;
        self.state = self.unbump(old_state);
        Self::output(old_state)
    }

    /// Advances the engine as if by `n` calls to [`next`](Self::next).
    pub fn discard(&mut self, n: u64) {
        for _ in 0..n {
            self.state = self.bump(self.state);
        }
    }

    #[inline]
    fn bump(&self, state: u128) -> u128 {
        state
            .wrapping_mul(M::MULTIPLIER)
            .wrapping_add(self.increment)
    }

    #[inline]
    fn unbump(&self, state: u128) -> u128 {
        state
            .wrapping_sub(self.increment)
            .wrapping_mul(M::MULTIPLIER_INVERSE)
    }

    // XSL-RR: fold the halves with xor, then rotate by the top 6 bits.
    #[inline]
    fn output(state: u128) -> u64 {
        let xored = ((state >> 64) as u64) ^ (state as u64);
        let rot = (state >> 122) as u32;
        xored.rotate_right(rot)
    }
}

impl<M: Multiplier128> Default for ReversiblePcg128<M> {
    fn default() -> Self {
        Self::new(DEFAULT_STATE)
    }
}

impl<M: Multiplier128> BitGenerator for ReversiblePcg128<M> {
    type Output = u64;

    #[inline]
    fn generate(&mut self) -> u64 {
        self.next()
    }
}

impl<M: Multiplier128> ReversibleEngine for ReversiblePcg128<M> {
    #[inline]
    fn previous(&mut self) -> u64 {
        ReversiblePcg128::previous(self)
    }

    fn seed(&mut self, seed: u64) {
        ReversiblePcg128::seed(self, seed);
    }

    fn discard(&mut self, n: u64) {
        ReversiblePcg128::discard(self, n);
    }
}

impl<M: Multiplier128> TextState for ReversiblePcg128<M> {
    fn write_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.state, self.increment)
    }

    fn read_text(tokens: &mut SplitWhitespace<'_>) -> Result<Self, RngError> {
        let state = next_token(tokens, "pcg state")?;
        let increment = next_token(tokens, "pcg increment")?;
        Ok(Self {
            state,
            increment,
            multiplier: PhantomData,
        })
    }
}

impl<M: Multiplier128> fmt::Display for ReversiblePcg128<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_text(f)
    }
}

impl<M: Multiplier128> FromStr for ReversiblePcg128<M> {
    type Err = RngError;

    fn from_str(s: &str) -> Result<Self, RngError> {
        parse_all(s)
    }
}

impl<M: Multiplier128> rand::RngCore for ReversiblePcg128<M> {
    fn next_u32(&mut self) -> u32 {
        self.next() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_bytes_from_u64(|| self.next(), dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Fills `dest` from successive 64-bit draws, little-endian.
pub(crate) fn fill_bytes_from_u64<F: FnMut() -> u64>(mut draw: F, dest: &mut [u8]) {
    let mut i = 0;
    let len = dest.len();
    while i + 8 <= len {
        dest[i..i + 8].copy_from_slice(&draw().to_le_bytes());
        i += 8;
    }
    if i < len {
        let bytes = draw().to_le_bytes();
        let remaining = len - i;
        dest[i..].copy_from_slice(&bytes[..remaining]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pcg32_round_trip() {
        let mut engine = ReversiblePcg32::new(42);
        let initial = engine.clone();
        let forward: Vec<u32> = (0..1000).map(|_| engine.next()).collect();
        let backward: Vec<u32> = (0..1000).map(|_| engine.previous()).collect();
        assert_eq!(forward, backward.into_iter().rev().collect::<Vec<_>>());
        assert_eq!(engine, initial);
    }

    #[test]
    fn test_pcg64_round_trip() {
        let mut engine = ReversiblePcg64::new(42);
        let initial = engine.clone();
        let forward: Vec<u64> = (0..1000).map(|_| engine.next()).collect();
        let backward: Vec<u64> = (0..1000).map(|_| engine.previous()).collect();
        assert_eq!(forward, backward.into_iter().rev().collect::<Vec<_>>());
        assert_eq!(engine, initial);
    }

    #[test]
    fn test_pcg64_cheap_round_trip() {
        let mut engine = ReversiblePcg64Cheap::new(42);
        let initial = engine.clone();
        let forward: Vec<u64> = (0..1000).map(|_| engine.next()).collect();
        for value in forward.into_iter().rev() {
            assert_eq!(value, engine.previous());
        }
        assert_eq!(engine, initial);
    }

    #[test]
    fn test_multiplier_inverses() {
        assert_eq!(
            PCG32_MULTIPLIER.wrapping_mul(PCG32_MULTIPLIER_INVERSE),
            1
        );
        assert_eq!(
            DefaultMultiplier::MULTIPLIER.wrapping_mul(DefaultMultiplier::MULTIPLIER_INVERSE),
            1
        );
        assert_eq!(
            CheapMultiplier::MULTIPLIER.wrapping_mul(CheapMultiplier::MULTIPLIER_INVERSE),
            1
        );
    }

    #[test]
    fn test_streams_differ() {
        let mut a = ReversiblePcg32::with_stream(42, 1);
        let mut b = ReversiblePcg32::with_stream(42, 2);
        assert_ne!(a.next(), b.next());
    }

    #[test]
    fn test_seed_resets() {
        let mut a = ReversiblePcg64::new(9);
        a.discard(500);
        a.seed(9);
        assert_eq!(a, ReversiblePcg64::new(9));
    }
}
