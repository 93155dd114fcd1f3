//! Composite reversible generator binding an engine to a distribution.

use std::fmt;
use std::str::{FromStr, SplitWhitespace};

use rand::rngs::OsRng;
use rand::RngCore as _;

use crate::dist::{Distribution, Exponential, Normal, UniformInt, UniformReal};
use crate::engine::{ReversedEngine, ReversibleEngine, ReversiblePcg64};
use crate::errors::RngError;
use crate::text::{next_token, parse_all, TextState};

/// Reversible random number generator on a probability distribution.
///
/// Owns one reversible engine and one distribution and tracks a signed
/// logical position: scalar `next` emits `seq[position]` and increments,
/// scalar `previous` decrements and emits `seq[position]`. For any `k`,
/// `k` forward draws followed by `k` backward draws restore the observable
/// state and replay the forward samples in reverse order.
#[derive(Debug, Clone, PartialEq)]
pub struct ReversibleRng<D, E = ReversiblePcg64> {
    engine: E,
    distribution: D,
    position: i64,
}

/// Reversible generator on a uniform integer distribution.
pub type UniformIntRng<I, E = ReversiblePcg64> = ReversibleRng<UniformInt<I>, E>;

/// Reversible generator on a uniform real distribution.
pub type UniformRealRng<F, E = ReversiblePcg64> = ReversibleRng<UniformReal<F>, E>;

/// Reversible generator on a normal distribution.
pub type NormalRng<F, E = ReversiblePcg64> = ReversibleRng<Normal<F>, E>;

/// Reversible generator on an exponential distribution.
pub type ExponentialRng<F, E = ReversiblePcg64> = ReversibleRng<Exponential<F>, E>;

impl<D, E> ReversibleRng<D, E>
where
    E: ReversibleEngine,
    D: Distribution<E::Output>,
{
    /// Creates a generator seeded once from the platform's
    /// non-deterministic source.
    pub fn new(distribution: D) -> Self
    where
        E: Default,
    {
        Self::with_seed(distribution, OsRng.next_u64())
    }

    /// Creates a generator with a fixed seed.
    pub fn with_seed(distribution: D, seed: u64) -> Self
    where
        E: Default,
    {
        let mut engine = E::default();
        engine.seed(seed);
        Self {
            engine,
            distribution,
            position: 0,
        }
    }

    /// Reseeds the engine, resets the distribution state, and returns the
    /// position to zero.
    pub fn seed(&mut self, seed: u64) {
        self.engine.seed(seed);
        self.distribution.reset();
        self.position = 0;
    }

    /// Returns the next random value.
    pub fn next(&mut self) -> Result<D::Value, RngError> {
        self.position += 1;
        self.distribution.sample(&mut self.engine)
    }

    /// Returns the previous random value.
    pub fn previous(&mut self) -> Result<D::Value, RngError> {
        self.position -= 1;
        let mut reversed = ReversedEngine::new(&mut self.engine);
        self.distribution.sample(&mut reversed)
    }

    /// Returns the next `n` random values in draw order.
    pub fn next_n(&mut self, n: usize) -> Result<Vec<D::Value>, RngError> {
        (0..n).map(|_| self.next()).collect()
    }

    /// Returns the previous `n` random values in logical natural order:
    /// element `i` of the result is the `i`-th of the `n` most recent
    /// forward draws.
    pub fn previous_n(&mut self, n: usize) -> Result<Vec<D::Value>, RngError> {
        let mut values = (0..n)
            .map(|_| self.previous())
            .collect::<Result<Vec<_>, _>>()?;
        values.reverse();
        Ok(values)
    }

    /// Advances the generator by `n` forward draws.
    pub fn discard(&mut self, n: u64) -> Result<(), RngError> {
        for _ in 0..n {
            self.next()?;
        }
        Ok(())
    }

    /// Signed count of net forward draws since the last seed.
    pub fn position(&self) -> i64 {
        self.position
    }

    /// The owned engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// The owned distribution.
    pub fn distribution(&self) -> &D {
        &self.distribution
    }
}

impl<D, E> TextState for ReversibleRng<D, E>
where
    D: TextState,
    E: TextState,
{
    fn write_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.engine.write_text(f)?;
        write!(f, " ")?;
        self.distribution.write_text(f)?;
        write!(f, " {}", self.position)
    }

    fn read_text(tokens: &mut SplitWhitespace<'_>) -> Result<Self, RngError> {
        let engine = E::read_text(tokens)?;
        let distribution = D::read_text(tokens)?;
        let position = next_token(tokens, "position")?;
        Ok(Self {
            engine,
            distribution,
            position,
        })
    }
}

impl<D, E> fmt::Display for ReversibleRng<D, E>
where
    D: TextState,
    E: TextState,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_text(f)
    }
}

impl<D, E> FromStr for ReversibleRng<D, E>
where
    D: TextState,
    E: TextState,
{
    type Err = RngError;

    fn from_str(s: &str) -> Result<Self, RngError> {
        parse_all(s)
    }
}
