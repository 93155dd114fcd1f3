//! Normal sampling with the Marsaglia polar method.
//!
//! Kept as the reference pattern for distributions that buffer internal
//! state: the polar method produces standard normals in pairs, returns one
//! and holds the other, so reversing requires explicit bookkeeping. Prefer
//! [`Normal`](crate::dist::Normal), which is faster and needs none of it.

use crate::dist::Float;
use crate::dist::UniformReal;
use crate::errors::RngError;
use crate::rng::{ReversibleRng, UniformRealRng};

/// Reversible normal generator using the Marsaglia polar method.
///
/// Internally owns a reversible uniform source on `[-1, 1)`. Two flags
/// carry the reversal bookkeeping: `saved_available` marks the buffered
/// half of the current pair, and `reversing` marks the traversal
/// direction. On a direction change the uniform source is stepped by
/// exactly two draws so the next pair recomputed in the new direction
/// lines up with the forward history.
#[derive(Debug, Clone, PartialEq)]
pub struct PolarNormal<F: Float> {
    mean: F,
    stddev: F,
    saved: f64,
    next_saved: f64,
    reversing: bool,
    saved_available: bool,
    urng: UniformRealRng<f64>,
}

impl<F: Float> PolarNormal<F> {
    /// Creates a generator seeded from the platform's non-deterministic
    /// source; fails unless `stddev > 0`.
    pub fn new(mean: F, stddev: F) -> Result<Self, RngError> {
        Ok(Self {
            mean,
            stddev: Self::checked_stddev(stddev)?,
            saved: 0.0,
            next_saved: 0.0,
            reversing: false,
            saved_available: false,
            urng: ReversibleRng::new(UniformReal::new(-1.0, 1.0)?),
        })
    }

    /// Creates a generator with a fixed seed.
    pub fn with_seed(mean: F, stddev: F, seed: u64) -> Result<Self, RngError> {
        Ok(Self {
            mean,
            stddev: Self::checked_stddev(stddev)?,
            saved: 0.0,
            next_saved: 0.0,
            reversing: false,
            saved_available: false,
            urng: ReversibleRng::with_seed(UniformReal::new(-1.0, 1.0)?, seed),
        })
    }

    fn checked_stddev(stddev: F) -> Result<F, RngError> {
        if !(stddev.to_f64() > 0.0) {
            return Err(RngError::invalid(format!(
                "polar stddev must be positive, got {}",
                stddev
            )));
        }
        Ok(stddev)
    }

    /// Mean of the distribution.
    pub fn mean(&self) -> F {
        self.mean
    }

    /// Standard deviation of the distribution.
    pub fn stddev(&self) -> F {
        self.stddev
    }

    /// Reseeds the uniform source and clears the pair buffer.
    pub fn seed(&mut self, seed: u64) {
        self.urng.seed(seed);
        self.reset();
    }

    /// Clears the pair buffer and direction flag.
    pub fn reset(&mut self) {
        self.reversing = false;
        self.saved_available = false;
    }

    /// Returns the next random value.
    pub fn next(&mut self) -> Result<F, RngError> {
        if self.saved_available {
            self.saved_available = false;
            return Ok(self.scale(self.next_saved));
        }

        if self.reversing {
            self.reversing = false;
            // Generate past the current saved pair
            self.urng.next_n(2)?;
        }

        let (first, second) = polar_forward(&mut self.urng)?;
        self.saved = first;
        self.next_saved = second;
        self.saved_available = true;

        Ok(self.scale(self.saved))
    }

    /// Returns the previous random value.
    pub fn previous(&mut self) -> Result<F, RngError> {
        if !self.saved_available {
            self.saved_available = true;
            return Ok(self.scale(self.next_saved));
        }

        if !self.reversing {
            self.reversing = true;
            // Reverse past the current saved pair
            self.urng.previous_n(2)?;
        }

        let result = self.scale(self.saved);

        // Reverse to the previous saved pair
        let (second, first) = polar_backward(&mut self.urng)?;
        self.next_saved = second;
        self.saved = first;
        self.saved_available = false;

        Ok(result)
    }

    fn scale(&self, standard: f64) -> F {
        F::from_f64(standard * self.stddev.to_f64() + self.mean.to_f64())
    }
}

/// Draws a polar pair going forward: rejection-samples a point in the unit
/// disc and scales it onto the normal.
fn polar_forward(urng: &mut UniformRealRng<f64>) -> Result<(f64, f64), RngError> {
    loop {
        let u = urng.next()?;
        let v = urng.next()?;
        let s = u * u + v * v;
        if s < 1.0 && s != 0.0 {
            let scale = (-2.0 * s.ln() / s).sqrt();
            return Ok((u * scale, v * scale));
        }
    }
}

/// Backward counterpart of [`polar_forward`]. The draws arrive in reverse
/// order, but the radius check is symmetric in the pair, so the rejection
/// pattern mirrors the forward walk exactly.
fn polar_backward(urng: &mut UniformRealRng<f64>) -> Result<(f64, f64), RngError> {
    loop {
        let u = urng.previous()?;
        let v = urng.previous()?;
        let s = u * u + v * v;
        if s < 1.0 && s != 0.0 {
            let scale = (-2.0 * s.ln() / s).sqrt();
            return Ok((u * scale, v * scale));
        }
    }
}
