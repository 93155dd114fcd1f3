//! Exponential distribution sampled by inverse CDF.

use std::fmt;
use std::str::{FromStr, SplitWhitespace};

use crate::common::bits;
use crate::dist::{Distribution, Float};
use crate::engine::BitGenerator;
use crate::errors::RngError;
use crate::text::{next_token, parse_all, TextState};

/// Exponential distribution with rate `lambda`.
///
/// One 64-bit word per sample: `-ln(1 - u) / lambda` with `u` canonical.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential<F: Float> {
    lambda: F,
}

impl<F: Float> Exponential<F> {
    /// Creates the distribution; fails unless `lambda > 0`.
    pub fn new(lambda: F) -> Result<Self, RngError> {
        if !(lambda.to_f64() > 0.0) {
            return Err(RngError::invalid(format!(
                "exponential lambda must be positive, got {}",
                lambda
            )));
        }
        Ok(Self { lambda })
    }

    /// Rate parameter of the distribution.
    pub fn lambda(&self) -> F {
        self.lambda
    }
}

impl<F: Float> Distribution<u64> for Exponential<F> {
    type Value = F;

    fn sample<G: BitGenerator<Output = u64>>(&mut self, gen: &mut G) -> Result<F, RngError> {
        let canonical = bits::float64(gen.generate());
        // ln_1p(-u) = ln(1 - u) avoids ln(0)
        Ok(F::from_f64(-(-canonical).ln_1p() / self.lambda.to_f64()))
    }
}

impl<F: Float> TextState for Exponential<F> {
    fn write_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:e}", self.lambda)
    }

    fn read_text(tokens: &mut SplitWhitespace<'_>) -> Result<Self, RngError> {
        let lambda = next_token(tokens, "exponential lambda")?;
        Self::new(lambda).map_err(|_| RngError::malformed("exponential lambda not positive"))
    }
}

impl<F: Float> fmt::Display for Exponential<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_text(f)
    }
}

impl<F: Float> FromStr for Exponential<F> {
    type Err = RngError;

    fn from_str(s: &str) -> Result<Self, RngError> {
        parse_all(s)
    }
}
