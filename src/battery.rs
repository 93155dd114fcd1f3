//! Adapter feeding a composite generator to a statistical test battery.
//!
//! External batteries (TestU01 and friends) consume a named 32-bit
//! generator through three entry points: raw bits, a canonical `[0, 1)`
//! value derived from those bits, and a state dump. This module pins that
//! interface; linking an actual battery stays outside the crate.

use crate::dist::Distribution;
use crate::engine::ReversibleEngine;
use crate::errors::RngError;
use crate::rng::ReversibleRng;
use crate::text::TextState;

const NORM32: f64 = 4294967296.0; // 2^32

/// Battery-facing view of a composite generator with 64-bit samples.
pub struct Battery<D, E> {
    name: String,
    rng: ReversibleRng<D, E>,
}

impl<D, E> Battery<D, E>
where
    E: ReversibleEngine,
    D: Distribution<E::Output, Value = u64>,
{
    /// Wraps `rng` under the display name the battery reports.
    pub fn new(name: impl Into<String>, rng: ReversibleRng<D, E>) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }

    /// Name reported to the battery.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Next 32 bits: the low half of a 64-bit draw.
    pub fn bits(&mut self) -> Result<u32, RngError> {
        Ok(self.rng.next()? as u32)
    }

    /// Next canonical value, `bits / 2^32`.
    pub fn u01(&mut self) -> Result<f64, RngError> {
        Ok(f64::from(self.bits()?) / NORM32)
    }

    /// Serialized generator state for the battery's write callback.
    pub fn write(&self) -> String
    where
        D: TextState,
        E: TextState,
    {
        self.rng.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dist::UniformInt;
    use crate::rng::UniformIntRng;

    fn battery() -> Battery<UniformInt<u64>, crate::engine::ReversiblePcg64> {
        let rng: UniformIntRng<u64> =
            ReversibleRng::with_seed(UniformInt::new(0, u64::MAX).unwrap(), 42);
        Battery::new("pcg64-uniform", rng)
    }

    #[test]
    fn test_u01_in_unit_interval() {
        let mut battery = battery();
        for _ in 0..1000 {
            let value = battery.u01().unwrap();
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn test_bits_track_draws() {
        let mut battery = battery();
        let mut rng: UniformIntRng<u64> =
            ReversibleRng::with_seed(UniformInt::new(0, u64::MAX).unwrap(), 42);
        for _ in 0..100 {
            assert_eq!(battery.bits().unwrap(), rng.next().unwrap() as u32);
        }
    }

    #[test]
    fn test_write_round_trips() {
        let battery = battery();
        let parsed: UniformIntRng<u64> = battery.write().parse().unwrap();
        let fresh: UniformIntRng<u64> =
            ReversibleRng::with_seed(UniformInt::new(0, u64::MAX).unwrap(), 42);
        assert_eq!(parsed, fresh);
    }
}
