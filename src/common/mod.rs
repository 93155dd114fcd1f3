//! Low-level utilities: bit mapping, seed expansion, auxiliary generation.

pub mod bits;
mod splitmix;
mod xoshiro;

pub use splitmix::SplitMix64;
pub use xoshiro::Xoshiro256;
