//! Reversible bit sources and the traits they implement.
//!
//! Two engine families step both forward and backward over the same
//! stream: the permuted congruential generators ([`ReversiblePcg32`],
//! [`ReversiblePcg64`]) invert their linear congruential state step
//! algebraically, and the Mersenne twister ([`ReversibleMersenne`])
//! inverts its block update.

mod mersenne;
mod pcg;
mod reversed;
mod traits;

pub use mersenne::ReversibleMersenne;
pub use pcg::{
    CheapMultiplier, DefaultMultiplier, Multiplier128, ReversiblePcg128, ReversiblePcg32,
    ReversiblePcg64, ReversiblePcg64Cheap,
};
pub use reversed::ReversedEngine;
pub use traits::{BitGenerator, ReversibleEngine, Word};
