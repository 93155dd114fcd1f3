//! Direction adapter for reversible bit sources.

use crate::engine::{BitGenerator, ReversibleEngine};

/// Wrapper that flips the direction of a reversible bit source: drawing
/// from the adapter steps the wrapped engine backward.
///
/// Borrows the engine mutably, so the adapter cannot outlive the call that
/// created it and cannot coexist with another writer.
pub struct ReversedEngine<'a, E: ReversibleEngine> {
    engine: &'a mut E,
}

impl<'a, E: ReversibleEngine> ReversedEngine<'a, E> {
    /// Wraps `engine` for backward drawing.
    pub fn new(engine: &'a mut E) -> Self {
        Self { engine }
    }
}

impl<E: ReversibleEngine> BitGenerator for ReversedEngine<'_, E> {
    type Output = E::Output;

    #[inline]
    fn generate(&mut self) -> E::Output {
        self.engine.previous()
    }
}
