//! Reversible 64-bit Mersenne Twister.

use std::fmt;
use std::str::{FromStr, SplitWhitespace};

use crate::engine::{BitGenerator, ReversibleEngine};
use crate::errors::RngError;
use crate::text::{next_token, parse_all, TextState};

const STATE_SIZE: usize = 312;
const SHIFT_SIZE: usize = 156;
const UPPER_MASK: u64 = !0u64 << 31;
const LOWER_MASK: u64 = !UPPER_MASK;
const XOR_MASK: u64 = 0xb5026f5aa96619e9;
const FIRST_BIT: u64 = 1 << 63;
const INITIALIZATION_MULTIPLIER: u64 = 6364136223846793005;

const TEMPERING_U: u32 = 29;
const TEMPERING_D: u64 = 0x5555555555555555;
const TEMPERING_S: u32 = 17;
const TEMPERING_B: u64 = 0x71d67fffeda60000;
const TEMPERING_T: u32 = 37;
const TEMPERING_C: u64 = 0xfff7eee000000000;
const TEMPERING_L: u32 = 43;

/// MT19937-64 with a backward step.
///
/// The block update (`twist`) is inverted by reconstructing each state word
/// from the words that produced it, most significant bits first; tempering
/// is a bijection applied identically in both directions, so only the block
/// update needs an inverse. `pos` ranges over `[0, 312]`, where 312 means a
/// twist (or untwist, going backward) is pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReversibleMersenne {
    state: [u64; STATE_SIZE],
    pos: usize,
}

impl ReversibleMersenne {
    /// Seed used by [`Default`], matching the reference MT19937-64 value.
    pub const DEFAULT_SEED: u64 = 5489;

    /// Creates an engine from a single seed word.
    pub fn new(seed: u64) -> Self {
        let mut engine = Self {
            state: [0; STATE_SIZE],
            pos: 0,
        };
        engine.seed(seed);
        engine
    }

    /// Reseeds the engine, expanding `seed` into the full state block.
    pub fn seed(&mut self, seed: u64) {
        self.state[0] = seed;
        for i in 1..STATE_SIZE {
            let mut x = self.state[i - 1];
            x ^= x >> 62;
            x = x.wrapping_mul(INITIALIZATION_MULTIPLIER);
            x = x.wrapping_add(i as u64);
            self.state[i] = x;
        }

        self.pos = STATE_SIZE;
    }

    /// Draws the next 64-bit word.
    pub fn next(&mut self) -> u64 {
        if self.pos >= STATE_SIZE {
            self.twist();
        }

        let word = temper(self.state[self.pos]);
        self.pos += 1;
        word
    }

    /// Inverse of [`next`](Self::next).
    pub fn previous(&mut self) -> u64 {
        if self.pos == 0 {
            self.untwist();
        }

        self.pos -= 1;
        temper(self.state[self.pos])
    }

    /// Advances the engine as if by `n` calls to [`next`](Self::next),
    /// twisting whole blocks instead of producing output.
    pub fn discard(&mut self, mut n: u64) {
        while n > (STATE_SIZE - self.pos) as u64 {
            n -= (STATE_SIZE - self.pos) as u64;
            self.twist();
        }

        self.pos += n as usize;
    }

    fn twist(&mut self) {
        for k in 0..STATE_SIZE {
            let y = (self.state[k] & UPPER_MASK)
                | (self.state[(k + 1) % STATE_SIZE] & LOWER_MASK);
            self.state[k] = self.state[(k + SHIFT_SIZE) % STATE_SIZE]
                ^ (y >> 1)
                ^ if y & 1 == 1 { XOR_MASK } else { 0 };
        }

        self.pos = 0;
    }

    // Each twisted word is undone bit-by-bit: the xor with the shifted word
    // recovers `y >> 1` plus the low-bit flag, the top 33 bits come from the
    // word itself and the bottom 31 from its predecessor.
    // https://jazzy.id.au/2010/09/25/cracking_random_number_generators_part_4.html
    fn untwist(&mut self) {
        for k in (0..STATE_SIZE).rev() {
            let mut y = self.state[k] ^ self.state[(k + SHIFT_SIZE) % STATE_SIZE];
            if y & FIRST_BIT != 0 {
                y ^= XOR_MASK;
            }
            self.state[k] = (y << 1) & UPPER_MASK;

            let mut y = self.state[(k + STATE_SIZE - 1) % STATE_SIZE]
                ^ self.state[(k + STATE_SIZE - 1 + SHIFT_SIZE) % STATE_SIZE];
            if y & FIRST_BIT != 0 {
                y ^= XOR_MASK;
                self.state[k] |= 1;
            }
            self.state[k] |= (y << 1) & LOWER_MASK;
        }

        self.pos = STATE_SIZE;
    }
}

fn temper(mut z: u64) -> u64 {
    z ^= (z >> TEMPERING_U) & TEMPERING_D;
    z ^= (z << TEMPERING_S) & TEMPERING_B;
    z ^= (z << TEMPERING_T) & TEMPERING_C;
    z ^= z >> TEMPERING_L;
    z
}

impl Default for ReversibleMersenne {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

impl BitGenerator for ReversibleMersenne {
    type Output = u64;

    #[inline]
    fn generate(&mut self) -> u64 {
        self.next()
    }
}

impl ReversibleEngine for ReversibleMersenne {
    #[inline]
    fn previous(&mut self) -> u64 {
        ReversibleMersenne::previous(self)
    }

    fn seed(&mut self, seed: u64) {
        ReversibleMersenne::seed(self, seed);
    }

    fn discard(&mut self, n: u64) {
        ReversibleMersenne::discard(self, n);
    }
}

impl TextState for ReversibleMersenne {
    fn write_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in self.state.iter() {
            write!(f, "{} ", word)?;
        }
        write!(f, "{}", self.pos)
    }

    fn read_text(tokens: &mut SplitWhitespace<'_>) -> Result<Self, RngError> {
        let mut state = [0u64; STATE_SIZE];
        for word in state.iter_mut() {
            *word = next_token(tokens, "mersenne state word")?;
        }
        let pos: usize = next_token(tokens, "mersenne position")?;
        if pos > STATE_SIZE {
            return Err(RngError::malformed("mersenne position out of range"));
        }
        Ok(Self { state, pos })
    }
}

impl fmt::Display for ReversibleMersenne {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_text(f)
    }
}

impl FromStr for ReversibleMersenne {
    type Err = RngError;

    fn from_str(s: &str) -> Result<Self, RngError> {
        parse_all(s)
    }
}

impl rand::RngCore for ReversibleMersenne {
    fn next_u32(&mut self) -> u32 {
        self.next() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        super::pcg::fill_bytes_from_u64(|| self.next(), dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
