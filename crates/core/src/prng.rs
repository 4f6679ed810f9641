//! Deterministic PRNG based on the Xorshift64 algorithm.
//!
//! Seeding and brush placement must be reproducible across runs and
//! platforms, so the simulator never touches a global generator. Same seed
//! always produces the same sequence (pure integer arithmetic in the core
//! step).

use serde::{Deserialize, Serialize};

/// Xorshift64 deterministic PRNG with the standard (13, 7, 17) shift triple.
///
/// A seed of 0 is replaced with a non-zero fallback, since the all-zeros
/// state is a fixed point of the xorshift step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    /// Substitute for seed 0, which xorshift would map to itself forever.
    const FALLBACK_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

    /// Creates a new PRNG with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Returns a uniformly distributed f64 in [0, 1), using the top 53 bits
    /// for full mantissa precision.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Returns a uniformly distributed f64 in [min, max).
    pub fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Returns a uniformly distributed usize in [0, max).
    ///
    /// Modulo reduction; the bias is negligible at 64-bit state width.
    ///
    /// # Panics
    ///
    /// Panics if `max` is 0.
    pub fn next_usize(&mut self, max: usize) -> usize {
        (self.next_u64() as usize) % max
    }
}
