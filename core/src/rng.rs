//! Deterministic random number generation.
//!
//! RULE: Nothing in the engine may call any platform RNG.
//! The only randomness is worker training, and it flows from the
//! integer seed the caller supplies with the command. Same seed,
//! same rolls, same world.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

pub struct TrainingRng {
    inner: Pcg64Mcg,
}

impl TrainingRng {
    pub fn new(seed: u64) -> Self {
        Self { inner: Pcg64Mcg::seed_from_u64(seed) }
    }

    /// Draw a raw u64 (full range).
    pub fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Roll a u32 in [0, n).
    pub fn next_u32_below(&mut self, n: u32) -> u32 {
        assert!(n > 0, "n must be > 0");
        (self.inner.next_u64() % u64::from(n)) as u32
    }
}
