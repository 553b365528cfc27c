//! Deterministic RNG wrapper using PCG32.
//!
//! Procedural texture noise goes through this type so that a given seed
//! always scatters the same pixels.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Wrapper around PCG32 for deterministic random number generation.
#[derive(Clone)]
pub struct DeterministicRng {
    inner: Pcg32,
}

impl DeterministicRng {
    /// Create a new RNG from a 32-bit seed.
    pub fn new(seed: u32) -> Self {
        // Expand 32-bit seed to 64-bit for PCG32 state
        let seed64 = (seed as u64) | ((seed as u64) << 32);
        Self {
            inner: Pcg32::seed_from_u64(seed64),
        }
    }

    /// Generate a random u32.
    #[inline]
    pub fn gen_u32(&mut self) -> u32 {
        self.inner.gen::<u32>()
    }

    /// Generate a value in `0..upper`. `upper` must be non-zero.
    #[inline]
    pub fn below(&mut self, upper: u32) -> u32 {
        self.inner.gen_range(0..upper)
    }
}
