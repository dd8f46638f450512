//! Random number generation for warren
//!
//! Uses a seeded ChaCha RNG so generation is reproducible from a single
//! numeric seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generation random number generator.
///
/// Wraps ChaCha8Rng for reproducible random number generation. Every room
/// gets its own instance built from [`room_seed`], so no stream state leaks
/// from one room into the next and rooms can be generated in any order.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Get the seed used to create this RNG.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform value in `0..n`.
    ///
    /// Returns 0 if n is 0.
    pub fn rn2(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Uniform value in `1..=n`.
    ///
    /// Returns 0 if n is 0.
    pub fn rnd(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(1..=n)
    }

    /// Uniform value in `min..=max`.
    ///
    /// Returns `min` when the range is empty or inverted.
    pub fn range(&mut self, min: usize, max: usize) -> usize {
        if max <= min {
            return min;
        }
        min + self.rn2((max - min + 1) as u32) as usize
    }
}

/// Derive the seed for the room in slot `(sx, sy)`.
///
/// Pure function of its inputs: the same slot and world seed always yield
/// the same room seed, no matter how many rooms were generated before.
/// Transposed slots get distinct seeds.
pub fn room_seed(sx: usize, sy: usize, world_seed: u64) -> u64 {
    let x = (sx as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    let y = (sy as u64).wrapping_mul(0xC2B2_AE3D_27D4_EB4F);
    let mut h = world_seed ^ x ^ y.rotate_left(32);
    h ^= h >> 33;
    h = h.wrapping_mul(0xFF51_AFD7_ED55_8CCD);
    h ^= h >> 33;
    h
}
