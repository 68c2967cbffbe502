//! Deterministic random number generation.
//!
//! Every random decision in a game (the envelope draw, weapon placement,
//! the deal, dice rolls) is taken from one `GameRng`. The same seed and the
//! same sequence of commands always reproduce the same game.
//!
//! ```
//! use rust_cluedo::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.roll_die(6), b.roll_die(6));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable RNG for a single game.
///
/// Uses ChaCha8: fast, and stable across platforms for a given seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `0..len`.
    ///
    /// Panics if `len` is zero.
    pub fn index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Roll one die with `sides` faces, returning 1..=sides.
    pub fn roll_die(&mut self, sides: u8) -> u8 {
        self.inner.gen_range(1..=sides)
    }

    /// Remove and return a uniformly chosen element (draw without replacement).
    ///
    /// Returns `None` when the pool is empty.
    pub fn draw<T>(&mut self, pool: &mut Vec<T>) -> Option<T> {
        if pool.is_empty() {
            return None;
        }
        let i = self.index(pool.len());
        Some(pool.swap_remove(i))
    }
}
