//! Deterministic random number generation for simulated games.
//!
//! - **Deterministic**: same seed, same sequence
//! - **Forkable**: one independent stream per simulated game
//!
//! ```
//! use beauty_contest::sim::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut game_rng = rng.fork();
//!
//! let mut again = GameRng::new(42);
//! assert_eq!(game_rng.gen_value(), again.fork().gen_value());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::Submission;

/// Seeded ChaCha8 RNG with deterministic forking.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork an independent stream.
    ///
    /// The n-th fork of a given seed is always the same stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    /// A uniformly random submittable value.
    pub fn gen_value(&mut self) -> u8 {
        self.inner.gen_range(Submission::MIN..=Submission::MAX)
    }

    /// A value in `lo..=hi`, clamped to the submittable range.
    pub fn gen_value_between(&mut self, lo: u8, hi: u8) -> u8 {
        let lo = lo.min(Submission::MAX);
        let hi = hi.clamp(lo, Submission::MAX);
        self.inner.gen_range(lo..=hi)
    }

    /// Random boolean with the given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(7);
        let mut rng2 = GameRng::new(7);

        for _ in 0..100 {
            assert_eq!(rng1.gen_value(), rng2.gen_value());
        }
    }

    #[test]
    fn test_values_in_range() {
        let mut rng = GameRng::new(1);
        for _ in 0..1000 {
            assert!(rng.gen_value() <= Submission::MAX);
            let v = rng.gen_value_between(30, 40);
            assert!((30..=40).contains(&v));
        }
    }

    #[test]
    fn test_between_clamps() {
        let mut rng = GameRng::new(3);
        assert_eq!(rng.gen_value_between(100, 250), 100);
        assert_eq!(rng.gen_value_between(50, 10), 50);
    }

    #[test]
    fn test_forks_differ_but_repeat() {
        let mut root = GameRng::new(42);
        let mut a = root.fork();
        let mut b = root.fork();

        let seq_a: Vec<_> = (0..16).map(|_| a.gen_value()).collect();
        let seq_b: Vec<_> = (0..16).map(|_| b.gen_value()).collect();
        assert_ne!(seq_a, seq_b);

        let mut again = GameRng::new(42).fork();
        let seq_again: Vec<_> = (0..16).map(|_| again.gen_value()).collect();
        assert_eq!(seq_a, seq_again);
    }

    #[test]
    fn test_gen_bool_extremes() {
        let mut rng = GameRng::new(9);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
        assert!(rng.gen_bool(2.0));
    }
}
