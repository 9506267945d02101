//! Random source seam
//!
//! Brick-kind sprinkling and serve direction are the only random draws in the
//! simulation. They go through `RandomSource` so a run is reproducible from a
//! seed, and tests can script every roll.

use std::collections::VecDeque;
use std::fmt;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

pub trait RandomSource: fmt::Debug {
    /// True with probability `p`
    fn chance(&mut self, p: f64) -> bool;

    /// Fair coin
    fn coin_flip(&mut self) -> bool {
        self.chance(0.5)
    }
}

/// Seeded PCG generator
#[derive(Debug, Clone)]
pub struct PcgRandom {
    rng: Pcg32,
}

impl PcgRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl RandomSource for PcgRandom {
    fn chance(&mut self, p: f64) -> bool {
        self.rng.random::<f64>() < p
    }
}

/// Replays a fixed list of rolls in `[0, 1)`.
///
/// `chance(p)` is true when the next roll is below `p`. Once the list runs
/// out every roll is 1.0, so nothing succeeds.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    rolls: VecDeque<f64>,
}

impl ScriptedRandom {
    pub fn new(rolls: impl IntoIterator<Item = f64>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
        }
    }

    /// Rolls not consumed yet
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn chance(&mut self, p: f64) -> bool {
        self.rolls.pop_front().unwrap_or(1.0) < p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pcg_is_reproducible() {
        let mut a = PcgRandom::new(42);
        let mut b = PcgRandom::new(42);
        for _ in 0..100 {
            assert_eq!(a.chance(0.3), b.chance(0.3));
        }
    }

    #[test]
    fn test_pcg_extremes() {
        let mut rng = PcgRandom::new(7);
        for _ in 0..50 {
            assert!(!rng.chance(0.0));
            assert!(rng.chance(1.0));
        }
    }

    #[test]
    fn test_scripted_rolls_then_exhausts() {
        let mut rng = ScriptedRandom::new([0.05, 0.9, 0.2]);
        assert!(rng.chance(0.1));
        assert!(!rng.chance(0.1));
        assert!(rng.coin_flip());
        assert_eq!(rng.remaining(), 0);
        assert!(!rng.chance(0.99));
        assert!(!rng.coin_flip());
    }
}
