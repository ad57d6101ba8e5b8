//! Seeded dice for deterministic fights
//!
//! Every random roll in a duel goes through one `Dice`, so a seed fully
//! determines the fight.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Die roller backed by a seeded ChaCha stream
#[derive(Debug, Clone)]
pub struct Dice {
    rng: ChaCha8Rng,
}

impl Dice {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Roll one die with `sides` faces (1..=sides). A zero-sided die rolls 0.
    pub fn roll(&mut self, sides: u32) -> u32 {
        if sides == 0 {
            return 0;
        }
        self.rng.gen_range(1..=sides)
    }

    /// Sum of `count` rolls of a `sides`-faced die
    pub fn roll_many(&mut self, count: u32, sides: u32) -> u32 {
        (0..count).map(|_| self.roll(sides)).sum()
    }

    /// Percentile roll (1..=100)
    pub fn percent(&mut self) -> u32 {
        self.roll(100)
    }
}
