//! Coin outcomes and the random source that produces them

use rand::{rngs::SmallRng, Rng, SeedableRng};
use std::fmt;

/// Side a coin lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Heads,
    Tails,
}

impl Outcome {
    /// Label shown on the coin face and in the result box
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Heads => "HEADS",
            Outcome::Tails => "TAILS",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Anything that can produce a coin outcome on demand
pub trait OutcomeSource {
    /// Draw one outcome. Each call is independent of the previous ones.
    fn flip(&mut self) -> Outcome;
}

/// Fair coin backed by a generator seeded once at construction
#[derive(Debug, Clone)]
pub struct RandomCoin {
    rng: SmallRng,
}

impl RandomCoin {
    /// Create a coin seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Create a coin with a fixed seed for reproducible sequences
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomCoin {
    fn default() -> Self {
        Self::new()
    }
}

impl OutcomeSource for RandomCoin {
    fn flip(&mut self) -> Outcome {
        if self.rng.gen_bool(0.5) {
            Outcome::Heads
        } else {
            Outcome::Tails
        }
    }
}
