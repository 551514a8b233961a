//! Game logic module
//!
//! Contains the terminal-independent pieces of each game.

pub mod coin;

pub use coin::{Outcome, OutcomeSource, RandomCoin};
