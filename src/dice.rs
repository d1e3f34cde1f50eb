//! Injectable randomness.
//!
//! Combat rolls and stock-phrase picks go through [`Dice`] so tests can
//! script exact outcomes.

use std::sync::Arc;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Dice shared by every handler that rolls. Never hold the guard across an
/// `.await`.
pub type SharedDice = Arc<Mutex<Box<dyn Dice>>>;

/// Wrap dice for sharing between handlers.
pub fn shared(dice: impl Dice + 'static) -> SharedDice {
    let dice: Box<dyn Dice> = Box::new(dice);
    Arc::new(Mutex::new(dice))
}

/// A source of uniform rolls in `1..=sides`.
pub trait Dice: Send {
    fn roll(&mut self, sides: u32) -> u32;
}

/// Dice backed by a seeded standard RNG.
pub struct RandomDice {
    rng: StdRng,
}

impl RandomDice {
    /// Seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence.
    #[cfg(test)]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomDice {
    fn default() -> Self {
        Self::new()
    }
}

impl Dice for RandomDice {
    fn roll(&mut self, sides: u32) -> u32 {
        if sides == 0 {
            return 0;
        }
        self.rng.gen_range(1..=sides)
    }
}

/// Dice that replay a fixed script, then keep returning 1.
#[cfg(test)]
pub(crate) struct ScriptedDice {
    rolls: std::collections::VecDeque<u32>,
}

#[cfg(test)]
impl ScriptedDice {
    pub(crate) fn new(rolls: impl IntoIterator<Item = u32>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
        }
    }
}

#[cfg(test)]
impl Dice for ScriptedDice {
    fn roll(&mut self, sides: u32) -> u32 {
        self.rolls.pop_front().unwrap_or(1).clamp(1, sides.max(1))
    }
}
