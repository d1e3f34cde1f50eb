use std::collections::HashMap;

/// Health a combatant has the first time they are attacked.
pub const STARTING_HEALTH: u32 = 10;

/// nick -> health. Zero is dead, and there is no way back.
#[derive(Debug, Default)]
pub struct CombatState {
    health: HashMap<String, u32>,
}

impl CombatState {
    /// Recorded health, `None` if the nick has never been attacked.
    pub fn health(&self, nick: &str) -> Option<u32> {
        self.health.get(nick).copied()
    }

    /// Only a recorded zero counts; an unrecorded nick is alive.
    pub fn is_dead(&self, nick: &str) -> bool {
        self.health(nick) == Some(0)
    }

    /// Subtract damage (floored at zero), store and return the new health.
    pub fn apply_damage(&mut self, nick: &str, damage: u32) -> u32 {
        let current = self.health(nick).unwrap_or(STARTING_HEALTH);
        let remaining = current.saturating_sub(damage);
        self.health.insert(nick.to_owned(), remaining);
        remaining
    }
}
