//! Conversational state.
//!
//! Everything the handlers remember lives in one [`BotState`] owned by the
//! dispatch loop and lent to each handler through its context. Nothing here
//! is shared across tasks, so none of it is synchronized.

mod combat;
mod presence;
mod score;
mod seen;
mod sleep;

use chrono::{DateTime, Utc};

use combat::CombatState;
use presence::Presence;
use score::ScoreLedger;
use sleep::SleepState;

pub use combat::STARTING_HEALTH;
pub use score::Point;
pub use seen::SeenLog;

/// Format used whenever a timestamp is shown in the channel.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Render a timestamp for a reply.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// All per-process state, created empty at startup.
#[derive(Debug)]
pub struct BotState {
    pub presence: Presence,
    pub seen: SeenLog,
    pub scores: ScoreLedger,
    pub combat: CombatState,
    pub sleep: SleepState,
}

impl BotState {
    pub fn new(sleep_timeout: chrono::Duration) -> Self {
        Self {
            presence: Presence::default(),
            seen: SeenLog::default(),
            scores: ScoreLedger::default(),
            combat: CombatState::default(),
            sleep: SleepState::new(sleep_timeout),
        }
    }
}
