//! `/me hits <nick>` combat.
//!
//! Every combatant starts at [`STARTING_HEALTH`]. A hit roll of 1 misses, 6
//! crits for double damage. Death is permanent for the life of the process.

use super::{Context, Handler, Outcome};
use crate::dice::SharedDice;
use crate::error::HandlerResult;
use crate::state::STARTING_HEALTH;
use async_trait::async_trait;
use slirc_proto::Event;
use tracing::{debug, info};

const ATTACK_VERBS: [&str; 9] = [
    "beat", "gouge", "hit", "kick", "pummel", "punch", "slap", "smack", "stab",
];

const HIT_SIDES: u32 = 6;
const DAMAGE_SIDES: u32 = 10;

/// Result of one resolved attack.
#[derive(Debug, PartialEq, Eq)]
enum Swing {
    Miss,
    Hit(u32),
    Crit(u32),
}

impl Swing {
    fn from_rolls(hit: u32, damage: u32) -> Self {
        match hit {
            1 => Self::Miss,
            HIT_SIDES => Self::Crit(damage * 2),
            _ => Self::Hit(damage),
        }
    }

    fn damage(&self) -> u32 {
        match self {
            Self::Miss => 0,
            Self::Hit(damage) | Self::Crit(damage) => *damage,
        }
    }
}

pub struct CombatHandler {
    dice: SharedDice,
}

impl CombatHandler {
    pub fn new(dice: SharedDice) -> Self {
        Self { dice }
    }

    fn roll(&self) -> Swing {
        let mut dice = self.dice.lock();
        let hit = dice.roll(HIT_SIDES);
        let damage = dice.roll(DAMAGE_SIDES);
        Swing::from_rolls(hit, damage)
    }
}

#[async_trait]
impl Handler for CombatHandler {
    fn name(&self) -> &'static str {
        "combat"
    }

    async fn handle(&self, ctx: &mut Context<'_>, event: &Event) -> HandlerResult {
        let Some(body) = event.action() else {
            return Ok(Outcome::NotApplicable);
        };
        if !ATTACK_VERBS.iter().any(|verb| body.contains(verb)) {
            return Ok(Outcome::NotApplicable);
        }
        // marker, verb, target
        let fields: Vec<&str> = event.text().split_whitespace().collect();
        let Some(target) = fields.last().map(|t| t.trim()).filter(|_| fields.len() >= 3) else {
            return Ok(Outcome::NotApplicable);
        };
        let attacker = event.nick.as_str();

        if ctx.state.combat.is_dead(attacker) {
            ctx.reply(event, format!("You can't attack when you're dead, {attacker}!"))
                .await?;
            return Ok(Outcome::HandledStop);
        }
        if !ctx.state.presence.contains(target) {
            debug!(attacker, victim = target, "Attack on absent target");
            ctx.reply(event, format!("{attacker} flails around.")).await?;
            return Ok(Outcome::HandledStop);
        }
        if ctx.state.combat.is_dead(target) {
            ctx.reply(event, format!("{target} is already dead!")).await?;
            return Ok(Outcome::HandledStop);
        }

        let swing = self.roll();
        let health = ctx.state.combat.apply_damage(target, swing.damage());
        info!(attacker, victim = target, ?swing, health, "Attack resolved");

        let line = match swing {
            Swing::Miss => format!("{attacker} misses {target}!"),
            Swing::Hit(damage) => format!("{attacker} hits {target} for {damage} damage!"),
            Swing::Crit(damage) => format!("{attacker} crits {target} for {damage} damage!"),
        };
        ctx.reply(event, line).await?;

        if health == 0 {
            ctx.reply(event, format!("{target} has died!")).await?;
        }
        Ok(Outcome::HandledStop)
    }
}
