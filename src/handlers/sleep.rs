//! Sleep mode.
//!
//! Telling the bot to be quiet puts it to sleep; while asleep it swallows
//! every message until someone wakes it by name or it oversleeps.

use super::{Context, Handler, Outcome};
use crate::error::HandlerResult;
use async_trait::async_trait;
use slirc_proto::{CommandKind, Event};
use tracing::info;

const WAKE_PHRASE: &str = "wake up";
const QUIET_PHRASES: [&str; 5] = ["shut up", "hush", "pipe down", "be quiet", "silence"];

pub struct SleepHandler;

#[async_trait]
impl Handler for SleepHandler {
    fn name(&self) -> &'static str {
        "sleep"
    }

    async fn handle(&self, ctx: &mut Context<'_>, event: &Event) -> HandlerResult {
        if event.kind != CommandKind::PrivateMessage {
            return Ok(Outcome::NotApplicable);
        }

        let text = event.text();
        let lowered = text.to_lowercase();
        let addressed = ctx.mentions_me(text);

        if ctx.state.sleep.is_asleep() {
            if addressed && lowered.contains(WAKE_PHRASE) {
                ctx.state.sleep.wake();
                info!(by = %event.nick, "Woken up");
                ctx.reply(event, "I'm awake! I'm awake!").await?;
            } else if ctx.state.sleep.overslept(ctx.now) {
                ctx.state.sleep.wake();
                info!("Overslept, waking up");
                ctx.reply(event, "Zzz— what? How long was I out?").await?;
            }
            return Ok(Outcome::HandledStop);
        }

        if addressed && QUIET_PHRASES.iter().any(|phrase| lowered.contains(phrase)) {
            ctx.state.sleep.fall_asleep(ctx.now);
            info!(by = %event.nick, "Going to sleep");
            ctx.reply(event, "OK, I'll go to sleep. Good night.").await?;
            return Ok(Outcome::HandledStop);
        }

        Ok(Outcome::NotApplicable)
    }
}
