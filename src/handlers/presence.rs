//! Channel membership tracking.
//!
//! Never replies and never stops the chain: every later handler still sees
//! the joins, parts and name lists that pass through here.

use super::{Context, Handler, Outcome};
use crate::error::HandlerResult;
use async_trait::async_trait;
use slirc_proto::{CommandKind, Event, RPL_NAMREPLY};
use tracing::debug;

pub struct PresenceHandler;

#[async_trait]
impl Handler for PresenceHandler {
    fn name(&self) -> &'static str {
        "presence"
    }

    async fn handle(&self, ctx: &mut Context<'_>, event: &Event) -> HandlerResult {
        let presence = &mut ctx.state.presence;
        match event.kind {
            CommandKind::Join => {
                if event.nick != ctx.nick && presence.insert(&event.nick) {
                    debug!(nick = %event.nick, "Joined");
                }
            }
            CommandKind::Part | CommandKind::Quit => {
                if presence.remove(&event.nick) {
                    debug!(nick = %event.nick, kind = %event.kind, "Left");
                }
            }
            CommandKind::Numeric if event.is_numeric(RPL_NAMREPLY) => {
                // The name list includes us; that is how we become scoreable.
                for nick in event.names() {
                    presence.insert(nick);
                }
                debug!(members = presence.len(), "Name list ingested");
            }
            _ => return Ok(Outcome::NotApplicable),
        }
        Ok(Outcome::HandledContinue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::{BOT, Harness};

    fn members(h: &Harness) -> Vec<String> {
        h.state.presence.iter().map(str::to_owned).collect()
    }

    #[tokio::test]
    async fn test_names_reply_strips_markers() {
        let mut h = Harness::new();
        let outcome = h
            .feed(
                &PresenceHandler,
                ":irc.example.net 353 gobot = #testbot :@alice +bob gobot carol",
            )
            .await;
        assert_eq!(outcome, Outcome::HandledContinue);
        assert_eq!(members(&h), ["alice", "bob", "carol", BOT]);
        assert!(h.sent().is_empty());
    }

    #[tokio::test]
    async fn test_join_skips_self() {
        let mut h = Harness::new();
        h.feed(&PresenceHandler, ":gobot!g@h JOIN :#testbot").await;
        assert!(h.state.presence.is_empty());

        let outcome = h.feed(&PresenceHandler, ":dave!d@h JOIN :#testbot").await;
        assert_eq!(outcome, Outcome::HandledContinue);
        assert_eq!(members(&h), ["dave"]);

        // Joining twice keeps one entry.
        h.feed(&PresenceHandler, ":dave!d@h JOIN :#testbot").await;
        assert_eq!(h.state.presence.len(), 1);
    }

    #[tokio::test]
    async fn test_part_and_quit_remove() {
        let mut h = Harness::new();
        h.present(&["alice", "bob"]);
        h.feed(&PresenceHandler, ":alice!a@h PART #testbot").await;
        h.feed(&PresenceHandler, ":bob!b@h QUIT :Ping timeout").await;
        assert!(h.state.presence.is_empty());
    }

    #[tokio::test]
    async fn test_other_events_not_applicable() {
        let mut h = Harness::new();
        let outcome = h.feed(&PresenceHandler, ":bob!b@h PRIVMSG #testbot :hi").await;
        assert_eq!(outcome, Outcome::NotApplicable);
        let outcome = h.feed(&PresenceHandler, ":irc.example.net 366 gobot #testbot :End").await;
        assert_eq!(outcome, Outcome::NotApplicable);
    }
}
