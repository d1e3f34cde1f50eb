//! Handler context.
//!
//! Defines the `Context<'a>` passed to every handler: the bot's identity,
//! the conversational state, the response sink and the dispatch time.

use super::middleware::ResponseMiddleware;
use crate::error::HandlerError;
use crate::state::BotState;
use chrono::{DateTime, Utc};
use slirc_proto::{Command, Event};

/// Handler context passed to each handler.
pub struct Context<'a> {
    /// Our own nick.
    pub nick: &'a str,
    /// Conversational state, owned by the dispatch loop.
    pub state: &'a mut BotState,
    /// Sink for outgoing commands.
    pub sender: ResponseMiddleware<'a>,
    /// When the event was dispatched. Every time-dependent decision for one
    /// event uses this single instant.
    pub now: DateTime<Utc>,
}

impl<'a> Context<'a> {
    pub fn new(
        nick: &'a str,
        state: &'a mut BotState,
        sender: ResponseMiddleware<'a>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            nick,
            state,
            sender,
            now,
        }
    }

    /// Whether the text names us.
    pub fn mentions_me(&self, text: &str) -> bool {
        text.contains(self.nick)
    }

    /// Where a reply to this event belongs: the channel it came from, or the
    /// sender when it was a private query to us.
    pub fn reply_target<'e>(&self, event: &'e Event) -> &'e str {
        let target = event.channel();
        if target == self.nick || target.is_empty() {
            &event.nick
        } else {
            target
        }
    }

    /// Send a PRIVMSG in reply to the event.
    pub async fn reply(&self, event: &Event, text: impl Into<String>) -> Result<(), HandlerError> {
        let target = self.reply_target(event);
        self.sender.send(Command::privmsg(target, text)).await?;
        Ok(())
    }

    /// Send an arbitrary command.
    pub async fn send(&self, cmd: Command) -> Result<(), HandlerError> {
        self.sender.send(cmd).await?;
        Ok(())
    }
}
