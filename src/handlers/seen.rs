//! Last-seen log and `<bot>, seen <nick>?` queries.

use super::{Context, Handler, Outcome};
use crate::error::HandlerResult;
use crate::state::{SeenLog, format_timestamp};
use async_trait::async_trait;
use regex::Regex;
use slirc_proto::{CommandKind, Event};
use tracing::debug;

pub struct SeenHandler {
    query: Regex,
}

impl SeenHandler {
    /// The query must be addressed to `nick`.
    pub fn new(nick: &str) -> Self {
        let pattern = format!(r"{}, seen ([^\s?]+)\?", regex::escape(nick));
        Self {
            query: Regex::new(&pattern).expect("escaped nick is a valid pattern"),
        }
    }
}

#[async_trait]
impl Handler for SeenHandler {
    fn name(&self) -> &'static str {
        "seen"
    }

    async fn handle(&self, ctx: &mut Context<'_>, event: &Event) -> HandlerResult {
        if !SeenLog::tracks(event) {
            return Ok(Outcome::NotApplicable);
        }

        let wanted = if event.kind == CommandKind::PrivateMessage {
            self.query.captures(event.text()).map(|caps| caps[1].to_owned())
        } else {
            None
        };

        let Some(wanted) = wanted else {
            ctx.state.seen.record(event, ctx.now);
            return Ok(Outcome::HandledContinue);
        };

        let reply = match ctx.state.seen.get(&wanted) {
            Some(entry) => format!(
                "I last saw {wanted} at {}, {}.",
                format_timestamp(entry.at),
                entry.activity()
            ),
            None => format!("Sorry, haven't seen {wanted}."),
        };
        debug!(asker = %event.nick, wanted = %wanted, "Seen query");
        ctx.reply(event, reply).await?;
        Ok(Outcome::HandledStop)
    }
}
