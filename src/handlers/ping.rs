//! PING responder.

use super::{Context, Handler, Outcome};
use crate::error::HandlerResult;
use async_trait::async_trait;
use slirc_proto::{Command, CommandKind, Event};

/// Answers server keepalives.
pub struct PingHandler;

#[async_trait]
impl Handler for PingHandler {
    fn name(&self) -> &'static str {
        "ping"
    }

    async fn handle(&self, ctx: &mut Context<'_>, event: &Event) -> HandlerResult {
        if event.kind != CommandKind::Ping {
            return Ok(Outcome::NotApplicable);
        }

        // PING <daemon> -> PONG <daemon>
        ctx.send(Command::pong(&event.source)).await?;
        Ok(Outcome::HandledStop)
    }
}
