//! `s/search/replace/` corrections of a nick's last message.

use super::{Context, Handler, Outcome};
use crate::error::HandlerResult;
use async_trait::async_trait;
use regex::Regex;
use slirc_proto::{CommandKind, Event};
use tracing::{debug, warn};

pub struct CorrectionHandler;

/// Split `s/<search>/<replace>/` into its parts. Exactly two interior
/// slashes; the search must be non-empty.
fn parse_substitution(token: &str) -> Option<(&str, &str)> {
    let body = token.strip_prefix("s/")?.strip_suffix('/')?;
    let mut parts = body.split('/');
    let search = parts.next()?;
    let replace = parts.next()?;
    if parts.next().is_some() || search.is_empty() {
        return None;
    }
    Some((search, replace))
}

#[async_trait]
impl Handler for CorrectionHandler {
    fn name(&self) -> &'static str {
        "correction"
    }

    async fn handle(&self, ctx: &mut Context<'_>, event: &Event) -> HandlerResult {
        if event.kind != CommandKind::PrivateMessage {
            return Ok(Outcome::NotApplicable);
        }
        let Some((search, replace)) = event
            .text()
            .split_whitespace()
            .next()
            .and_then(parse_substitution)
        else {
            return Ok(Outcome::NotApplicable);
        };

        let Some(last) = ctx.state.seen.get(&event.nick) else {
            debug!(nick = %event.nick, "Nothing to correct");
            return Ok(Outcome::NotApplicable);
        };

        let pattern = match Regex::new(search) {
            Ok(pattern) => pattern,
            Err(e) => {
                warn!(nick = %event.nick, pattern = search, error = %e, "Bad correction pattern");
                return Ok(Outcome::NotApplicable);
            }
        };

        let corrected = pattern.replace_all(last.text(), replace).into_owned();
        ctx.reply(event, format!("{} actually meant: {}", event.nick, corrected))
            .await?;
        Ok(Outcome::HandledStop)
    }
}
