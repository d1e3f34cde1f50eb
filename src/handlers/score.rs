//! Point scoring.
//!
//! `nick++` / `nick--` award and dock points; `<bot>, scores?` lists the
//! room and `<bot>, my score?` explains the asker's points.

use std::sync::LazyLock;

use super::{Context, Handler, Outcome};
use crate::error::HandlerResult;
use crate::state::{Point, format_timestamp};
use async_trait::async_trait;
use regex::Regex;
use slirc_proto::{CommandKind, Event};
use tracing::{debug, info};

static CHANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)(\+\+|--)").expect("hardcoded regex"));
static LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+, scores?\?").expect("hardcoded regex"));
static MINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+, my score\?").expect("hardcoded regex"));

pub struct ScoreHandler;

impl ScoreHandler {
    /// `nick++` / `nick--`. Both the granter and the target must be in the
    /// room.
    async fn change(&self, ctx: &mut Context<'_>, event: &Event) -> HandlerResult {
        let Some(caps) = CHANGE.captures(event.text()) else {
            return Ok(Outcome::NotApplicable);
        };
        let target = &caps[1];
        if !ctx.state.presence.contains(target) || !ctx.state.presence.contains(&event.nick) {
            debug!(nick = target, by = %event.nick, "Ignoring score change involving absent nick");
            return Ok(Outcome::NotApplicable);
        }

        // The point is for whatever the granter said last, not for the
        // `++` itself.
        let (reason, at) = match ctx.state.seen.get(&event.nick) {
            Some(last) if !last.text().is_empty() => (last.text().to_owned(), last.at),
            Some(last) => (event.text().to_owned(), last.at),
            None => (event.text().to_owned(), ctx.now),
        };
        let point = Point {
            granter: event.nick.clone(),
            at,
            reason,
            increase: &caps[2] == "++",
        };
        let total = ctx.state.scores.record(target, point);
        info!(nick = target, by = %event.nick, total, "Score changed");

        ctx.reply(event, format!("{target}'s score is now {total}"))
            .await?;
        Ok(Outcome::HandledStop)
    }

    /// Everyone in the room, in order.
    async fn list(&self, ctx: &mut Context<'_>, event: &Event) -> HandlerResult {
        if !LIST.is_match(event.text()) {
            return Ok(Outcome::NotApplicable);
        }

        let scores = &ctx.state.scores;
        if scores.is_empty() {
            ctx.reply(event, "Nobody has a score yet!").await?;
            return Ok(Outcome::HandledStop);
        }

        let lines: Vec<String> = ctx
            .state
            .presence
            .iter()
            .map(|nick| {
                let me = nick == ctx.nick;
                match (scores.get(nick), me) {
                    (Some(score), true) => format!("My score is {}.", score.total()),
                    (Some(score), false) => format!("{nick}'s score is {}.", score.total()),
                    (None, true) => "I don't have a score.".to_owned(),
                    (None, false) => format!("{nick} has no score."),
                }
            })
            .collect();

        for line in lines {
            ctx.reply(event, line).await?;
        }
        Ok(Outcome::HandledStop)
    }

    /// The asker's total and where each point came from.
    async fn mine(&self, ctx: &mut Context<'_>, event: &Event) -> HandlerResult {
        if !MINE.is_match(event.text()) {
            return Ok(Outcome::NotApplicable);
        }

        let nick = &event.nick;
        let lines: Vec<String> = match ctx.state.scores.get(nick) {
            None => vec![format!("{nick}, you don't have a score yet.")],
            Some(score) => std::iter::once(format!("{nick}, your score is {}.", score.total()))
                .chain(score.history().iter().map(|point| {
                    format!(
                        "{} {} you a point at {} for saying \"{}\"",
                        point.granter,
                        point.verb(),
                        format_timestamp(point.at),
                        point.reason
                    )
                }))
                .collect(),
        };

        for line in lines {
            ctx.reply(event, line).await?;
        }
        Ok(Outcome::HandledStop)
    }
}

#[async_trait]
impl Handler for ScoreHandler {
    fn name(&self) -> &'static str {
        "score"
    }

    async fn handle(&self, ctx: &mut Context<'_>, event: &Event) -> HandlerResult {
        if event.kind != CommandKind::PrivateMessage {
            return Ok(Outcome::NotApplicable);
        }

        let outcome = self.change(ctx, event).await?;
        if outcome.fired() {
            return Ok(outcome);
        }
        let outcome = self.list(ctx, event).await?;
        if outcome.fired() {
            return Ok(outcome);
        }
        self.mine(ctx, event).await
    }
}
