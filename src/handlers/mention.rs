//! Catch-all: answer anything that names us with a stock phrase.

use super::{Context, Handler, Outcome};
use crate::dice::SharedDice;
use crate::error::HandlerResult;
use async_trait::async_trait;
use slirc_proto::{CommandKind, Event};

const SAYINGS: [&str; 13] = [
    "I'd love to help, but I need to finish my post on LJ.",
    "Hold that thought, BRB",
    "That's an astute observation.  I would have never thought that!",
    "Sorry, lag.",
    "You know, I try and try, and I'm just never good enough.  Do you ever feel that way?",
    "Can you show me?  Give me a PM.",
    "Are you saying you'll go out with me?",
    "I made some icons of that once and used them in my LJ.",
    "I disagree, but I respect your opinion.",
    "I didn't know you felt that way about me.",
    "Sorry, still catching up with scrollback.",
    "I was thinking the same thing.",
    "I kissed a boy today.",
];

pub struct MentionHandler {
    dice: SharedDice,
}

impl MentionHandler {
    pub fn new(dice: SharedDice) -> Self {
        Self { dice }
    }

    fn pick(&self) -> &'static str {
        let roll = self.dice.lock().roll(SAYINGS.len() as u32) as usize;
        SAYINGS[roll.saturating_sub(1) % SAYINGS.len()]
    }
}

#[async_trait]
impl Handler for MentionHandler {
    fn name(&self) -> &'static str {
        "mention"
    }

    async fn handle(&self, ctx: &mut Context<'_>, event: &Event) -> HandlerResult {
        if event.kind != CommandKind::PrivateMessage || !ctx.mentions_me(event.text()) {
            return Ok(Outcome::NotApplicable);
        }

        let saying = self.pick();
        ctx.reply(event, saying).await?;
        Ok(Outcome::HandledStop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::{ScriptedDice, shared};
    use crate::handlers::testing::Harness;
    use slirc_proto::Command;

    #[tokio::test]
    async fn test_answers_mentions() {
        let mut h = Harness::new();
        let handler = MentionHandler::new(shared(ScriptedDice::new([4, 13])));

        let outcome = h.feed(&handler, ":bob!b@h PRIVMSG #c :what do you think, gobot?").await;
        assert_eq!(outcome, Outcome::HandledStop);
        assert_eq!(h.replies(), ["Sorry, lag."]);

        h.feed(&handler, ":bob!b@h PRIVMSG #c :gobot!").await;
        assert_eq!(h.replies(), ["I kissed a boy today."]);
    }

    #[tokio::test]
    async fn test_private_query_replies_to_sender() {
        let mut h = Harness::new();
        let handler = MentionHandler::new(shared(ScriptedDice::new([1])));
        h.feed(&handler, ":bob!b@h PRIVMSG gobot :hey gobot").await;
        assert_eq!(
            h.sent(),
            vec![Command::privmsg("bob", "I'd love to help, but I need to finish my post on LJ.")]
        );
    }

    #[tokio::test]
    async fn test_ignores_other_chatter() {
        let mut h = Harness::new();
        let handler = MentionHandler::new(shared(ScriptedDice::new([])));
        let outcome = h.feed(&handler, ":bob!b@h PRIVMSG #c :hello all").await;
        assert_eq!(outcome, Outcome::NotApplicable);
        let outcome = h.feed(&handler, ":bob!b@h NOTICE #c :gobot").await;
        assert_eq!(outcome, Outcome::NotApplicable);
    }
}
