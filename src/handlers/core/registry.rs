//! Handler registry and dispatch.
//!
//! The chain order is a fixed priority list:
//!
//! 1. sleep (a sleeping bot swallows everything but its wake-up)
//! 2. ping (keepalives are always answered)
//! 3. presence (fires without stopping, so later handlers see membership changes)
//! 4. correction, score, seen, combat
//! 5. mention (catch-all)

use super::context::Context;
use super::traits::{Handler, Outcome};
use crate::dice::SharedDice;
use crate::error::HandlerError;
use crate::handlers::{
    combat::CombatHandler, correction::CorrectionHandler, mention::MentionHandler,
    ping::PingHandler, presence::PresenceHandler, score::ScoreHandler, seen::SeenHandler,
    sleep::SleepHandler,
};
use crate::telemetry::spans;
use slirc_proto::Event;
use tracing::{Instrument, debug, warn};

/// Ordered chain of handlers.
pub struct Registry {
    handlers: Vec<Box<dyn Handler>>,
}

impl Registry {
    /// Build the standard chain for a bot with the given nick.
    pub fn new(nick: &str, dice: SharedDice) -> Self {
        let handlers: Vec<Box<dyn Handler>> = vec![
            Box::new(SleepHandler),
            Box::new(PingHandler),
            Box::new(PresenceHandler),
            Box::new(CorrectionHandler),
            Box::new(ScoreHandler),
            Box::new(SeenHandler::new(nick)),
            Box::new(CombatHandler::new(dice.clone())),
            Box::new(MentionHandler::new(dice)),
        ];
        Self { handlers }
    }

    /// Build a registry from an explicit chain.
    #[cfg(test)]
    pub fn with_handlers(handlers: Vec<Box<dyn Handler>>) -> Self {
        Self { handlers }
    }

    /// Handler names in chain order.
    pub fn names(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }

    /// Run the chain over one event.
    ///
    /// Returns the name of the handler that stopped the chain, if any. A
    /// handler error ends the chain and is returned to the caller.
    pub async fn dispatch(
        &self,
        ctx: &mut Context<'_>,
        event: &Event,
    ) -> Result<Option<&'static str>, HandlerError> {
        let span = spans::dispatch(event.kind.as_str(), &event.source);

        async move {
            for handler in &self.handlers {
                let outcome = match handler.handle(ctx, event).await {
                    Ok(outcome) => outcome,
                    Err(e) => {
                        warn!(handler = handler.name(), error = %e, code = e.error_code(), "Handler failed");
                        return Err(e);
                    }
                };

                match outcome {
                    Outcome::NotApplicable => {}
                    Outcome::HandledContinue => {
                        debug!(handler = handler.name(), "Handled, continuing");
                    }
                    Outcome::HandledStop => {
                        debug!(handler = handler.name(), "Handled, chain stopped");
                        return Ok(Some(handler.name()));
                    }
                }
            }
            Ok(None)
        }
        .instrument(span)
        .await
    }
}
