//! The handler contract.

use super::context::Context;
use crate::error::HandlerResult;
use async_trait::async_trait;
use slirc_proto::Event;

/// What a handler made of an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Not relevant to this handler.
    NotApplicable,
    /// Handled, and later handlers should still see the event.
    HandledContinue,
    /// Handled, and the chain stops here.
    HandledStop,
}

impl Outcome {
    pub fn fired(self) -> bool {
        self != Self::NotApplicable
    }
}

/// One behavior in the dispatch chain.
///
/// Handlers keep no per-event state of their own; everything they remember
/// lives in [`Context::state`].
#[async_trait]
pub trait Handler: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Handle an incoming event.
    async fn handle(&self, ctx: &mut Context<'_>, event: &Event) -> HandlerResult;
}
