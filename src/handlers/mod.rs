//! Event handlers.
//!
//! Each handler is one channel behavior. The [`Registry`] runs them in a
//! fixed priority order over every parsed event; see [`core::registry`] for
//! why the order matters.

pub mod core;

pub mod combat;
pub mod correction;
pub mod mention;
pub mod ping;
pub mod presence;
pub mod score;
pub mod seen;
pub mod sleep;

pub use self::core::{Context, Handler, Outcome, Registry, ResponseMiddleware};

#[cfg(test)]
pub(crate) mod testing {
    //! Drives handlers against a capturing sink.

    use super::{Context, Handler, Outcome, Registry, ResponseMiddleware};
    use crate::state::BotState;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use slirc_proto::{Command, parse};
    use tokio::sync::Mutex;

    pub(crate) const BOT: &str = "gobot";

    pub(crate) struct Harness {
        pub(crate) state: BotState,
        pub(crate) now: DateTime<Utc>,
        out: Mutex<Vec<Command>>,
    }

    impl Harness {
        pub(crate) fn new() -> Self {
            Self {
                state: BotState::new(Duration::seconds(300)),
                now: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
                out: Mutex::new(Vec::new()),
            }
        }

        /// Seat nicks in the channel.
        pub(crate) fn present(&mut self, nicks: &[&str]) {
            for nick in nicks {
                self.state.presence.insert(nick);
            }
        }

        pub(crate) fn advance(&mut self, by: Duration) {
            self.now += by;
        }

        /// Record a line straight into the seen log.
        pub(crate) fn saw(&mut self, line: &str) {
            self.state.seen.record(&parse(line).unwrap(), self.now);
        }

        pub(crate) async fn feed(&mut self, handler: &dyn Handler, line: &str) -> Outcome {
            let event = parse(line).unwrap();
            let mut ctx = Context::new(
                BOT,
                &mut self.state,
                ResponseMiddleware::Capturing(&self.out),
                self.now,
            );
            handler.handle(&mut ctx, &event).await.unwrap()
        }

        pub(crate) async fn dispatch(
            &mut self,
            registry: &Registry,
            line: &str,
        ) -> Option<&'static str> {
            let event = parse(line).unwrap();
            let mut ctx = Context::new(
                BOT,
                &mut self.state,
                ResponseMiddleware::Capturing(&self.out),
                self.now,
            );
            registry.dispatch(&mut ctx, &event).await.unwrap()
        }

        /// Everything sent since the last call.
        pub(crate) fn sent(&mut self) -> Vec<Command> {
            std::mem::take(self.out.get_mut())
        }

        /// PRIVMSG texts sent since the last call.
        pub(crate) fn replies(&mut self) -> Vec<String> {
            self.sent()
                .iter()
                .filter_map(|cmd| cmd.chat_text().map(str::to_owned))
                .collect()
        }
    }
}
