//! Integration test common infrastructure.
//!
//! Provides a scripted IRC server for the bot to connect to and a handle
//! on a running bot process.

pub mod bot;
pub mod server;

#[allow(unused_imports)]
pub use bot::TestBot;
#[allow(unused_imports)]
pub use server::{FakeServer, ServerConn};
