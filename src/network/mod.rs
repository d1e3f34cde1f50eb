//! Network module.
//!
//! The [`Session`] owns the server connection and the read loop; the
//! writer task drains outgoing commands onto the socket at typing speed.

mod session;
mod writer;

pub use session::Session;
pub use writer::spawn_writer;
