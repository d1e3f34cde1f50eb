//! # slirc-proto
//!
//! Protocol plumbing for the slircbot IRC agent: a forgiving line parser
//! that turns raw server lines into [`Event`]s, the handful of outgoing
//! [`Command`]s a bot needs, and a tokio line codec.
//!
//! ## Parsing
//!
//! ```rust
//! use slirc_proto::{parse, CommandKind};
//!
//! let event = parse(":nick!~user@host PRIVMSG #chan :hello").unwrap();
//! assert_eq!(event.kind, CommandKind::PrivateMessage);
//! assert_eq!(event.nick, "nick");
//! assert_eq!(event.channel.as_deref(), Some("#chan"));
//! assert_eq!(event.text(), "hello");
//!
//! // Malformed input is an error, never a panic.
//! assert!(parse(":server").is_err());
//! ```
//!
//! ## Sending
//!
//! ```rust
//! use slirc_proto::Command;
//!
//! assert_eq!(Command::privmsg("#chan", "hi").to_string(), "PRIVMSG #chan :hi");
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod command;
pub mod ctcp;
pub mod error;
pub mod event;
#[cfg(feature = "tokio")]
pub mod line;
pub mod prefix;

pub use self::command::Command;
pub use self::error::{ParseError, ParseFailure, ProtocolError};
pub use self::event::{parse, strip_member_prefix, CommandKind, Event, RPL_NAMREPLY};
#[cfg(feature = "tokio")]
pub use self::line::LineCodec;
pub use self::prefix::Prefix;
