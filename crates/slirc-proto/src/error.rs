//! Error types for the protocol library.
//!
//! [`ParseError`] is the recoverable failure returned by [`crate::parse`];
//! [`ProtocolError`] covers the framing layer used by the line codec.

use thiserror::Error;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Why a raw line could not be turned into an [`crate::Event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseFailure {
    /// Nothing left after trimming.
    Empty,
    /// Fewer than two head tokens (prefix and command).
    TooFewTokens,
    /// A `PING` without the daemon it came from.
    MissingPingDaemon,
    /// A channel-bearing command without its channel token.
    MissingChannel,
}

impl ParseFailure {
    /// Short human-readable reason.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty line",
            Self::TooFewTokens => "expected a prefix and a command",
            Self::MissingPingDaemon => "PING without a daemon name",
            Self::MissingChannel => "command is missing its channel",
        }
    }
}

impl std::fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A line that could not be parsed. Carries the offending text so the
/// transport can log it and move on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}: {raw:?}")]
pub struct ParseError {
    /// The raw line as received.
    pub raw: String,
    /// Why parsing failed.
    pub reason: ParseFailure,
}

impl ParseError {
    pub(crate) fn new(raw: &str, reason: ParseFailure) -> Self {
        Self {
            raw: raw.to_owned(),
            reason,
        }
    }
}

/// Framing and I/O errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// I/O error during reading or writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Line exceeded the configured maximum length.
    #[error("message too long: {actual} bytes (limit: {limit})")]
    MessageTooLong {
        /// Actual line length.
        actual: usize,
        /// Maximum allowed length.
        limit: usize,
    },

    /// Outgoing line contained an embedded line break.
    #[error("outgoing line contains a line break: {0:?}")]
    EmbeddedLineBreak(String),
}
