//! Unified error handling for slircbot.
//!
//! A handler error means the outgoing queue is gone. It ends the chain for
//! the current event and then the session. Session errors are fatal and end
//! the process.

use crate::handlers::Outcome;
use slirc_proto::{Command, ProtocolError};
use thiserror::Error;
use tokio::sync::mpsc;

// ============================================================================
// Handler Errors (event processing)
// ============================================================================

/// Errors that can occur while a handler processes an event.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The outbound queue is gone; the writer task has exited.
    #[error("send error: {0}")]
    Send(#[from] mpsc::error::SendError<Command>),
}

impl HandlerError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Send(_) => "send_error",
        }
    }
}

/// Result type for handlers.
pub type HandlerResult = Result<Outcome, HandlerError>;

// ============================================================================
// Session Errors (connection lifecycle)
// ============================================================================

/// Fatal connection errors.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("read error: {0}")]
    Read(#[from] ProtocolError),

    #[error("server closed the connection")]
    Closed,

    #[error("outbound queue closed")]
    Send,
}

impl From<mpsc::error::SendError<Command>> for SessionError {
    fn from(_: mpsc::error::SendError<Command>) -> Self {
        Self::Send
    }
}

impl From<HandlerError> for SessionError {
    fn from(err: HandlerError) -> Self {
        match err {
            HandlerError::Send(_) => Self::Send,
        }
    }
}
