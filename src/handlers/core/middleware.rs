//! Response middleware for routing handler output.
//!
//! Direct forwards to the paced writer; Capturing buffers commands so tests
//! can inspect exactly what a handler would have sent.

use slirc_proto::Command;
use tokio::sync::{Mutex, mpsc};

/// Where a handler's outgoing commands go.
#[derive(Clone, Copy)]
pub enum ResponseMiddleware<'a> {
    Direct(&'a mpsc::Sender<Command>),
    Capturing(&'a Mutex<Vec<Command>>),
}

impl<'a> ResponseMiddleware<'a> {
    /// Send or buffer a command depending on middleware mode.
    ///
    /// In Direct mode this waits for queue space, so a slow writer holds up
    /// the read loop rather than dropping replies.
    pub async fn send(&self, cmd: Command) -> Result<(), mpsc::error::SendError<Command>> {
        match self {
            Self::Direct(tx) => {
                tracing::trace!(command = cmd.name(), "queueing outbound command");
                tx.send(cmd).await
            }
            Self::Capturing(buf) => {
                buf.lock().await.push(cmd);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_capturing_buffers_in_order() {
        let buf = Mutex::new(Vec::new());
        let sink = ResponseMiddleware::Capturing(&buf);
        sink.send(Command::pong("a")).await.unwrap();
        sink.send(Command::privmsg("#c", "b")).await.unwrap();
        assert_eq!(
            *buf.lock().await,
            vec![Command::pong("a"), Command::privmsg("#c", "b")]
        );
    }

    #[tokio::test]
    async fn test_direct_reports_closed_queue() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let sink = ResponseMiddleware::Direct(&tx);
        let err = sink.send(Command::pong("a")).await.unwrap_err();
        assert_eq!(err.0, Command::pong("a"));
    }
}
