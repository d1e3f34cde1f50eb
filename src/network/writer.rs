//! Paced outbound writer.

use crate::config::PacingConfig;
use futures_util::SinkExt;
use slirc_proto::{Command, LineCodec, ProtocolError};
use tokio::io::AsyncWrite;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::codec::FramedWrite;
use tracing::{debug, warn};

/// Spawn the writer task.
///
/// Commands are written in queue order. Each PRIVMSG is held back for its
/// typing delay first; everything else goes out immediately. A command that
/// cannot be framed is logged and dropped. The task ends cleanly once every
/// sender is dropped and the queue is drained, and with an error only when
/// the socket itself fails.
pub fn spawn_writer<W>(
    io: W,
    rx: mpsc::Receiver<Command>,
    pacing: PacingConfig,
) -> JoinHandle<Result<(), ProtocolError>>
where
    W: AsyncWrite + Unpin + Send + 'static,
{
    let sink = FramedWrite::new(io, LineCodec::new());
    tokio::spawn(run(sink, rx, pacing))
}

async fn run<W>(
    mut sink: FramedWrite<W, LineCodec>,
    mut rx: mpsc::Receiver<Command>,
    pacing: PacingConfig,
) -> Result<(), ProtocolError>
where
    W: AsyncWrite + Unpin,
{
    while let Some(cmd) = rx.recv().await {
        if let Some(text) = cmd.chat_text() {
            let delay = pacing.typing_delay(text);
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }
        debug!(line = %cmd, "Sending");
        match sink.send(cmd).await {
            Ok(()) => {}
            Err(e @ ProtocolError::Io(_)) => return Err(e),
            Err(e) => warn!(error = %e, "Dropping unsendable line"),
        }
    }
    Ok(())
}
