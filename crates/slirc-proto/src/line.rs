//! Line-based codec for tokio.
//!
//! Reads CRLF- or LF-terminated lines and writes CRLF-terminated ones.
//! Invalid UTF-8 is replaced rather than rejected: chat from legacy clients
//! should not take the connection down.

use bytes::{BufMut, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

use crate::command::Command;
use crate::error;

/// Default maximum line length. Generous enough for IRCv3 tags.
pub const DEFAULT_MAX_LEN: usize = 8191;

/// Line-based codec that handles newline-terminated messages.
pub struct LineCodec {
    /// Index of next byte to check for newline
    next_index: usize,
    /// Maximum line length
    max_len: usize,
}

impl LineCodec {
    /// Create a codec with the default line limit.
    pub fn new() -> Self {
        Self::with_max_len(DEFAULT_MAX_LEN)
    }

    /// Create a new codec with custom max line length.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            next_index: 0,
            max_len,
        }
    }
}

impl Default for LineCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for LineCodec {
    type Item = String;
    type Error = error::ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> error::Result<Option<String>> {
        if let Some(offset) = src[self.next_index..].iter().position(|b| *b == b'\n') {
            let line = src.split_to(self.next_index + offset + 1);
            self.next_index = 0;

            if line.len() > self.max_len {
                return Err(error::ProtocolError::MessageTooLong {
                    actual: line.len(),
                    limit: self.max_len,
                });
            }

            // Interior CRs become spaces; decoded text never holds a line break.
            let data = String::from_utf8_lossy(&line);
            Ok(Some(data.trim_end_matches(['\r', '\n']).replace('\r', " ")))
        } else {
            // No complete line yet - remember where we stopped
            self.next_index = src.len();

            if src.len() > self.max_len {
                return Err(error::ProtocolError::MessageTooLong {
                    actual: src.len(),
                    limit: self.max_len,
                });
            }

            Ok(None)
        }
    }
}

impl Encoder<String> for LineCodec {
    type Error = error::ProtocolError;

    fn encode(&mut self, msg: String, dst: &mut BytesMut) -> error::Result<()> {
        if msg.contains(['\r', '\n']) {
            return Err(error::ProtocolError::EmbeddedLineBreak(msg));
        }
        dst.reserve(msg.len() + 2);
        dst.put_slice(msg.as_bytes());
        dst.put_slice(b"\r\n");
        Ok(())
    }
}

impl Encoder<Command> for LineCodec {
    type Error = error::ProtocolError;

    fn encode(&mut self, cmd: Command, dst: &mut BytesMut) -> error::Result<()> {
        Encoder::<String>::encode(self, cmd.to_string(), dst)
    }
}
