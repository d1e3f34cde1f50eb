//! Scripted IRC server.
//!
//! Accepts a single bot connection and lets the test drive it line by line.

use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::time::timeout;

const RECV_TIMEOUT: Duration = Duration::from_secs(5);
const ACCEPT_TIMEOUT: Duration = Duration::from_secs(10);

/// A listening fake server on an ephemeral port.
pub struct FakeServer {
    listener: TcpListener,
}

impl FakeServer {
    pub async fn bind() -> anyhow::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        Ok(Self { listener })
    }

    pub fn port(&self) -> anyhow::Result<u16> {
        Ok(self.listener.local_addr()?.port())
    }

    /// Wait for the bot to connect.
    pub async fn accept(&self) -> anyhow::Result<ServerConn> {
        let (stream, _) = timeout(ACCEPT_TIMEOUT, self.listener.accept()).await??;
        let (read_half, writer) = stream.into_split();
        Ok(ServerConn {
            reader: BufReader::new(read_half),
            writer,
        })
    }
}

/// The server end of one bot connection.
pub struct ServerConn {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
}

impl ServerConn {
    /// Send a raw line to the bot.
    pub async fn send_raw(&mut self, line: &str) -> anyhow::Result<()> {
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.write_all(b"\r\n").await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Receive one line from the bot, without the line ending.
    pub async fn recv(&mut self) -> anyhow::Result<String> {
        let mut line = String::new();
        let read = timeout(RECV_TIMEOUT, self.reader.read_line(&mut line)).await??;
        if read == 0 {
            anyhow::bail!("bot closed the connection");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Receive one line and assert it is exactly `expected`.
    pub async fn expect(&mut self, expected: &str) -> anyhow::Result<()> {
        let line = self.recv().await?;
        anyhow::ensure!(line == expected, "expected {expected:?}, got {line:?}");
        Ok(())
    }

    /// Read the registration burst and acknowledge it the way servers do,
    /// then swallow the auto-join.
    pub async fn register(&mut self, nick: &str, channel: &str) -> anyhow::Result<()> {
        self.expect(&format!("NICK {nick}")).await?;
        let user = self.recv().await?;
        anyhow::ensure!(user.starts_with(&format!("USER {nick} ")), "unexpected {user:?}");

        self.send_raw(&format!(":irc.test 001 {nick} :Welcome to the test network"))
            .await?;
        self.send_raw(&format!(":{nick} MODE {nick} :+i")).await?;
        self.expect(&format!("JOIN {channel}")).await?;
        self.expect(&format!("NAMES {channel}")).await?;
        Ok(())
    }
}
