//! Server session: registration, auto-join and the read loop.

use std::future::Future;

use crate::config::Config;
use crate::dice::SharedDice;
use crate::error::{HandlerError, SessionError};
use crate::handlers::{Context, Registry, ResponseMiddleware};
use crate::network::spawn_writer;
use crate::state::BotState;
use chrono::Utc;
use futures_util::StreamExt;
use slirc_proto::{Command, CommandKind, Event, LineCodec, ProtocolError, parse};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::codec::FramedRead;
use tracing::{debug, info, warn};

/// Outgoing queue depth. Replies beyond this wait for the writer.
const OUTGOING_QUEUE: usize = 64;

const QUIT_MESSAGE: &str = "Good night.";

type LineReader = FramedRead<Box<dyn AsyncRead + Send + Unpin>, LineCodec>;

/// One connection to the server.
pub struct Session {
    reader: LineReader,
    bot: Bot,
    writer: JoinHandle<Result<(), ProtocolError>>,
}

/// Everything the read loop needs besides the socket.
struct Bot {
    nick: String,
    channel: String,
    state: BotState,
    registry: Registry,
    outgoing: mpsc::Sender<Command>,
    joined: bool,
}

impl Session {
    /// Connect over TCP and register.
    pub async fn connect(config: Config, dice: SharedDice) -> Result<Self, SessionError> {
        let addr = format!("{}:{}", config.server.host, config.server.port);
        let stream = TcpStream::connect(&addr)
            .await
            .map_err(|source| SessionError::Connect {
                addr: addr.clone(),
                source,
            })?;
        info!(%addr, "Connected");
        Self::start(stream, config, dice).await
    }

    /// Register over an already-open stream.
    ///
    /// Sends PASS (only when a password is configured), NICK and USER, in
    /// that order.
    pub async fn start<S>(stream: S, config: Config, dice: SharedDice) -> Result<Self, SessionError>
    where
        S: AsyncRead + AsyncWrite + Send + Unpin + 'static,
    {
        let (read_half, write_half) = tokio::io::split(stream);
        let read_half: Box<dyn AsyncRead + Send + Unpin> = Box::new(read_half);
        let reader: LineReader = FramedRead::new(read_half, LineCodec::new());

        let (outgoing, rx) = mpsc::channel(OUTGOING_QUEUE);
        let writer = spawn_writer(write_half, rx, config.pacing.clone());

        let bot_config = &config.bot;
        for cmd in Command::registration(
            config.server.password.as_deref(),
            &bot_config.nick,
            bot_config.username(),
            &bot_config.realname,
        ) {
            outgoing.send(cmd).await?;
        }
        info!(nick = %bot_config.nick, "Registration sent");

        let registry = Registry::new(&bot_config.nick, dice);
        debug!(chain = ?registry.names(), "Handler chain ready");

        let bot = Bot {
            registry,
            nick: bot_config.nick.clone(),
            channel: bot_config.channel.clone(),
            state: BotState::new(config.behavior.sleep_timeout()),
            outgoing,
            joined: false,
        };

        Ok(Self {
            reader,
            bot,
            writer,
        })
    }

    /// Run until the connection fails or `shutdown` resolves. On shutdown a
    /// QUIT is sent and the outgoing queue is flushed before returning.
    pub async fn run_until<F>(self, shutdown: F) -> Result<(), SessionError>
    where
        F: Future<Output = ()>,
    {
        let Session {
            mut reader,
            mut bot,
            writer,
        } = self;
        tokio::pin!(shutdown);

        let result = loop {
            tokio::select! {
                line = reader.next() => match line {
                    Some(Ok(line)) => {
                        if let Err(e) = bot.process_line(&line).await {
                            break Err(e.into());
                        }
                    }
                    Some(Err(e)) => break Err(SessionError::Read(e)),
                    None => break Err(SessionError::Closed),
                },
                () = &mut shutdown => {
                    info!("Shutting down");
                    let quit = Command::Quit(Some(QUIT_MESSAGE.to_owned()));
                    break bot.outgoing.send(quit).await.map_err(SessionError::from);
                }
            }
        };

        // Dropping the last sender lets the writer drain and exit.
        drop(bot);
        match writer.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!(error = %e, "Writer failed"),
            Err(e) => warn!(error = %e, "Writer task panicked"),
        }
        result
    }
}

impl Bot {
    async fn process_line(&mut self, line: &str) -> Result<(), HandlerError> {
        debug!(line, "Received");
        let event = match parse(line) {
            Ok(event) => event,
            Err(e) => {
                warn!(error = %e, reason = e.reason.as_str(), "Skipping unparseable line");
                return Ok(());
            }
        };

        if self.is_registration_ack(&event) {
            self.joined = true;
            info!(channel = %self.channel, "Registered, joining");
            self.outgoing.send(Command::join(&self.channel)).await?;
            self.outgoing.send(Command::names(&self.channel)).await?;
            return Ok(());
        }

        let mut ctx = Context::new(
            &self.nick,
            &mut self.state,
            ResponseMiddleware::Direct(&self.outgoing),
            Utc::now(),
        );
        self.registry.dispatch(&mut ctx, &event).await?;
        Ok(())
    }

    /// The first MODE aimed at our own nick means the server has accepted
    /// our registration.
    fn is_registration_ack(&self, event: &Event) -> bool {
        !self.joined && event.kind == CommandKind::Mode && event.channel() == self.nick
    }
}
