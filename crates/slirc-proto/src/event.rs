//! Incoming line parsing.
//!
//! Only the handful of commands a conversational agent reacts to get their
//! own [`CommandKind`]. Any other command word after a prefix is treated as a
//! numeric reply and keeps its head tokens as [`Event::args`].

use std::fmt;

use crate::ctcp;
use crate::error::{ParseError, ParseFailure};
use crate::prefix::Prefix;

/// RPL_NAMREPLY, the name-list reply sent after JOIN or NAMES.
pub const RPL_NAMREPLY: &str = "353";

/// Kind of an incoming line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// Server keepalive.
    Ping,
    /// PRIVMSG to a channel or to us.
    PrivateMessage,
    /// MODE change notification.
    Mode,
    /// Someone left a channel.
    Part,
    /// Someone joined a channel.
    Join,
    /// Someone disconnected.
    Quit,
    /// NOTICE.
    Notice,
    /// Numeric reply (or any command word outside the keyword table).
    Numeric,
    /// A prefix-less line whose command we do not model.
    Unrecognized,
}

impl CommandKind {
    /// Look up a command word in the fixed keyword table.
    ///
    /// `PING` is handled separately by [`parse`] because it is the only
    /// command that may appear without a prefix.
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "PRIVMSG" => Some(Self::PrivateMessage),
            "MODE" => Some(Self::Mode),
            "PART" => Some(Self::Part),
            "JOIN" => Some(Self::Join),
            "QUIT" => Some(Self::Quit),
            "NOTICE" => Some(Self::Notice),
            _ => None,
        }
    }

    /// Canonical name, used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ping => "PING",
            Self::PrivateMessage => "PRIVMSG",
            Self::Mode => "MODE",
            Self::Part => "PART",
            Self::Join => "JOIN",
            Self::Quit => "QUIT",
            Self::Notice => "NOTICE",
            Self::Numeric => "NUMERIC",
            Self::Unrecognized => "UNRECOGNIZED",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed incoming line.
///
/// Field population by kind:
///
/// | kind                      | channel | text |
/// |---------------------------|---------|------|
/// | `Ping`                    | -       | -    |
/// | `PrivateMessage`/`Mode`/`Notice` | yes | yes |
/// | `Join`/`Part`             | yes     | -    |
/// | `Quit`                    | -       | yes  |
/// | `Numeric`/`Unrecognized`  | -       | if non-empty |
///
/// `nick`, `user` and `host` are empty for server-originated lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    /// The line as received, minus trailing whitespace.
    pub raw: String,
    /// Which command this is.
    pub kind: CommandKind,
    /// Originating nick.
    pub nick: String,
    /// Originating username (ident), without a leading `~`.
    pub user: String,
    /// Originating host.
    pub host: String,
    /// Server or nick that sent the line. For `Ping` this is the daemon
    /// name that must be echoed back in the PONG.
    pub source: String,
    /// Target channel (or nick, for private queries).
    pub channel: Option<String>,
    /// Trailing free text.
    pub text: Option<String>,
    /// Command word for `Numeric` and `Unrecognized` lines.
    pub code: Option<String>,
    /// Head tokens not consumed by the fields above.
    pub args: Vec<String>,
}

impl Event {
    fn bare(raw: &str, kind: CommandKind) -> Self {
        Self {
            raw: raw.to_owned(),
            kind,
            nick: String::new(),
            user: String::new(),
            host: String::new(),
            source: String::new(),
            channel: None,
            text: None,
            code: None,
            args: Vec::new(),
        }
    }

    /// Message text, or `""` when the kind carries none.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Target channel, or `""` when the kind carries none.
    pub fn channel(&self) -> &str {
        self.channel.as_deref().unwrap_or("")
    }

    /// Whether this is the given numeric reply.
    pub fn is_numeric(&self, code: &str) -> bool {
        self.kind == CommandKind::Numeric && self.code.as_deref() == Some(code)
    }

    /// Nicks from a name-list reply with any `@`/`+` marker removed.
    /// Empty for every other event.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        let list = if self.is_numeric(RPL_NAMREPLY) {
            self.text()
        } else {
            ""
        };
        list.split_whitespace()
            .map(strip_member_prefix)
            .filter(|nick| !nick.is_empty())
    }

    /// Body of a CTCP ACTION (`/me`) private message.
    pub fn action(&self) -> Option<&str> {
        if self.kind != CommandKind::PrivateMessage {
            return None;
        }
        ctcp::action_body(self.text())
    }
}

/// Remove the channel operator (`@`) or voice (`+`) marker from a nick.
pub fn strip_member_prefix(nick: &str) -> &str {
    nick.trim_start_matches(['@', '+'])
}

/// Split a line (leading colon already removed) into its space-delimited
/// head and the trailing free text.
fn split_trailing(body: &str) -> (&str, &str) {
    match body.find(" :") {
        Some(pos) => (&body[..pos], &body[pos + 2..]),
        None => (body, ""),
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_owned())
}

/// Parse one raw line into an [`Event`].
///
/// Never panics: short or malformed input yields a [`ParseError`] holding the
/// raw text, which the caller is expected to log and skip.
pub fn parse(raw: &str) -> Result<Event, ParseError> {
    let line = raw.trim_end().trim_end_matches(ctcp::CTCP_DELIM);

    let (has_prefix, body) = match line.strip_prefix(':') {
        Some(rest) => (true, rest),
        None => (false, line),
    };
    let (head, content) = split_trailing(body);
    let tokens: Vec<&str> = head.split_whitespace().collect();

    let Some(&first) = tokens.first() else {
        return Err(ParseError::new(raw, ParseFailure::Empty));
    };

    if !has_prefix && first == "PING" {
        let daemon = non_empty(content)
            .or_else(|| tokens.get(1).map(|t| t.to_string()))
            .ok_or_else(|| ParseError::new(raw, ParseFailure::MissingPingDaemon))?;
        let mut event = Event::bare(line, CommandKind::Ping);
        event.source = daemon;
        return Ok(event);
    }

    if tokens.len() < 2 {
        return Err(ParseError::new(raw, ParseFailure::TooFewTokens));
    }

    if !has_prefix {
        let mut event = Event::bare(line, CommandKind::Unrecognized);
        event.code = Some(first.to_owned());
        event.args = tokens[1..].iter().map(|t| t.to_string()).collect();
        event.text = non_empty(content);
        return Ok(event);
    }

    let command = tokens[1];

    if command == "PING" {
        let daemon = non_empty(content)
            .or_else(|| tokens.get(2).map(|t| t.to_string()))
            .ok_or_else(|| ParseError::new(raw, ParseFailure::MissingPingDaemon))?;
        let mut event = Event::bare(line, CommandKind::Ping);
        event.source = daemon;
        return Ok(event);
    }

    let prefix = Prefix::parse(first);
    let kind = CommandKind::from_keyword(command).unwrap_or(CommandKind::Numeric);

    let mut event = Event::bare(line, kind);
    event.source = prefix.name().to_owned();
    if let Prefix::Nickname(nick, user, host) = prefix {
        event.nick = nick;
        event.user = user;
        event.host = host;
    }

    let channel_token = || {
        tokens
            .get(2)
            .map(|t| t.to_string())
            .ok_or_else(|| ParseError::new(raw, ParseFailure::MissingChannel))
    };
    let rest = |from: usize| -> Vec<String> {
        tokens.iter().skip(from).map(|t| t.to_string()).collect()
    };

    match kind {
        CommandKind::Numeric => {
            event.code = Some(command.to_owned());
            event.args = rest(2);
            event.text = non_empty(content);
        }
        CommandKind::Join => {
            event.channel = Some(match non_empty(content) {
                Some(channel) => channel,
                None => channel_token()?,
            });
        }
        CommandKind::PrivateMessage | CommandKind::Mode | CommandKind::Notice => {
            event.channel = Some(channel_token()?);
            event.text = Some(content.to_owned());
            event.args = rest(3);
        }
        CommandKind::Part => {
            event.channel = Some(channel_token()?);
        }
        CommandKind::Quit => {
            event.text = Some(content.to_owned());
        }
        CommandKind::Ping | CommandKind::Unrecognized => {}
    }

    Ok(event)
}
