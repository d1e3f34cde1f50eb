//! Outgoing commands.
//!
//! The agent only ever sends a small set of client commands. [`Command`]
//! renders each to its wire form (without the trailing CRLF, which the
//! codec adds).

use std::fmt;

/// A client-to-server command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `PASS <password>`
    Pass(String),
    /// `NICK <nick>`
    Nick(String),
    /// `USER <username> * * :<realname>`
    User(String, String),
    /// `JOIN <channel>`
    Join(String),
    /// `NAMES <channel>`
    Names(String),
    /// `PONG <daemon>`
    Pong(String),
    /// `PRIVMSG <target> :<text>`
    Privmsg(String, String),
    /// `QUIT [:<reason>]`
    Quit(Option<String>),
}

impl Command {
    /// Build a PRIVMSG.
    pub fn privmsg(target: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Privmsg(target.into(), text.into())
    }

    /// Build a PONG answering the given daemon.
    pub fn pong(daemon: impl Into<String>) -> Self {
        Self::Pong(daemon.into())
    }

    /// Build a JOIN.
    pub fn join(channel: impl Into<String>) -> Self {
        Self::Join(channel.into())
    }

    /// Build a NAMES request.
    pub fn names(channel: impl Into<String>) -> Self {
        Self::Names(channel.into())
    }

    /// The registration burst, in the order servers expect it. PASS is
    /// omitted when no password is configured.
    pub fn registration(
        password: Option<&str>,
        nick: &str,
        username: &str,
        realname: &str,
    ) -> Vec<Self> {
        let mut burst = Vec::with_capacity(3);
        if let Some(pass) = password {
            burst.push(Self::Pass(pass.to_owned()));
        }
        burst.push(Self::Nick(nick.to_owned()));
        burst.push(Self::User(username.to_owned(), realname.to_owned()));
        burst
    }

    /// Command word.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pass(_) => "PASS",
            Self::Nick(_) => "NICK",
            Self::User(..) => "USER",
            Self::Join(_) => "JOIN",
            Self::Names(_) => "NAMES",
            Self::Pong(_) => "PONG",
            Self::Privmsg(..) => "PRIVMSG",
            Self::Quit(_) => "QUIT",
        }
    }

    /// Text of a PRIVMSG, used for typing-delay pacing.
    pub fn chat_text(&self) -> Option<&str> {
        match self {
            Self::Privmsg(_, text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass(pass) => write!(f, "PASS {pass}"),
            Self::Nick(nick) => write!(f, "NICK {nick}"),
            Self::User(user, real) => write!(f, "USER {user} * * :{real}"),
            Self::Join(channel) => write!(f, "JOIN {channel}"),
            Self::Names(channel) => write!(f, "NAMES {channel}"),
            Self::Pong(daemon) => write!(f, "PONG {daemon}"),
            Self::Privmsg(target, text) => write!(f, "PRIVMSG {target} :{text}"),
            Self::Quit(Some(reason)) => write!(f, "QUIT :{reason}"),
            Self::Quit(None) => f.write_str("QUIT"),
        }
    }
}
