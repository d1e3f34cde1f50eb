//! Message prefix decomposition.
//!
//! A prefix identifies where a line came from. Anything containing `!` is a
//! user mask (`nick!~user@host`); everything else is treated as a bare
//! server or source name.

/// Origin of an incoming line.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub enum Prefix {
    /// Server (or bare source) name, e.g. `irc.example.net`.
    ServerName(String),
    /// User prefix: (nickname, username, hostname).
    Nickname(String, String, String),
}

impl Prefix {
    /// Decompose a prefix token. A leading `:` is ignored, as is the `~`
    /// some servers put in front of unverified idents.
    pub fn parse(s: &str) -> Self {
        let s = s.strip_prefix(':').unwrap_or(s);

        let Some((nick, rest)) = s.split_once('!') else {
            return Prefix::ServerName(s.to_owned());
        };

        let (user, host) = rest.split_once('@').unwrap_or((rest, ""));
        let user = user.strip_prefix('~').unwrap_or(user);

        Prefix::Nickname(nick.to_owned(), user.to_owned(), host.to_owned())
    }

    /// The name that best identifies the source: the nick for users, the
    /// server name otherwise.
    pub fn name(&self) -> &str {
        match self {
            Prefix::ServerName(name) => name,
            Prefix::Nickname(nick, _, _) => nick,
        }
    }
}
