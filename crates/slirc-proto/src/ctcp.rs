//! CTCP (Client-to-Client Protocol) helpers.
//!
//! CTCP requests ride inside PRIVMSG text, delimited by `\x01`. The parser
//! strips the trailing delimiter, so an action arrives as
//! `"\x01ACTION waves"`.
//!
//! # Reference
//! - CTCP specification: <https://modern.ircdocs.horse/ctcp.html>

/// The CTCP delimiter character (`\x01`).
pub const CTCP_DELIM: char = '\x01';

/// Marker that opens a `/me` action once the trailing delimiter is gone.
pub const ACTION_MARKER: &str = "\x01ACTION";

/// Return the body of an action, e.g. `"kicks bob"` for
/// `"\x01ACTION kicks bob"`. Returns `None` for ordinary text.
pub fn action_body(text: &str) -> Option<&str> {
    let rest = text.strip_prefix(ACTION_MARKER)?;
    let rest = rest.trim_end_matches(CTCP_DELIM);
    if rest.is_empty() {
        return Some("");
    }
    rest.strip_prefix(' ')
}
