//! Configuration validation.
//!
//! Catches configurations the server would reject before a connection is
//! ever opened.

use super::Config;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("server.host is required")]
    MissingHost,
    #[error("server.port must be non-zero")]
    ZeroPort,
    #[error("bot.nick is not a valid IRC nickname: '{0}'")]
    InvalidNick(String),
    #[error("bot.username must not be empty")]
    EmptyUsername,
    #[error("bot.channel must start with '#' or '&' and contain no spaces or commas, got '{0}'")]
    InvalidChannel(String),
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.host.trim().is_empty() {
        errors.push(ValidationError::MissingHost);
    }
    if config.server.port == 0 {
        errors.push(ValidationError::ZeroPort);
    }

    if !is_valid_nick(&config.bot.nick) {
        errors.push(ValidationError::InvalidNick(config.bot.nick.clone()));
    }
    if config.bot.username().trim().is_empty() {
        errors.push(ValidationError::EmptyUsername);
    }
    if !is_valid_channel(&config.bot.channel) {
        errors.push(ValidationError::InvalidChannel(config.bot.channel.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_special(c: char) -> bool {
    matches!(c, '[' | ']' | '\\' | '`' | '_' | '^' | '{' | '|' | '}')
}

/// RFC 2812 nickname: letter or special first, then letters, digits,
/// specials or '-'.
fn is_valid_nick(nick: &str) -> bool {
    let mut chars = nick.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || is_special(first) => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || is_special(c) || c == '-')
}

fn is_valid_channel(channel: &str) -> bool {
    channel.len() > 1
        && (channel.starts_with('#') || channel.starts_with('&'))
        && !channel.contains([' ', ',', '\x07'])
}
