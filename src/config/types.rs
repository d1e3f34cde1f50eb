//! Core configuration types and loading.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use super::defaults::{
    default_max_delay_ms, default_ms_per_char, default_port, default_realname,
    default_sleep_timeout_secs,
};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Bot configuration. Supplied once at startup and immutable afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Where to connect.
    pub server: ServerConfig,
    /// Who to be and where to sit.
    pub bot: BotConfig,
    /// Typing-speed emulation for replies.
    #[serde(default)]
    pub pacing: PacingConfig,
    /// Tunables for the channel behaviors.
    #[serde(default)]
    pub behavior: BehaviorConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// IRC server to connect to.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Hostname or address (e.g., "irc.libera.chat").
    pub host: String,
    /// Port (default: 6667).
    #[serde(default = "default_port")]
    pub port: u16,
    /// Server password sent with PASS (optional).
    pub password: Option<String>,
}

/// Bot identity and home channel.
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Nickname.
    pub nick: String,
    /// Username (ident). Defaults to the nick.
    pub username: Option<String>,
    /// Realname / gecos (default: "slircbot").
    #[serde(default = "default_realname")]
    pub realname: String,
    /// Channel joined once registration completes.
    pub channel: String,
}

impl BotConfig {
    /// Username to register with.
    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or(&self.nick)
    }
}

/// Reply pacing.
///
/// Every PRIVMSG is held back for `ms_per_char` per character of text,
/// capped at `max_delay_ms`. Set `ms_per_char = 0` to disable.
#[derive(Debug, Clone, Deserialize)]
pub struct PacingConfig {
    #[serde(default = "default_ms_per_char")]
    pub ms_per_char: u64,
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            ms_per_char: default_ms_per_char(),
            max_delay_ms: default_max_delay_ms(),
        }
    }
}

impl PacingConfig {
    /// How long to "type" a reply of the given text.
    pub fn typing_delay(&self, text: &str) -> Duration {
        let chars = text.chars().count() as u64;
        Duration::from_millis(chars.saturating_mul(self.ms_per_char).min(self.max_delay_ms))
    }
}

/// Channel behavior tunables.
#[derive(Debug, Clone, Deserialize)]
pub struct BehaviorConfig {
    /// Seconds after which a sleeping bot wakes up on its own (default: 300).
    #[serde(default = "default_sleep_timeout_secs")]
    pub sleep_timeout_secs: u64,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            sleep_timeout_secs: default_sleep_timeout_secs(),
        }
    }
}

impl BehaviorConfig {
    pub fn sleep_timeout(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.sleep_timeout_secs as i64)
    }
}
