//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Config struct definitions (Config, ServerConfig, BotConfig, ...)
//! - [`defaults`]: serde default value functions
//! - [`validation`]: startup sanity checks

mod defaults;
mod types;
mod validation;

pub use types::{Config, PacingConfig};
pub use validation::validate;
