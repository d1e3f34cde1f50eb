//! Default value functions for configuration.
//!
//! Separated into its own module for clarity and reuse.

// =============================================================================
// Server Defaults
// =============================================================================

pub fn default_port() -> u16 {
    6667
}

// =============================================================================
// Identity Defaults
// =============================================================================

pub fn default_realname() -> String {
    "slircbot".to_string()
}

// =============================================================================
// Pacing Defaults
// =============================================================================

pub fn default_ms_per_char() -> u64 {
    40
}

pub fn default_max_delay_ms() -> u64 {
    4000
}

// =============================================================================
// Behavior Defaults
// =============================================================================

/// Five minutes, after which a sleeping bot wakes on the next message.
pub fn default_sleep_timeout_secs() -> u64 {
    300
}
