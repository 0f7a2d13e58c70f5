//! Guard configuration
//!
//! One `GuardConfig` is fixed for the lifetime of a plugin activation.
//! Field names are snake_case; the camelCase names used by host config
//! schemas (`restartTime`, `echoProtect`, ...) are accepted as aliases, as are
//! their lowercased forms produced by case-folding config loaders.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Idle period after which a scope's activity window resets
pub const WINDOW: Duration = Duration::from_secs(60);

/// Flood protection settings (deserializable from TOML)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Activity count within one window that trips protection
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Minutes to wait after a receive flood before reloading the host (min 1)
    #[serde(default = "default_restart_time", alias = "restartTime", alias = "restarttime")]
    pub restart_time: u64,
    /// Suppress `echo` command floods
    #[serde(default = "default_true", alias = "echoProtect", alias = "echoprotect")]
    pub echo_protect: bool,
    /// Disconnect on inbound floods (not recommended for busy bots)
    #[serde(default, alias = "receiveMessageProtect", alias = "receivemessageprotect")]
    pub receive_message_protect: bool,
    /// Drop outbound messages while a scope is flooded
    #[serde(default = "default_true", alias = "sendMessageProtect", alias = "sendmessageprotect")]
    pub send_message_protect: bool,
}

fn default_limit() -> u32 {
    50
}
fn default_restart_time() -> u64 {
    3
}
fn default_true() -> bool {
    true
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            restart_time: default_restart_time(),
            echo_protect: true,
            receive_message_protect: false,
            send_message_protect: true,
        }
    }
}

impl GuardConfig {
    /// Create the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the trip threshold
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Set the reload cooldown in minutes
    #[must_use]
    pub fn with_restart_time(mut self, minutes: u64) -> Self {
        self.restart_time = minutes;
        self
    }

    /// Enable or disable the echo guard
    #[must_use]
    pub fn with_echo_protect(mut self, enabled: bool) -> Self {
        self.echo_protect = enabled;
        self
    }

    /// Enable or disable the send guard
    #[must_use]
    pub fn with_send_protect(mut self, enabled: bool) -> Self {
        self.send_message_protect = enabled;
        self
    }

    /// Enable or disable the receive guard
    #[must_use]
    pub fn with_receive_protect(mut self, enabled: bool) -> Self {
        self.receive_message_protect = enabled;
        self
    }

    /// Cooldown between a receive-flood disconnect and the host reload
    #[must_use]
    pub fn restart_duration(&self) -> Duration {
        Duration::from_secs(self.restart_time.saturating_mul(60))
    }

    /// Reject out-of-range values
    pub fn validate(&self) -> Result<()> {
        if self.restart_time < 1 {
            return Err(Error::invalid_config(
                "restart_time",
                format!("must be at least 1 minute, got {}", self.restart_time),
            ));
        }
        Ok(())
    }
}
