//! Session - host event descriptors
//!
//! The host hands every hook a session describing where the event happened.
//! Guards only read the identifiers needed to derive a scope key; message
//! content is never inspected.

use serde::{Deserialize, Serialize};

/// Name of the built-in command watched by the echo guard
pub const ECHO_COMMAND: &str = "echo";

/// Where a host event happened
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Platform name (e.g. "discord", "telegram")
    pub platform: String,
    /// Guild/room identifier, absent for direct messages
    pub guild_id: Option<String>,
    /// Channel identifier (if available)
    pub channel_id: Option<String>,
    /// User identifier, always present
    pub user_id: String,
}

impl Session {
    /// Create a direct-message session for a user
    #[must_use]
    pub fn new(platform: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            guild_id: None,
            channel_id: None,
            user_id: user_id.into(),
        }
    }

    /// Set the guild ID
    #[must_use]
    pub fn with_guild(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = Some(guild_id.into());
        self
    }

    /// Set the channel ID
    #[must_use]
    pub fn with_channel(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = Some(channel_id.into());
        self
    }

    /// Rate-limiting scope: the guild if there is one, otherwise the user
    #[must_use]
    pub fn scope_key(&self) -> &str {
        match self.guild_id.as_deref() {
            Some(guild) if !guild.is_empty() => guild,
            _ => &self.user_id,
        }
    }
}

/// A command about to be executed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDescriptor {
    /// Command name without prefix
    pub name: String,
}

impl CommandDescriptor {
    /// Describe a command by name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Whether this is the built-in `echo` command
    #[must_use]
    pub fn is_echo(&self) -> bool {
        self.name == ECHO_COMMAND
    }
}
