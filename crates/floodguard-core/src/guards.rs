//! Guard hooks
//!
//! Three independent gatekeepers, one per host event:
//! - [`EchoGuard`]: before a command executes, suppresses flooded `echo` calls
//! - [`SendGuard`]: before a message is sent, drops outbound floods
//! - [`ReceiveGuard`]: on every inbound message, takes the bot offline on floods
//!
//! All three share one [`FloodGate`], so every kind of activity counts
//! toward the same per-scope window. A disabled guard is a no-op and never
//! touches the gate.

use crate::error::Result;
use crate::gate::FloodGate;
use crate::recovery::RecoveryController;
use crate::session::{CommandDescriptor, Session};
use crate::transport::Bot;
use std::sync::Arc;
use tracing::debug;

/// Outcome of the before-command hook
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandVerdict {
    /// Let the command run
    Proceed,
    /// Skip execution and answer with this output instead
    Cancel(String),
}

impl CommandVerdict {
    /// Cancelled with an empty result
    #[must_use]
    pub fn suppressed() -> Self {
        Self::Cancel(String::new())
    }

    /// Whether the command was cancelled
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancel(_))
    }
}

/// Outcome of the before-send hook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendVerdict {
    /// Send the message
    Allow,
    /// Drop the message
    Deny,
}

impl SendVerdict {
    /// Whether the message may be sent
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Outcome of the message-received hook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventFlow {
    /// Hand the event to the next listener
    Continue,
    /// Event handled, do not propagate
    Stop,
}

/// Suppresses `echo` command floods
#[derive(Debug, Clone)]
pub struct EchoGuard {
    gate: Arc<FloodGate>,
    enabled: bool,
}

impl EchoGuard {
    /// Create an echo guard over `gate`
    #[must_use]
    pub fn new(gate: Arc<FloodGate>, enabled: bool) -> Self {
        Self { gate, enabled }
    }

    /// Whether echo protection is on
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Before-command hook
    pub fn before_command(&self, command: &CommandDescriptor, session: &Session) -> CommandVerdict {
        if !command.is_echo() || !self.enabled {
            return CommandVerdict::Proceed;
        }

        let key = session.scope_key();
        if self.gate.record_activity(key) {
            debug!(
                scope = %key,
                platform = %session.platform,
                "Bot may be under an echo flood, suppressing command"
            );
            return CommandVerdict::suppressed();
        }

        CommandVerdict::Proceed
    }
}

/// Drops outbound message floods
#[derive(Debug, Clone)]
pub struct SendGuard {
    gate: Arc<FloodGate>,
    enabled: bool,
}

impl SendGuard {
    /// Create a send guard over `gate`
    #[must_use]
    pub fn new(gate: Arc<FloodGate>, enabled: bool) -> Self {
        Self { gate, enabled }
    }

    /// Whether send protection is on
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Before-send hook
    pub fn before_send(&self, session: &Session) -> SendVerdict {
        if !self.enabled {
            return SendVerdict::Allow;
        }

        if self.gate.record_activity(session.scope_key()) {
            return SendVerdict::Deny;
        }

        SendVerdict::Allow
    }
}

/// Disconnects the bot on inbound floods
#[derive(Debug, Clone)]
pub struct ReceiveGuard {
    gate: Arc<FloodGate>,
    recovery: Arc<RecoveryController>,
    enabled: bool,
}

impl ReceiveGuard {
    /// Create a receive guard over `gate`, recovering through `recovery`
    #[must_use]
    pub fn new(gate: Arc<FloodGate>, recovery: Arc<RecoveryController>, enabled: bool) -> Self {
        Self {
            gate,
            recovery,
            enabled,
        }
    }

    /// Whether receive protection is on
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Message-received hook.
    ///
    /// On a trip the bot is taken offline and the event is swallowed. Errors
    /// from stopping the transport are returned unchanged.
    pub async fn on_message(&self, session: &Session, bot: &dyn Bot) -> Result<EventFlow> {
        if !self.enabled {
            return Ok(EventFlow::Continue);
        }

        if self.gate.record_activity(session.scope_key()) {
            self.recovery.trigger(bot).await?;
            return Ok(EventFlow::Stop);
        }

        Ok(EventFlow::Continue)
    }
}
