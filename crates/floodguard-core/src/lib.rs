//! Floodguard Core - Flood Protection for Chat Bots
//!
//! This crate guards a chat bot against flooding patterns:
//! - Echo: too many `echo` command invocations in one scope
//! - Send: too many outbound messages to one scope
//! - Receive: too many inbound messages from one scope
//!
//! Every scope (a guild/room, or a single user outside of guilds) gets its own
//! activity counter with a rolling 60 second window. When a counter reaches the
//! configured limit the matching guard trips: echo commands are suppressed,
//! outbound messages are dropped, and inbound floods take the bot offline and
//! schedule a full reload after a cooldown.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod gate;
pub mod guards;
pub mod plugin;
pub mod recovery;
pub mod registry;
pub mod scheduler;
pub mod session;
pub mod transport;

#[cfg(test)]
mod test_support;

pub use config::{GuardConfig, WINDOW};
pub use error::{Error, Result};
pub use gate::FloodGate;
pub use guards::{CommandVerdict, EchoGuard, EventFlow, ReceiveGuard, SendGuard, SendVerdict};
pub use plugin::FloodGuard;
pub use recovery::{RecoveryController, RecoveryState};
pub use registry::{ScopeRegistry, WindowCounter};
pub use scheduler::{Scheduler, Task, TimerHandle, TokioScheduler};
pub use session::{CommandDescriptor, Session, ECHO_COMMAND};
pub use transport::{Bot, Reloader, Stoppable, RELOAD_CODE};
