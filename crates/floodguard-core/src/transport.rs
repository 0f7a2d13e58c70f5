//! Host transport capabilities
//!
//! The recovery path needs three things from the host: a way to stop the
//! bot's connection, a way to mark it offline with a reason, and a way to
//! reload the whole host once the cooldown has passed. Adapters that expose
//! their own lower-level stop implement [`Stoppable`] and are handed out
//! through [`Bot::adapter`].

use crate::error::{Error, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Identifier passed to the host when requesting a full reload
pub const RELOAD_CODE: u32 = 52;

/// Optional stop capability of a transport adapter
#[async_trait]
pub trait Stoppable: Send + Sync {
    /// Stop the adapter. Must tolerate being called on an already stopped adapter.
    async fn stop(&self) -> Result<()>;
}

/// A running bot connection
#[async_trait]
pub trait Bot: Send + Sync {
    /// Platform name, used in diagnostics
    fn platform(&self) -> &str;

    /// Stop the bot's transport connection
    async fn stop(&self) -> Result<()>;

    /// Mark the bot offline, recording why
    fn offline(&self, reason: Error);

    /// The bot's adapter, if it can be stopped separately
    fn adapter(&self) -> Option<Arc<dyn Stoppable>> {
        None
    }
}

/// Full reload of the host application
#[async_trait]
pub trait Reloader: Send + Sync {
    /// Restart every module of the host, reconnecting transports as a side effect
    async fn full_reload(&self, code: u32) -> Result<()>;
}
