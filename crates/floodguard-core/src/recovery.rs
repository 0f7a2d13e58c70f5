//! Recovery controller
//!
//! Driven by the receive guard when a scope floods the bot with inbound
//! messages. The controller has three states:
//! - Online: normal operation, a trip starts a recovery cycle
//! - Disconnecting: the transport and its adapter are being stopped
//! - OfflineCooldown: the bot is offline, a full host reload is scheduled
//!
//! Trips that arrive while a cycle is in progress are ignored. The reload is
//! one-shot: when the cooldown elapses the host is reloaded and the
//! controller returns to Online.

use crate::error::{Error, Result};
use crate::scheduler::{Scheduler, Task, TimerHandle};
use crate::transport::{Bot, Reloader, RELOAD_CODE};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Recovery cycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryState {
    /// Bot is connected
    Online,
    /// Stop sequence in progress
    Disconnecting,
    /// Bot is offline, waiting for the scheduled reload
    OfflineCooldown,
}

impl std::fmt::Display for RecoveryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Online => write!(f, "Online"),
            Self::Disconnecting => write!(f, "Disconnecting"),
            Self::OfflineCooldown => write!(f, "OfflineCooldown"),
        }
    }
}

/// Takes a flooded bot offline and brings the host back after a cooldown
pub struct RecoveryController {
    state: Arc<Mutex<RecoveryState>>,
    pending_reload: Mutex<Option<TimerHandle>>,
    scheduler: Arc<dyn Scheduler>,
    reloader: Arc<dyn Reloader>,
    cooldown: Duration,
}

impl RecoveryController {
    /// Create a controller that reloads the host `cooldown` after a disconnect
    #[must_use]
    pub fn new(
        scheduler: Arc<dyn Scheduler>,
        reloader: Arc<dyn Reloader>,
        cooldown: Duration,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(RecoveryState::Online)),
            pending_reload: Mutex::new(None),
            scheduler,
            reloader,
            cooldown,
        }
    }

    /// Get the current state
    #[must_use]
    pub fn state(&self) -> RecoveryState {
        *lock(&self.state)
    }

    /// Delay between disconnect and reload
    #[must_use]
    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Whether a reload is scheduled and has neither fired nor been cancelled
    #[must_use]
    pub fn has_pending_reload(&self) -> bool {
        self.state() == RecoveryState::OfflineCooldown
            && lock(&self.pending_reload)
                .as_ref()
                .is_some_and(|timer| !timer.is_cancelled())
    }

    /// Start a recovery cycle for `bot`.
    ///
    /// Returns `Ok(false)` if a cycle is already in progress. A failing stop
    /// returns the controller to Online and propagates the error.
    pub async fn trigger(&self, bot: &dyn Bot) -> Result<bool> {
        {
            let mut state = lock(&self.state);
            let current = *state;
            if current != RecoveryState::Online {
                warn!(
                    platform = bot.platform(),
                    state = %current,
                    "Recovery already in progress, ignoring trip"
                );
                return Ok(false);
            }
            *state = RecoveryState::Disconnecting;
        }

        if let Err(e) = disconnect(bot).await {
            *lock(&self.state) = RecoveryState::Online;
            return Err(e);
        }

        bot.offline(Error::UnderAttack);
        error!(
            platform = bot.platform(),
            cooldown_secs = self.cooldown.as_secs(),
            "Bot may be under a message flood, taken offline temporarily"
        );

        *lock(&self.state) = RecoveryState::OfflineCooldown;

        let task = reload_task(self.state.clone(), self.reloader.clone());
        let timer = self.scheduler.schedule(self.cooldown, task);
        if let Some(previous) = lock(&self.pending_reload).replace(timer) {
            previous.cancel();
        }

        Ok(true)
    }

    /// Cancel a scheduled reload, if any.
    ///
    /// A controller waiting out its cooldown goes back to Online so later
    /// trips start a fresh cycle.
    pub fn cancel_pending(&self) {
        if let Some(timer) = lock(&self.pending_reload).take() {
            debug!("Cancelling scheduled reload");
            timer.cancel();
        }
        let mut state = lock(&self.state);
        if *state == RecoveryState::OfflineCooldown {
            *state = RecoveryState::Online;
        }
    }
}

impl Drop for RecoveryController {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

impl std::fmt::Debug for RecoveryController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecoveryController")
            .field("state", &self.state())
            .field("cooldown", &self.cooldown)
            .finish()
    }
}

/// Stop the bot, then its adapter when it exposes a separate stop
async fn disconnect(bot: &dyn Bot) -> Result<()> {
    let adapter = bot.adapter();
    bot.stop().await?;
    if let Some(adapter) = adapter {
        adapter.stop().await?;
    }
    Ok(())
}

fn reload_task(state: Arc<Mutex<RecoveryState>>, reloader: Arc<dyn Reloader>) -> Task {
    Box::pin(async move {
        info!("Bringing bot back online, reloading host");
        if let Err(e) = reloader.full_reload(RELOAD_CODE).await {
            error!(error = %e, "Host reload failed");
        }
        *lock(&state) = RecoveryState::Online;
    })
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
