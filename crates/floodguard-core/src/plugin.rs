//! Plugin activation
//!
//! A [`FloodGuard`] is one activation of the protection plugin: it owns the
//! scope counters, the three guards and the recovery controller. Dropping it
//! or calling [`FloodGuard::deactivate`] cancels every pending timer.
//!
//! ## Usage
//!
//! ```ignore
//! let scheduler = Arc::new(TokioScheduler::current()?);
//! let guard = FloodGuard::activate(config, scheduler, reloader)?;
//!
//! // Wire into the host's hooks
//! let verdict = guard.before_command(&command, &session);
//! let verdict = guard.before_send(&session);
//! let flow = guard.on_message(&session, bot.as_ref()).await?;
//!
//! guard.deactivate();
//! ```

use crate::config::GuardConfig;
use crate::error::Result;
use crate::gate::FloodGate;
use crate::guards::{CommandVerdict, EchoGuard, EventFlow, ReceiveGuard, SendGuard, SendVerdict};
use crate::recovery::RecoveryController;
use crate::scheduler::Scheduler;
use crate::session::{CommandDescriptor, Session};
use crate::transport::{Bot, Reloader};
use std::sync::Arc;
use tracing::info;

/// One activation of the flood protection plugin
#[derive(Debug)]
pub struct FloodGuard {
    config: GuardConfig,
    gate: Arc<FloodGate>,
    recovery: Arc<RecoveryController>,
    echo: EchoGuard,
    send: SendGuard,
    receive: ReceiveGuard,
}

impl FloodGuard {
    /// Validate `config` and build a fresh activation
    pub fn activate(
        config: GuardConfig,
        scheduler: Arc<dyn Scheduler>,
        reloader: Arc<dyn Reloader>,
    ) -> Result<Self> {
        config.validate()?;

        let gate = Arc::new(FloodGate::new(scheduler.clone(), config.limit));
        let recovery = Arc::new(RecoveryController::new(
            scheduler,
            reloader,
            config.restart_duration(),
        ));

        let echo = EchoGuard::new(gate.clone(), config.echo_protect);
        let send = SendGuard::new(gate.clone(), config.send_message_protect);
        let receive = ReceiveGuard::new(
            gate.clone(),
            recovery.clone(),
            config.receive_message_protect,
        );

        info!(
            limit = config.limit,
            restart_time = config.restart_time,
            echo = config.echo_protect,
            send = config.send_message_protect,
            receive = config.receive_message_protect,
            "Flood guard activated"
        );

        Ok(Self {
            config,
            gate,
            recovery,
            echo,
            send,
            receive,
        })
    }

    /// Configuration this activation was built with
    #[must_use]
    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Shared flood gate
    #[must_use]
    pub fn gate(&self) -> &FloodGate {
        &self.gate
    }

    /// Recovery controller driven by the receive guard
    #[must_use]
    pub fn recovery(&self) -> &RecoveryController {
        &self.recovery
    }

    /// Host hook: before a command executes
    pub fn before_command(&self, command: &CommandDescriptor, session: &Session) -> CommandVerdict {
        self.echo.before_command(command, session)
    }

    /// Host hook: before a message is sent
    pub fn before_send(&self, session: &Session) -> SendVerdict {
        self.send.before_send(session)
    }

    /// Host hook: a message was received
    pub async fn on_message(&self, session: &Session, bot: &dyn Bot) -> Result<EventFlow> {
        self.receive.on_message(session, bot).await
    }

    /// Cancel all window resets and any scheduled reload, forgetting every scope
    pub fn deactivate(&self) {
        self.gate.clear();
        self.recovery.cancel_pending();
        info!("Flood guard deactivated");
    }
}
