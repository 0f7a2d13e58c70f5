//! `floodguard simulate`
//!
//! Activates a guard with a simulated bot and fires a burst of one kind of
//! event from a single scope.

use crate::host::{load_config, LoggingReloader, SimulatedBot};
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use floodguard_core::{CommandDescriptor, FloodGuard, Session, TokioScheduler};
use std::sync::Arc;
use tracing::info;

/// Host event to simulate
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EventKind {
    /// Command invocations
    Echo,
    /// Outbound messages
    Send,
    /// Inbound messages
    Receive,
}

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Kind of event to fire
    #[arg(long, value_enum)]
    pub kind: EventKind,
    /// Number of events
    #[arg(long, default_value_t = 10)]
    pub count: u32,
    /// Guild/room the events come from (omit for a direct-message scope)
    #[arg(long)]
    pub guild: Option<String>,
    /// User the events come from
    #[arg(long, default_value = "user-1")]
    pub user: String,
    /// Command name for echo events
    #[arg(long, default_value = floodguard_core::ECHO_COMMAND)]
    pub command: String,
    /// Override the configured limit
    #[arg(long)]
    pub limit: Option<u32>,
    /// Force-enable the guard for the chosen kind
    #[arg(long)]
    pub force: bool,
}

pub async fn run(args: SimulateArgs) -> Result<()> {
    let mut config = load_config()?.guard;
    if let Some(limit) = args.limit {
        config.limit = limit;
    }
    if args.force {
        match args.kind {
            EventKind::Echo => config.echo_protect = true,
            EventKind::Send => config.send_message_protect = true,
            EventKind::Receive => config.receive_message_protect = true,
        }
    }

    let scheduler = Arc::new(TokioScheduler::current()?);
    let reloader = Arc::new(LoggingReloader::default());
    let guard = FloodGuard::activate(config, scheduler, reloader)
        .context("Failed to activate flood guard")?;

    let bot = SimulatedBot::new("simulated");
    let mut session = Session::new("simulated", &args.user);
    if let Some(guild) = &args.guild {
        session = session.with_guild(guild);
    }
    let command = CommandDescriptor::new(&args.command);

    info!(kind = ?args.kind, count = args.count, scope = %session.scope_key(), "Simulating burst");

    for n in 1..=args.count {
        let verdict = match args.kind {
            EventKind::Echo => format!("{:?}", guard.before_command(&command, &session)),
            EventKind::Send => format!("{:?}", guard.before_send(&session)),
            EventKind::Receive => format!("{:?}", guard.on_message(&session, &bot).await?),
        };
        println!(
            "#{:<4} count={:<4} {}",
            n,
            guard.gate().count(session.scope_key()),
            verdict
        );
    }

    println!(
        "recovery={} bot_online={}",
        guard.recovery().state(),
        bot.is_online()
    );

    guard.deactivate();
    Ok(())
}
