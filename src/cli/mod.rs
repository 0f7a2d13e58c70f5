//! CLI module for Floodguard
//!
//! Provides commands:
//! - `check`: Load, validate and print the effective configuration
//! - `simulate`: Drive a simulated session through the guards

use clap::{Parser, Subcommand};

pub mod check;
pub mod simulate;

pub use simulate::SimulateArgs;

/// Floodguard CLI
#[derive(Parser, Debug)]
#[command(name = "floodguard")]
#[command(about = "Flood protection for chat bots")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate and print the effective configuration
    Check,
    /// Fire a burst of events at the guards and print each verdict
    Simulate(SimulateArgs),
}

/// Run the CLI command
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Check) => check::run(),
        Some(Commands::Simulate(args)) => simulate::run(args).await,
        None => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            cmd.print_help()?;
            println!();
            Ok(())
        }
    }
}
