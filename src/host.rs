//! Host harness
//!
//! Stands in for the bot runtime: configuration loading plus a simulated
//! transport that logs what the guards ask of it.

mod config;
mod loader;
mod simulated;

pub use loader::load_config;
pub use simulated::{LoggingReloader, SimulatedBot};
