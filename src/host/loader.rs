//! Configuration loading
//!
//! Handles loading configuration from embedded defaults, files, and environment.

use super::config::AppConfig;
use anyhow::{Context, Result};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};

/// Embedded default configuration (compiled into binary)
pub const DEFAULT_CONFIG: &str = include_str!("../../config/default.toml");

/// Layered sources, lowest priority first
fn sources() -> ConfigBuilder<DefaultState> {
    Config::builder()
        // 1. Embedded defaults (always available)
        .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
        // 2. External overrides (optional)
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name("config/local").required(false))
        // 3. Environment variables, e.g. FLOODGUARD_GUARD__LIMIT=20
        .add_source(
            Environment::with_prefix("FLOODGUARD")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
}

fn deserialize(builder: ConfigBuilder<DefaultState>) -> Result<AppConfig> {
    builder
        .build()
        .context("Failed to build configuration")?
        .try_deserialize()
        .context("Failed to deserialize configuration")
}

/// Load configuration from files and environment
pub fn load_config() -> Result<AppConfig> {
    deserialize(sources())
}
