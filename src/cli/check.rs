//! `floodguard check`

use crate::host::load_config;
use anyhow::{Context, Result};

/// Load and validate configuration, then print it as TOML
pub fn run() -> Result<()> {
    let config = load_config()?;
    config
        .guard
        .validate()
        .context("Invalid guard configuration")?;

    let rendered = toml::to_string_pretty(&config).context("Failed to serialize config")?;
    println!("{}", rendered);
    println!("Configuration OK");
    Ok(())
}
