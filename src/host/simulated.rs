//! Simulated transport for the `simulate` command

use async_trait::async_trait;
use floodguard_core::{Bot, Error, Reloader, Result, Stoppable};
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

/// Adapter half of the simulated connection
#[derive(Debug, Default)]
pub struct SimulatedAdapter {
    running: AtomicBool,
}

#[async_trait]
impl Stoppable for SimulatedAdapter {
    async fn stop(&self) -> Result<()> {
        if self.running.swap(false, Ordering::SeqCst) {
            info!("Simulated adapter stopped");
        }
        Ok(())
    }
}

/// A bot that only logs transport operations
#[derive(Debug)]
pub struct SimulatedBot {
    platform: String,
    online: AtomicBool,
    adapter: Arc<SimulatedAdapter>,
}

impl SimulatedBot {
    pub fn new(platform: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            online: AtomicBool::new(true),
            adapter: Arc::new(SimulatedAdapter {
                running: AtomicBool::new(true),
            }),
        }
    }

    pub fn is_online(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Bot for SimulatedBot {
    fn platform(&self) -> &str {
        &self.platform
    }

    async fn stop(&self) -> Result<()> {
        info!(platform = %self.platform, "Simulated bot stopped");
        Ok(())
    }

    fn offline(&self, reason: Error) {
        self.online.store(false, Ordering::SeqCst);
        warn!(platform = %self.platform, reason = %reason, "Simulated bot offline");
    }

    fn adapter(&self) -> Option<Arc<dyn Stoppable>> {
        Some(self.adapter.clone())
    }
}

/// Logs reload requests instead of restarting anything
#[derive(Debug, Default)]
pub struct LoggingReloader {
    reloads: AtomicU32,
}

#[async_trait]
impl Reloader for LoggingReloader {
    async fn full_reload(&self, code: u32) -> Result<()> {
        let n = self.reloads.fetch_add(1, Ordering::SeqCst) + 1;
        info!(code, reloads = n, "Full reload requested");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_simulated_bot_goes_offline() {
        let bot = SimulatedBot::new("simulated");
        assert!(bot.is_online());

        bot.stop().await.unwrap();
        bot.offline(Error::UnderAttack);
        assert!(!bot.is_online());

        let adapter = bot.adapter().unwrap();
        adapter.stop().await.unwrap();
        adapter.stop().await.unwrap();
    }
}
