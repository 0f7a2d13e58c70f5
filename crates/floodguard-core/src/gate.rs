//! Flood gate
//!
//! The single decision point shared by all guards: record one unit of
//! activity for a scope and report whether the scope has reached the limit.
//!
//! The window is reset-on-activity rather than a strict sliding window:
//! every event pushes the scope's reset another full window into the future,
//! so the count approximates "events during the current burst".

use crate::registry::ScopeRegistry;
use crate::scheduler::Scheduler;
use std::sync::Arc;
use std::time::Duration;
use tracing::trace;

/// Per-scope flood detector
#[derive(Debug)]
pub struct FloodGate {
    registry: ScopeRegistry,
    limit: u32,
}

impl FloodGate {
    /// Create a gate with the standard 60 second window
    #[must_use]
    pub fn new(scheduler: Arc<dyn Scheduler>, limit: u32) -> Self {
        Self {
            registry: ScopeRegistry::new(scheduler),
            limit,
        }
    }

    /// Create a gate with a custom idle window
    #[must_use]
    pub fn with_window(scheduler: Arc<dyn Scheduler>, limit: u32, window: Duration) -> Self {
        Self {
            registry: ScopeRegistry::with_window(scheduler, window),
            limit,
        }
    }

    /// Trip threshold
    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Underlying counters
    #[must_use]
    pub fn registry(&self) -> &ScopeRegistry {
        &self.registry
    }

    /// Record one event for `key`; returns `true` once the count reaches the limit.
    pub fn record_activity(&self, key: &str) -> bool {
        let mut counter = self.registry.get_or_create(key);
        counter.disarm();
        let count = counter.increment();
        self.registry.arm_reset(key, &mut counter);

        let tripped = count >= self.limit;
        trace!(scope = %key, count, limit = self.limit, tripped, "Recorded activity");
        tripped
    }

    /// Current count for `key`
    #[must_use]
    pub fn count(&self, key: &str) -> u32 {
        self.registry.count(key)
    }

    /// Cancel all pending resets and forget every scope
    pub fn clear(&self) {
        self.registry.clear();
    }
}

#[cfg(test)]
mod tests;
