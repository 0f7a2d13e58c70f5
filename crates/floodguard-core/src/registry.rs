//! Scope registry
//!
//! Maps a scope key to its [`WindowCounter`]. Counters are created lazily on
//! first activity and live as long as the registry; a reset only zeroes the
//! count, the entry itself is kept for reuse.

use crate::config::WINDOW;
use crate::scheduler::{Scheduler, Task, TimerHandle};
use dashmap::mapref::one::RefMut;
use dashmap::DashMap;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tracing::debug;

type Counters = DashMap<String, WindowCounter>;

/// Activity tally for one scope
#[derive(Debug, Default)]
pub struct WindowCounter {
    count: u32,
    timer: Option<TimerHandle>,
    /// Bumped on every re-arm so a stale reset cannot clear a newer window
    epoch: u64,
}

impl WindowCounter {
    /// Events observed since the window last reset
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Whether a reset timer is currently armed
    #[must_use]
    pub fn has_timer(&self) -> bool {
        self.timer.is_some()
    }

    /// Increment the tally, returning the new count
    pub fn increment(&mut self) -> u32 {
        self.count = self.count.saturating_add(1);
        self.count
    }

    /// Cancel the pending reset timer, if any
    pub fn disarm(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
    }

    fn reset(&mut self) {
        self.count = 0;
        self.timer = None;
    }
}

/// Owner of every scope's window counter
pub struct ScopeRegistry {
    counters: Arc<Counters>,
    scheduler: Arc<dyn Scheduler>,
    window: Duration,
}

impl ScopeRegistry {
    /// Create a registry with the standard 60 second window
    #[must_use]
    pub fn new(scheduler: Arc<dyn Scheduler>) -> Self {
        Self::with_window(scheduler, WINDOW)
    }

    /// Create a registry with a custom idle window
    #[must_use]
    pub fn with_window(scheduler: Arc<dyn Scheduler>, window: Duration) -> Self {
        Self {
            counters: Arc::new(DashMap::new()),
            scheduler,
            window,
        }
    }

    /// Idle period after which a counter resets
    #[must_use]
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Return the counter for `key`, creating an empty one on first access.
    ///
    /// The returned guard holds the key's shard lock; drop it before calling
    /// back into the registry for the same key.
    pub fn get_or_create(&self, key: &str) -> RefMut<'_, String, WindowCounter> {
        self.counters.entry(key.to_string()).or_default()
    }

    /// Arm a fresh reset timer on `counter`, replacing whatever was armed
    pub fn arm_reset(&self, key: &str, counter: &mut WindowCounter) {
        counter.disarm();
        counter.epoch = counter.epoch.wrapping_add(1);
        let task = reset_task(Arc::downgrade(&self.counters), key.to_string(), counter.epoch);
        counter.timer = Some(self.scheduler.schedule(self.window, task));
    }

    /// Current count for `key` (0 if the scope has never been seen)
    #[must_use]
    pub fn count(&self, key: &str) -> u32 {
        self.counters.get(key).map(|c| c.count).unwrap_or(0)
    }

    /// Whether `key` has a counter
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.counters.contains_key(key)
    }

    /// Number of tracked scopes
    #[must_use]
    pub fn len(&self) -> usize {
        self.counters.len()
    }

    /// Whether no scope has been tracked yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// Cancel every pending reset and forget all scopes
    pub fn clear(&self) {
        for mut counter in self.counters.iter_mut() {
            counter.disarm();
        }
        self.counters.clear();
    }
}

impl Drop for ScopeRegistry {
    fn drop(&mut self) {
        for mut counter in self.counters.iter_mut() {
            counter.disarm();
        }
    }
}

impl std::fmt::Debug for ScopeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopeRegistry")
            .field("scopes", &self.counters.len())
            .field("window", &self.window)
            .finish()
    }
}

fn reset_task(counters: Weak<Counters>, key: String, epoch: u64) -> Task {
    Box::pin(async move {
        let Some(counters) = counters.upgrade() else {
            return;
        };
        let Some(mut counter) = counters.get_mut(&key) else {
            return;
        };
        if counter.epoch == epoch {
            debug!(scope = %key, count = counter.count, "Activity window expired, resetting");
            counter.reset();
        }
    })
}
