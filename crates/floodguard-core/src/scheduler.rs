//! Delayed callbacks
//!
//! The guards never sleep themselves. They hand a future to a [`Scheduler`]
//! and keep the returned [`TimerHandle`] so the callback can be cancelled
//! before it fires.
//!
//! Cancellation is best effort: a callback that has already started running
//! is not interrupted.

use crate::error::{Error, Result};
use futures::future::BoxFuture;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;
use tracing::trace;

/// A deferred unit of work
pub type Task = BoxFuture<'static, ()>;

/// Handle to a pending delayed callback
#[derive(Debug, Clone)]
pub struct TimerHandle {
    token: CancellationToken,
}

impl TimerHandle {
    /// Wrap a cancellation token
    #[must_use]
    pub fn new(token: CancellationToken) -> Self {
        Self { token }
    }

    /// Deregister the callback. Idempotent.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Whether `cancel` has been called
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// Delayed-callback capability provided by the host
pub trait Scheduler: Send + Sync {
    /// Run `task` once after `delay`, unless the returned handle is cancelled first
    fn schedule(&self, delay: Duration, task: Task) -> TimerHandle;
}

/// Scheduler backed by the tokio timer wheel
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    /// Use the runtime the caller is running on
    pub fn current() -> Result<Self> {
        let handle = Handle::try_current()
            .map_err(|e| Error::Internal(format!("no tokio runtime: {}", e)))?;
        Ok(Self { handle })
    }

    /// Use an explicit runtime handle
    #[must_use]
    pub fn with_handle(handle: Handle) -> Self {
        Self { handle }
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TimerHandle {
        let token = CancellationToken::new();
        let cancelled = token.clone();

        self.handle.spawn(async move {
            tokio::select! {
                _ = cancelled.cancelled() => {
                    trace!("Timer cancelled before firing");
                }
                _ = tokio::time::sleep(delay) => {
                    task.await;
                }
            }
        });

        TimerHandle::new(token)
    }
}
