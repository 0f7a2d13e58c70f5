//! Hand-written transport doubles shared by unit tests

use crate::error::{Error, Result};
use crate::transport::{Bot, Reloader, Stoppable};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

/// Records every call the recovery path makes, in order
#[derive(Default)]
pub(crate) struct CallLog {
    calls: Mutex<Vec<String>>,
}

impl CallLog {
    pub(crate) fn push(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

pub(crate) struct MockAdapter {
    log: Arc<CallLog>,
}

#[async_trait]
impl Stoppable for MockAdapter {
    async fn stop(&self) -> Result<()> {
        self.log.push("adapter.stop");
        Ok(())
    }
}

pub(crate) struct MockBot {
    pub(crate) log: Arc<CallLog>,
    adapter: Option<Arc<MockAdapter>>,
    fail_stop: AtomicBool,
    pub(crate) offline_reason: Mutex<Option<String>>,
}

impl MockBot {
    pub(crate) fn new() -> Self {
        Self {
            log: Arc::new(CallLog::default()),
            adapter: None,
            fail_stop: AtomicBool::new(false),
            offline_reason: Mutex::new(None),
        }
    }

    pub(crate) fn with_adapter() -> Self {
        let log = Arc::new(CallLog::default());
        Self {
            adapter: Some(Arc::new(MockAdapter { log: log.clone() })),
            log,
            fail_stop: AtomicBool::new(false),
            offline_reason: Mutex::new(None),
        }
    }

    pub(crate) fn failing_stop(self) -> Self {
        self.fail_stop.store(true, Ordering::SeqCst);
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.log.calls()
    }
}

#[async_trait]
impl Bot for MockBot {
    fn platform(&self) -> &str {
        "mock"
    }

    async fn stop(&self) -> Result<()> {
        self.log.push("bot.stop");
        if self.fail_stop.load(Ordering::SeqCst) {
            return Err(Error::Transport("socket already closed".to_string()));
        }
        Ok(())
    }

    fn offline(&self, reason: Error) {
        self.log.push("bot.offline");
        *self.offline_reason.lock().unwrap() = Some(reason.to_string());
    }

    fn adapter(&self) -> Option<Arc<dyn Stoppable>> {
        self.adapter
            .clone()
            .map(|adapter| adapter as Arc<dyn Stoppable>)
    }
}

#[derive(Default)]
pub(crate) struct MockReloader {
    reloads: AtomicU32,
    last_code: AtomicU32,
    fail: bool,
}

impl MockReloader {
    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub(crate) fn reloads(&self) -> u32 {
        self.reloads.load(Ordering::SeqCst)
    }

    pub(crate) fn last_code(&self) -> u32 {
        self.last_code.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Reloader for MockReloader {
    async fn full_reload(&self, code: u32) -> Result<()> {
        self.last_code.store(code, Ordering::SeqCst);
        self.reloads.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Error::Reload("loader busy".to_string()));
        }
        Ok(())
    }
}
