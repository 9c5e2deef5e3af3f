//! Test helpers for server-feature API tests.
//!
//! Installs a thread-local `AppState` backed by an in-memory relay so lead
//! submission can be exercised without network access.

#![cfg(all(test, feature = "server"))]

use crate::config::{AppConfig, AppMode, RelayConfig};
use crate::relay::LeadRelay;
use crate::state::AppState;
use crate::types::LeadDraft;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Relay that records every lead and acknowledges or fails on demand.
pub struct RecordingRelay {
    fail: bool,
    pub received: Mutex<Vec<LeadDraft>>,
}

impl RecordingRelay {
    pub fn accepting() -> Arc<Self> {
        Arc::new(Self {
            fail: false,
            received: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            received: Mutex::new(Vec::new()),
        })
    }

    pub fn count(&self) -> usize {
        self.received.lock().map(|r| r.len()).unwrap_or_default()
    }
}

#[async_trait]
impl LeadRelay for RecordingRelay {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn forward(&self, lead: &LeadDraft) -> anyhow::Result<()> {
        if let Ok(mut received) = self.received.lock() {
            received.push(lead.clone());
        }
        if self.fail {
            anyhow::bail!("relay unavailable");
        }
        Ok(())
    }
}

/// Install `relay` as the current thread's AppState. Cleared on drop.
pub struct StateGuard;

impl StateGuard {
    pub fn install(relay: Arc<dyn LeadRelay>) -> Self {
        let config = AppConfig {
            mode: AppMode::Local,
            relay: RelayConfig::Console,
        };
        AppState::set_for_current_thread(Some(Arc::new(AppState::with_relay(config, relay))));
        StateGuard
    }
}

impl Drop for StateGuard {
    fn drop(&mut self) {
        AppState::set_for_current_thread(None);
    }
}
