use crate::config::{AppConfig, AppMode, RelayConfig};
use crate::relay::{ConsoleRelay, EmailJsRelay, LeadRelay, SmtpRelay};
use anyhow::{Context, Result};
use std::sync::{Arc, OnceLock};

/// Global application state containing the service implementations
pub struct AppState {
    pub relay: Arc<dyn LeadRelay>,
    pub config: AppConfig,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("relay", &self.relay.name())
            .finish()
    }
}

impl AppState {
    /// Create AppState from configuration
    pub fn from_config(config: AppConfig) -> Result<Self> {
        match config.mode {
            AppMode::Local => tracing::info!("🔧 App Mode: LOCAL"),
            AppMode::Production => tracing::info!("🚀 App Mode: PRODUCTION"),
        }

        let relay: Arc<dyn LeadRelay> = match &config.relay {
            RelayConfig::EmailJs {
                service_id,
                template_id,
                public_key,
                private_key,
            } => {
                tracing::info!("   Relay: EmailJS (service={})", service_id);
                Arc::new(EmailJsRelay::new(
                    service_id,
                    template_id,
                    public_key,
                    private_key.clone(),
                ))
            }
            RelayConfig::Smtp {
                host,
                port,
                username,
                password,
                from_email,
                from_name,
                to_email,
            } => {
                tracing::info!("   Relay: SMTP ({}:{})", host, port);
                Arc::new(SmtpRelay {
                    host: host.clone(),
                    port: *port,
                    username: username.clone(),
                    password: password.clone(),
                    from_email: from_email.clone(),
                    from_name: from_name.clone(),
                    to_email: to_email.clone(),
                })
            }
            RelayConfig::Console => {
                tracing::info!("   Relay: Console (not sending)");
                Arc::new(ConsoleRelay)
            }
        };

        Ok(Self::with_relay(config, relay))
    }

    pub fn with_relay(config: AppConfig, relay: Arc<dyn LeadRelay>) -> Self {
        Self { relay, config }
    }

    /// Set the global AppState instance
    ///
    /// This should be called once at server startup.
    pub fn set_global(state: Arc<Self>) -> Result<()> {
        STATE
            .set(state)
            .map_err(|_| anyhow::anyhow!("AppState::set_global called more than once"))
    }

    /// Get the global AppState instance
    pub fn global() -> Result<Arc<Self>> {
        // In tests, check thread-local state first
        if let Some(test_state) = TEST_STATE.with(|s| s.borrow().clone()) {
            return Ok(test_state);
        }

        STATE
            .get()
            .cloned()
            .context("AppState::global called before set_global")
    }

    /// Override the global state for the current thread (tests only).
    #[cfg(test)]
    pub(crate) fn set_for_current_thread(state: Option<Arc<Self>>) {
        TEST_STATE.with(|s| *s.borrow_mut() = state);
    }
}

/// Global state storage using OnceLock for thread-safe initialization
pub(crate) static STATE: OnceLock<Arc<AppState>> = OnceLock::new();

thread_local! {
    /// Thread-local state override for testing
    pub(crate) static TEST_STATE: std::cell::RefCell<Option<Arc<AppState>>> = const { std::cell::RefCell::new(None) };
}
