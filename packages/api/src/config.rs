use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Local,
    Production,
}

impl AppMode {
    pub fn from_env() -> Self {
        Self::from_value(&std::env::var("APP_MODE").unwrap_or_default())
    }

    pub fn from_value(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "local" => AppMode::Local,
            _ => AppMode::Production, // Default to production for safety
        }
    }
}

/// Where demo requests are forwarded.
#[derive(Clone, PartialEq, Eq)]
pub enum RelayConfig {
    EmailJs {
        service_id: String,
        template_id: String,
        public_key: String,
        private_key: Option<String>,
    },
    Smtp {
        host: String,
        port: u16,
        username: String,
        password: String,
        from_email: String,
        from_name: String,
        to_email: String,
    },
    Console,
}

impl RelayConfig {
    /// Lowercase relay name, as accepted by `RELAY`.
    pub fn kind(&self) -> &'static str {
        match self {
            RelayConfig::EmailJs { .. } => "emailjs",
            RelayConfig::Smtp { .. } => "smtp",
            RelayConfig::Console => "console",
        }
    }

    /// The credential worth a redacted startup line, if any.
    pub fn secret(&self) -> Option<(&'static str, &str)> {
        match self {
            RelayConfig::EmailJs { private_key, .. } => private_key
                .as_deref()
                .map(|key| ("EMAILJS_PRIVATE_KEY", key)),
            RelayConfig::Smtp { password, .. } => Some(("SMTP_PASSWORD", password.as_str())),
            RelayConfig::Console => None,
        }
    }
}

// Credentials stay out of logs.
impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelayConfig::EmailJs {
                service_id,
                template_id,
                private_key,
                ..
            } => f
                .debug_struct("EmailJs")
                .field("service_id", service_id)
                .field("template_id", template_id)
                .field("private_key", &private_key.as_ref().map(|_| "***"))
                .finish_non_exhaustive(),
            RelayConfig::Smtp {
                host, port, to_email, ..
            } => f
                .debug_struct("Smtp")
                .field("host", host)
                .field("port", port)
                .field("to_email", to_email)
                .finish_non_exhaustive(),
            RelayConfig::Console => f.write_str("Console"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{key} must be set"),
            ConfigError::Invalid { key, value } => write!(f, "{key} has invalid value {value:?}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mode: AppMode,
    pub relay: RelayConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup. Blank values count as unset.
    ///
    /// `RELAY` picks the relay explicitly; without it local mode prints leads
    /// to the console and production mode uses EmailJS.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let mode = AppMode::from_value(&get("APP_MODE").unwrap_or_default());
        let relay_kind = match get("RELAY") {
            Some(kind) => kind.trim().to_lowercase(),
            None if mode == AppMode::Local => "console".to_string(),
            None => "emailjs".to_string(),
        };

        let relay = match relay_kind.as_str() {
            "emailjs" => RelayConfig::EmailJs {
                service_id: require("EMAILJS_SERVICE_ID")?,
                template_id: require("EMAILJS_TEMPLATE_ID")?,
                public_key: require("EMAILJS_PUBLIC_KEY")?,
                private_key: get("EMAILJS_PRIVATE_KEY"),
            },
            "smtp" => {
                let raw_port = require("SMTP_PORT")?;
                let port = raw_port.trim().parse().map_err(|_| ConfigError::Invalid {
                    key: "SMTP_PORT",
                    value: raw_port.clone(),
                })?;
                RelayConfig::Smtp {
                    host: require("SMTP_HOST")?,
                    port,
                    username: require("SMTP_USERNAME")?,
                    password: require("SMTP_PASSWORD")?,
                    from_email: require("SMTP_FROM_EMAIL")?,
                    from_name: get("SMTP_FROM_NAME").unwrap_or_else(|| "CloserAI".to_string()),
                    to_email: require("LEADS_TO_EMAIL")?,
                }
            }
            "console" => RelayConfig::Console,
            _ => {
                return Err(ConfigError::Invalid {
                    key: "RELAY",
                    value: relay_kind.clone(),
                })
            }
        };

        Ok(Self { mode, relay })
    }
}

/// Load `.env` if present (local development).
#[cfg(feature = "server")]
pub fn load_dotenv() {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!("config: loaded {}", path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_app_mode_defaults_to_production() {
        assert_eq!(AppMode::from_value(""), AppMode::Production);
    }

    #[test]
    fn test_app_mode_case_insensitive() {
        assert_eq!(AppMode::from_value("LOCAL"), AppMode::Local);
        assert_eq!(AppMode::from_value("local"), AppMode::Local);
    }

    #[test]
    fn test_app_mode_invalid_defaults_to_production() {
        assert_eq!(AppMode::from_value("invalid"), AppMode::Production);
    }

    #[test]
    fn local_mode_uses_console_relay() {
        let config = AppConfig::from_lookup(lookup(&[("APP_MODE", "local")])).unwrap();
        assert_eq!(config.mode, AppMode::Local);
        assert_eq!(config.relay, RelayConfig::Console);
        assert_eq!(config.relay.kind(), "console");
        assert_eq!(config.relay.secret(), None);
    }

    #[test]
    fn production_requires_emailjs_ids() {
        let err =
            AppConfig::from_lookup(lookup(&[("EMAILJS_SERVICE_ID", "service_x")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("EMAILJS_TEMPLATE_ID"));
    }

    #[test]
    fn production_reads_emailjs_ids() {
        let config = AppConfig::from_lookup(lookup(&[
            ("EMAILJS_SERVICE_ID", "service_x"),
            ("EMAILJS_TEMPLATE_ID", "template_y"),
            ("EMAILJS_PUBLIC_KEY", "pk"),
            ("EMAILJS_PRIVATE_KEY", " "),
        ]))
        .unwrap();
        assert_eq!(
            config.relay,
            RelayConfig::EmailJs {
                service_id: "service_x".to_string(),
                template_id: "template_y".to_string(),
                public_key: "pk".to_string(),
                private_key: None,
            }
        );
    }

    #[test]
    fn explicit_relay_overrides_mode() {
        let config = AppConfig::from_lookup(lookup(&[
            ("APP_MODE", "local"),
            ("RELAY", "SMTP"),
            ("SMTP_HOST", "smtp.example.org"),
            ("SMTP_PORT", "587"),
            ("SMTP_USERNAME", "user"),
            ("SMTP_PASSWORD", "secret"),
            ("SMTP_FROM_EMAIL", "noreply@example.org"),
            ("LEADS_TO_EMAIL", "sales@example.org"),
        ]))
        .unwrap();
        assert_eq!(config.relay.kind(), "smtp");
        assert_eq!(config.relay.secret(), Some(("SMTP_PASSWORD", "secret")));
        match config.relay {
            RelayConfig::Smtp { port, from_name, .. } => {
                assert_eq!(port, 587);
                assert_eq!(from_name, "CloserAI");
            }
            other => panic!("unexpected relay {other:?}"),
        }
    }

    #[test]
    fn bad_smtp_port_is_invalid() {
        let err = AppConfig::from_lookup(lookup(&[("RELAY", "smtp"), ("SMTP_PORT", "abc")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "SMTP_PORT",
                value: "abc".to_string()
            }
        );
    }

    #[test]
    fn unknown_relay_is_invalid() {
        let err = AppConfig::from_lookup(lookup(&[("RELAY", "pigeon")])).unwrap_err();
        assert!(err.to_string().contains("RELAY"));
    }

    #[test]
    fn debug_output_hides_secrets() {
        let relay = RelayConfig::EmailJs {
            service_id: "s".to_string(),
            template_id: "t".to_string(),
            public_key: "pk".to_string(),
            private_key: Some("very-secret".to_string()),
        };
        let printed = format!("{relay:?}");
        assert!(!printed.contains("very-secret"));
        assert_eq!(relay.kind(), "emailjs");
        assert_eq!(relay.secret(), Some(("EMAILJS_PRIVATE_KEY", "very-secret")));
    }
}
