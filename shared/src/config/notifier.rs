//! Delivery provider configuration

use serde::{Deserialize, Serialize};

use super::{parse_var, read_var, EnvSource};
use super::environment::Environment;
use crate::errors::ConfigError;

/// Default SMTP relay host
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Default SMTP port (implicit TLS)
pub const DEFAULT_SMTP_PORT: u16 = 465;

/// Default timeout for a single SMTP send, in seconds
pub const DEFAULT_SMTP_TIMEOUT_SECONDS: u64 = 10;

/// Which delivery implementation to construct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifierProvider {
    /// Send real email over SMTP
    Smtp,
    /// Log codes instead of sending them (development only)
    Mock,
}

impl std::str::FromStr for NotifierProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "smtp" | "email" => Ok(NotifierProvider::Smtp),
            "mock" | "log" => Ok(NotifierProvider::Mock),
            _ => Err(format!("unknown provider '{}', expected 'smtp' or 'mock'", s)),
        }
    }
}

/// SMTP credentials and connection settings
#[derive(Clone, Deserialize, Serialize)]
pub struct SmtpConfig {
    /// Relay host
    pub host: String,
    /// Relay port
    pub port: u16,
    /// Login user, also used as the sender address
    pub username: String,
    /// Login password
    #[serde(skip_serializing)]
    pub password: String,
    /// Timeout for a single send
    pub timeout_seconds: u64,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SMTP_HOST.to_string(),
            port: DEFAULT_SMTP_PORT,
            username: String::new(),
            password: String::new(),
            timeout_seconds: DEFAULT_SMTP_TIMEOUT_SECONDS,
        }
    }
}

impl std::fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl SmtpConfig {
    /// Fail with the first missing credential key
    pub fn require_credentials(&self) -> Result<(), ConfigError> {
        if self.username.is_empty() {
            return Err(ConfigError::missing("EMAIL_ADDRESS"));
        }
        if self.password.is_empty() {
            return Err(ConfigError::missing("EMAIL_PASSWORD"));
        }
        Ok(())
    }
}

/// Delivery configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotifierConfig {
    /// Selected provider
    pub provider: NotifierProvider,
    /// SMTP settings (used when `provider` is `Smtp`)
    pub smtp: SmtpConfig,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            provider: NotifierProvider::Mock,
            smtp: SmtpConfig::default(),
        }
    }
}

impl NotifierConfig {
    /// Load from `NOTIFIER_PROVIDER`, `EMAIL_ADDRESS`, `EMAIL_PASSWORD`,
    /// `SMTP_HOST`, `SMTP_PORT` and `SMTP_TIMEOUT_SECONDS`
    ///
    /// The provider defaults to `mock` in development and `smtp` elsewhere.
    pub fn from_source(source: EnvSource<'_>, env: Environment) -> Result<Self, ConfigError> {
        let default_provider = if env.is_development() {
            NotifierProvider::Mock
        } else {
            NotifierProvider::Smtp
        };
        let provider = match read_var(source, "NOTIFIER_PROVIDER") {
            Some(raw) => raw
                .parse()
                .map_err(|e: String| ConfigError::invalid("NOTIFIER_PROVIDER", e))?,
            None => default_provider,
        };

        let smtp = SmtpConfig {
            host: read_var(source, "SMTP_HOST")
                .unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
            port: parse_var(source, "SMTP_PORT", DEFAULT_SMTP_PORT)?,
            username: read_var(source, "EMAIL_ADDRESS").unwrap_or_default(),
            password: source("EMAIL_PASSWORD").unwrap_or_default(),
            timeout_seconds: parse_var(
                source,
                "SMTP_TIMEOUT_SECONDS",
                DEFAULT_SMTP_TIMEOUT_SECONDS,
            )?,
        };

        if provider == NotifierProvider::Smtp {
            smtp.require_credentials()?;
        }

        Ok(Self { provider, smtp })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let smtp = SmtpConfig {
            username: "noreply@example.com".to_string(),
            password: "hunter2".to_string(),
            ..Default::default()
        };
        let rendered = format!("{:?}", smtp);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_explicit_mock_provider_in_production() {
        let source = |key: &str| (key == "NOTIFIER_PROVIDER").then(|| "mock".to_string());
        let config = NotifierConfig::from_source(&source, Environment::Production).unwrap();
        assert_eq!(config.provider, NotifierProvider::Mock);
    }

    #[test]
    fn test_unknown_provider_is_rejected() {
        let source = |key: &str| (key == "NOTIFIER_PROVIDER").then(|| "pigeon".to_string());
        let err = NotifierConfig::from_source(&source, Environment::Development).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_missing_password_is_reported() {
        let source = |key: &str| match key {
            "NOTIFIER_PROVIDER" => Some("smtp".to_string()),
            "EMAIL_ADDRESS" => Some("noreply@example.com".to_string()),
            _ => None,
        };
        let err = NotifierConfig::from_source(&source, Environment::Development).unwrap_err();
        assert_eq!(err, ConfigError::missing("EMAIL_PASSWORD"));
    }
}
