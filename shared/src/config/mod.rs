//! Configuration module with service-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server configuration
//! - `otp` - Cooldown, expiry and store sizing for one-time passcodes
//! - `notifier` - Delivery provider selection and SMTP credentials
//!
//! Every section is read from the process environment. Loaders take a lookup
//! function so tests can supply variables without touching the real environment.

pub mod environment;
pub mod notifier;
pub mod otp;
pub mod server;

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use environment::{Environment, LogFormat, LoggingConfig};
pub use notifier::{NotifierConfig, NotifierProvider, SmtpConfig};
pub use otp::OtpConfig;
pub use server::ServerConfig;

/// Variable lookup used by the configuration loaders
pub type EnvSource<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// OTP lifecycle configuration
    pub otp: OtpConfig,

    /// Delivery configuration
    pub notifier: NotifierConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(&|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_source(source: EnvSource<'_>) -> Result<Self, ConfigError> {
        let environment = Environment::from_source(source);

        Ok(Self {
            environment,
            server: ServerConfig::from_source(source)?,
            otp: OtpConfig::from_source(source)?,
            notifier: NotifierConfig::from_source(source, environment)?,
            logging: LoggingConfig::from_source(source, environment),
        })
    }
}

/// Read a variable, treating blank values as absent
pub(crate) fn read_var(source: EnvSource<'_>, key: &str) -> Option<String> {
    source(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Read and parse a variable, falling back to `default` when it is absent
pub(crate) fn parse_var<T>(source: EnvSource<'_>, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match read_var(source, key) {
        Some(raw) => raw
            .parse()
            .map_err(|e: T::Err| ConfigError::invalid(key, format!("'{}': {}", raw, e))),
        None => Ok(default),
    }
}
