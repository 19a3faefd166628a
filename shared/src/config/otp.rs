//! One-time passcode lifecycle configuration

use serde::{Deserialize, Serialize};

use super::{parse_var, EnvSource};
use crate::errors::ConfigError;

/// Default seconds an identity must wait between code requests
pub const DEFAULT_COOLDOWN_SECONDS: i64 = 60;

/// Default seconds a code stays valid after issuance
pub const DEFAULT_EXPIRY_SECONDS: i64 = 300;

/// Upper bound for the cooldown and expiry windows (one year)
pub const MAX_WINDOW_SECONDS: i64 = 86_400 * 365;

/// Default number of independently locked store shards
pub const DEFAULT_STORE_SHARDS: usize = 16;

/// OTP lifecycle configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Minimum seconds between successive code requests for one identity
    pub cooldown_seconds: i64,

    /// Seconds a code remains valid for verification
    pub expiry_seconds: i64,

    /// Number of shards in the in-memory code store
    pub store_shards: usize,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            cooldown_seconds: DEFAULT_COOLDOWN_SECONDS,
            expiry_seconds: DEFAULT_EXPIRY_SECONDS,
            store_shards: DEFAULT_STORE_SHARDS,
        }
    }
}

impl OtpConfig {
    /// Load from `OTP_COOLDOWN_SECONDS`, `OTP_EXPIRY_SECONDS` and `OTP_STORE_SHARDS`
    pub fn from_source(source: EnvSource<'_>) -> Result<Self, ConfigError> {
        let config = Self {
            cooldown_seconds: parse_var(source, "OTP_COOLDOWN_SECONDS", DEFAULT_COOLDOWN_SECONDS)?,
            expiry_seconds: parse_var(source, "OTP_EXPIRY_SECONDS", DEFAULT_EXPIRY_SECONDS)?,
            store_shards: parse_var(source, "OTP_STORE_SHARDS", DEFAULT_STORE_SHARDS)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the windows and shard count are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cooldown_seconds < 0 {
            return Err(ConfigError::invalid(
                "OTP_COOLDOWN_SECONDS",
                "must not be negative",
            ));
        }
        if self.cooldown_seconds > MAX_WINDOW_SECONDS {
            return Err(ConfigError::invalid(
                "OTP_COOLDOWN_SECONDS",
                format!("must not exceed {}", MAX_WINDOW_SECONDS),
            ));
        }
        if self.expiry_seconds <= 0 {
            return Err(ConfigError::invalid("OTP_EXPIRY_SECONDS", "must be positive"));
        }
        if self.expiry_seconds > MAX_WINDOW_SECONDS {
            return Err(ConfigError::invalid(
                "OTP_EXPIRY_SECONDS",
                format!("must not exceed {}", MAX_WINDOW_SECONDS),
            ));
        }
        if self.store_shards == 0 {
            return Err(ConfigError::invalid("OTP_STORE_SHARDS", "must be at least 1"));
        }
        Ok(())
    }

    /// Expiry expressed in whole minutes, rounded up, for user-facing messages
    pub fn expiry_minutes(&self) -> i64 {
        (self.expiry_seconds + 59) / 60
    }
}
