//! Configuration for the OTP manager

use chrono::Duration;
use otp_shared::config::otp::{DEFAULT_COOLDOWN_SECONDS, DEFAULT_EXPIRY_SECONDS, MAX_WINDOW_SECONDS};
use otp_shared::{ConfigError, OtpConfig};

/// Configuration for the OTP manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OtpManagerConfig {
    /// Minimum seconds between code requests for one identity
    cooldown_seconds: i64,
    /// Seconds a code stays valid after issuance
    expiry_seconds: i64,
}

impl OtpManagerConfig {
    /// Build a validated configuration
    ///
    /// The cooldown may be zero (no throttling); the expiry must be positive.
    /// Neither may exceed [`MAX_WINDOW_SECONDS`].
    pub fn new(cooldown_seconds: i64, expiry_seconds: i64) -> Result<Self, ConfigError> {
        if !(0..=MAX_WINDOW_SECONDS).contains(&cooldown_seconds) {
            return Err(ConfigError::invalid(
                "cooldown_seconds",
                format!("must be between 0 and {}", MAX_WINDOW_SECONDS),
            ));
        }
        if !(1..=MAX_WINDOW_SECONDS).contains(&expiry_seconds) {
            return Err(ConfigError::invalid(
                "expiry_seconds",
                format!("must be between 1 and {}", MAX_WINDOW_SECONDS),
            ));
        }
        Ok(Self {
            cooldown_seconds,
            expiry_seconds,
        })
    }

    pub fn cooldown_seconds(&self) -> i64 {
        self.cooldown_seconds
    }

    pub fn expiry_seconds(&self) -> i64 {
        self.expiry_seconds
    }

    pub fn cooldown(&self) -> Duration {
        Duration::seconds(self.cooldown_seconds)
    }

    pub fn expiry(&self) -> Duration {
        Duration::seconds(self.expiry_seconds)
    }
}

impl Default for OtpManagerConfig {
    fn default() -> Self {
        Self {
            cooldown_seconds: DEFAULT_COOLDOWN_SECONDS,
            expiry_seconds: DEFAULT_EXPIRY_SECONDS,
        }
    }
}

impl TryFrom<&OtpConfig> for OtpManagerConfig {
    type Error = ConfigError;

    fn try_from(config: &OtpConfig) -> Result<Self, Self::Error> {
        Self::new(config.cooldown_seconds, config.expiry_seconds)
    }
}
