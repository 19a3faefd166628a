//! Error types returned by the OTP operations
//!
//! Each operation has its own error enum so callers can match exhaustively on
//! exactly the outcomes that operation can produce.

use thiserror::Error;

/// Errors returned when requesting a new code
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("Identity must not be empty")]
    InvalidIdentity,

    #[error("Please wait {retry_after_seconds} seconds before requesting a new code")]
    Throttled { retry_after_seconds: i64 },

    /// The code was stored but could not be delivered. It is not rolled back.
    #[error("Failed to deliver verification code: {reason}")]
    DeliveryFailed { reason: String },
}

impl RequestError {
    /// Stable machine-readable code
    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::InvalidIdentity => "INVALID_IDENTITY",
            RequestError::Throttled { .. } => "RATE_LIMIT_EXCEEDED",
            RequestError::DeliveryFailed { .. } => "DELIVERY_FAILED",
        }
    }
}

/// Errors returned when verifying a submitted code
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyError {
    /// No live code: never requested, already consumed, or superseded
    #[error("No verification code found")]
    NotFound,

    #[error("Verification code expired")]
    Expired,

    #[error("Invalid verification code")]
    Mismatch,
}

impl VerifyError {
    /// Stable machine-readable code
    pub fn error_code(&self) -> &'static str {
        match self {
            VerifyError::NotFound => "OTP_NOT_FOUND",
            VerifyError::Expired => "OTP_EXPIRED",
            VerifyError::Mismatch => "OTP_MISMATCH",
        }
    }
}

/// Failure reported by a notifier
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct DeliveryError {
    pub message: String,
}

impl DeliveryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<DeliveryError> for RequestError {
    fn from(err: DeliveryError) -> Self {
        RequestError::DeliveryFailed {
            reason: err.message,
        }
    }
}
