//! API response envelope

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standard API response returned by the OTP endpoints
///
/// Keeps the `{ "success": .., "message": .. }` shape clients already rely on,
/// with optional fields for machine-readable error codes and timing hints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Whether the request was successful
    pub success: bool,

    /// Human-readable message
    pub message: String,

    /// Error code for programmatic handling (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,

    /// Seconds until a new code may be requested (present on throttling)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<i64>,

    /// Seconds until the next resend is allowed (present after issuing a code)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resend_after: Option<i64>,

    /// Response timestamp
    pub timestamp: DateTime<Utc>,
}

impl ApiResponse {
    /// Create a successful response
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            error_code: None,
            retry_after: None,
            resend_after: None,
            timestamp: Utc::now(),
        }
    }

    /// Create an error response
    pub fn error(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error_code: Some(error_code.into()),
            retry_after: None,
            resend_after: None,
            timestamp: Utc::now(),
        }
    }

    /// Attach the throttling hint
    pub fn with_retry_after(mut self, seconds: i64) -> Self {
        self.retry_after = Some(seconds);
        self
    }

    /// Attach the resend hint
    pub fn with_resend_after(mut self, seconds: i64) -> Self {
        self.resend_after = Some(seconds);
        self
    }
}
