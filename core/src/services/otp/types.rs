//! Types for OTP manager results

use chrono::{DateTime, Utc};

/// Result of issuing a code
///
/// Does not carry the code, which only leaves the manager through the notifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedCode {
    /// When the code was issued
    pub issued_at: DateTime<Utc>,
    /// When the code stops being accepted
    pub expires_at: DateTime<Utc>,
    /// Seconds until the identity may request another code
    pub resend_after_seconds: i64,
}
