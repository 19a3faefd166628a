//! OTP record entity for email-based verification.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use serde::{Deserialize, Serialize};

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Number of distinct codes (000000 through 999999)
pub const CODE_SPACE: u32 = 1_000_000;

/// The live passcode held for one identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRecord {
    /// The 6-digit verification code, leading zeros preserved
    pub code: String,

    /// Timestamp when the code was issued
    pub issued_at: DateTime<Utc>,
}

impl OtpRecord {
    /// Creates a record for a freshly issued code
    pub fn new(code: impl Into<String>, issued_at: DateTime<Utc>) -> Self {
        Self {
            code: code.into(),
            issued_at,
        }
    }

    /// Time elapsed since issuance; negative if `now` precedes `issued_at`
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.issued_at
    }

    /// Whether a new request at `now` still falls inside the cooldown window
    pub fn is_within_cooldown(&self, now: DateTime<Utc>, cooldown: Duration) -> bool {
        self.age(now) < cooldown
    }

    /// Whole seconds, rounded up, until the cooldown window closes
    ///
    /// Returns 0 once the window has elapsed.
    pub fn cooldown_remaining_seconds(&self, now: DateTime<Utc>, cooldown: Duration) -> i64 {
        let remaining_ms = (cooldown - self.age(now)).num_milliseconds();
        if remaining_ms <= 0 {
            0
        } else {
            (remaining_ms + 999) / 1000
        }
    }

    /// Whether the record has aged past the expiry window at `now`
    ///
    /// A record exactly `expiry` old is still valid.
    pub fn is_expired(&self, now: DateTime<Utc>, expiry: Duration) -> bool {
        self.age(now) > expiry
    }

    /// Timestamp after which the code is no longer accepted
    pub fn expires_at(&self, expiry: Duration) -> DateTime<Utc> {
        self.issued_at + expiry
    }

    /// Exact string comparison against a submitted code
    ///
    /// Runs in constant time for equal-length inputs so the position of the
    /// first differing digit is not observable.
    pub fn matches(&self, submitted: &str) -> bool {
        if self.code.len() != submitted.len() {
            return false;
        }
        constant_time_eq(self.code.as_bytes(), submitted.as_bytes())
    }
}

/// Checks whether a string has the shape of a generated code
pub fn is_well_formed_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| b.is_ascii_digit())
}
