//! Traits for the collaborators the OTP manager is wired with

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::DeliveryError;

/// Trait for code delivery integration
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver `code` to `identity`, resolving once the outcome is known
    async fn deliver(&self, identity: &str, code: &str) -> Result<(), DeliveryError>;

    /// Name of the delivery provider, for logs
    fn provider_name(&self) -> &str;
}

/// Source of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Source of new passcodes
pub trait CodeGenerator: Send + Sync {
    /// Produce a code of exactly `CODE_LENGTH` ASCII digits
    fn generate(&self) -> String;
}
