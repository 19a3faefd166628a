//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

// Re-export all error types
pub use otp_shared::ConfigError;
pub use types::{DeliveryError, RequestError, VerifyError};

use thiserror::Error;

/// Core domain errors bridging the operation-specific error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Verify(#[from] VerifyError),
}

impl DomainError {
    /// Stable machine-readable code for the underlying error
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::Request(e) => e.error_code(),
            DomainError::Verify(e) => e.error_code(),
        }
    }
}
