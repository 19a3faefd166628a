//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborators the OTP manager is wired
//! with. Today that means code delivery:
//!
//! - **SMTP**: real email over implicit TLS using `lettre`
//! - **Log**: development notifier that writes codes to the log

use otp_core::errors::{ConfigError, DeliveryError};

/// Notifier module - code delivery providers
pub mod notifier;

pub use notifier::{create_notifier, LogNotifier, SmtpNotifier};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// SMTP transport error (connect, TLS, auth, rejected envelope)
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// Sender or recipient is not a valid mailbox
    #[error("Invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// Message could not be assembled
    #[error("Failed to build email: {0}")]
    Message(#[from] lettre::error::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The send did not finish in time
    #[error("Email delivery timed out after {0} seconds")]
    Timeout(u64),

    /// Failure injected by a development notifier
    #[error("Simulated delivery failure")]
    Simulated,
}

impl From<InfrastructureError> for DeliveryError {
    fn from(err: InfrastructureError) -> Self {
        DeliveryError::new(err.to_string())
    }
}
