//! Notifier Module
//!
//! Delivery implementations for one-time passcodes. The provider is picked
//! from configuration at startup:
//!
//! - **SMTP**: production email over implicit TLS
//! - **Log**: writes codes to the log for local development

use std::sync::Arc;

use otp_core::Notifier;
use otp_shared::{NotifierConfig, NotifierProvider};

use crate::InfrastructureError;

pub mod log_notifier;
pub mod smtp;

pub use log_notifier::LogNotifier;
pub use smtp::SmtpNotifier;

#[cfg(test)]
mod tests;

/// Create a notifier based on configuration
///
/// # Arguments
///
/// * `config` - Provider selection and SMTP settings
/// * `expiry_minutes` - Code lifetime quoted in the email body
///
/// # Errors
///
/// Fails when the SMTP provider is selected without credentials, or the
/// sender address or relay host is unusable.
pub fn create_notifier(
    config: &NotifierConfig,
    expiry_minutes: i64,
) -> Result<Arc<dyn Notifier>, InfrastructureError> {
    match config.provider {
        NotifierProvider::Smtp => {
            let notifier = SmtpNotifier::new(&config.smtp, expiry_minutes)?;
            tracing::info!(
                provider = "smtp",
                host = %config.smtp.host,
                port = config.smtp.port,
                event = "notifier_initialized",
                "Using SMTP notifier"
            );
            Ok(Arc::new(notifier))
        }
        NotifierProvider::Mock => {
            tracing::warn!(
                provider = "log",
                event = "notifier_initialized",
                "Using log notifier, codes will be written to the log and not sent"
            );
            Ok(Arc::new(LogNotifier::new()))
        }
    }
}
