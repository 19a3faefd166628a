//! Log Notifier Implementation
//!
//! A development notifier that writes verification codes to the log instead
//! of sending them.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use otp_core::{DeliveryError, Notifier};
use otp_shared::mask_email;

use crate::InfrastructureError;

/// Notifier for development and testing
///
/// This implementation:
/// - Logs the code with a mock message id
/// - Tracks delivery count for testing
/// - Can be told to fail
#[derive(Clone, Default)]
pub struct LogNotifier {
    /// Counter for tracking number of codes delivered
    delivery_count: Arc<AtomicU64>,
    /// Whether to simulate failures
    simulate_failure: Arc<AtomicBool>,
}

impl LogNotifier {
    /// Create a new log notifier
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a notifier that fails every delivery
    pub fn failing() -> Self {
        let notifier = Self::new();
        notifier.set_simulate_failure(true);
        notifier
    }

    /// Get the total number of codes delivered
    pub fn delivery_count(&self) -> u64 {
        self.delivery_count.load(Ordering::SeqCst)
    }

    /// Reset the delivery counter
    pub fn reset_counter(&self) {
        self.delivery_count.store(0, Ordering::SeqCst);
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn deliver(&self, identity: &str, code: &str) -> Result<(), DeliveryError> {
        let recipient = mask_email(identity);

        if self.simulate_failure.load(Ordering::SeqCst) {
            warn!(
                provider = "log",
                recipient = %recipient,
                event = "email_failed",
                "Log notifier simulating failure"
            );
            return Err(InfrastructureError::Simulated.into());
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.delivery_count.fetch_add(1, Ordering::SeqCst) + 1;

        info!(
            target: "email_service",
            provider = "log",
            recipient = %recipient,
            message_id = %message_id,
            count,
            code,
            event = "email_sent",
            "Verification code (not sent, development only)"
        );

        Ok(())
    }

    fn provider_name(&self) -> &str {
        "log"
    }
}
