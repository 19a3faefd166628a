//! Main OTP manager implementation

use std::sync::Arc;

use otp_shared::mask_email;

use crate::domain::entities::OtpRecord;
use crate::errors::{RequestError, VerifyError};
use crate::store::CodeStore;

use super::clock::SystemClock;
use super::config::OtpManagerConfig;
use super::generator::RandomCodeGenerator;
use super::traits::{Clock, CodeGenerator, Notifier};
use super::types::IssuedCode;

/// Issues and verifies one-time passcodes
///
/// The manager owns the only path into the code store. Both operations run
/// their read-check-write sequence inside a single [`CodeStore::update`] call,
/// so concurrent requests for one identity are serialized while unrelated
/// identities proceed in parallel. Delivery happens after the store write has
/// committed and the shard lock is released.
pub struct OtpManager<N: Notifier + ?Sized> {
    /// Live records, shared with whoever constructed the manager
    store: Arc<CodeStore>,
    /// Delivery capability
    notifier: Arc<N>,
    /// Time source for cooldown and expiry
    clock: Arc<dyn Clock>,
    /// Source of new codes
    generator: Arc<dyn CodeGenerator>,
    /// Cooldown and expiry windows
    config: OtpManagerConfig,
}

impl<N: Notifier + ?Sized> OtpManager<N> {
    /// Create a new OTP manager
    ///
    /// Uses the system clock and a CSPRNG-backed code generator; override
    /// either with [`with_clock`](Self::with_clock) and
    /// [`with_code_generator`](Self::with_code_generator).
    ///
    /// # Arguments
    ///
    /// * `store` - Record store (may be shared with tests or diagnostics)
    /// * `notifier` - Delivery implementation
    /// * `config` - Cooldown and expiry windows
    pub fn new(store: Arc<CodeStore>, notifier: Arc<N>, config: OtpManagerConfig) -> Self {
        Self {
            store,
            notifier,
            clock: Arc::new(SystemClock),
            generator: Arc::new(RandomCodeGenerator),
            config,
        }
    }

    /// Replace the time source
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the code generator
    pub fn with_code_generator(mut self, generator: Arc<dyn CodeGenerator>) -> Self {
        self.generator = generator;
        self
    }

    /// Issue a code for `identity` and deliver it
    ///
    /// This method:
    /// 1. Rejects an empty identity
    /// 2. Refuses while the previous code for this identity is inside its cooldown
    /// 3. Generates a new code and stores it, replacing any previous record
    /// 4. Delivers the code through the notifier
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedCode)` - The code was stored and delivered
    /// * `Err(RequestError::Throttled)` - Cooldown still running; nothing changed
    /// * `Err(RequestError::DeliveryFailed)` - Stored but not delivered; the record stays
    pub async fn request_code(&self, identity: &str) -> Result<IssuedCode, RequestError> {
        if identity.trim().is_empty() {
            tracing::warn!(
                event = "invalid_identity",
                "Code requested for an empty identity"
            );
            return Err(RequestError::InvalidIdentity);
        }

        let now = self.clock.now();
        let cooldown = self.config.cooldown();

        let issued = self.store.update(identity, |slot| {
            if let Some(existing) = slot.as_ref() {
                if existing.is_within_cooldown(now, cooldown) {
                    return Err(existing.cooldown_remaining_seconds(now, cooldown));
                }
            }
            let record = OtpRecord::new(self.generator.generate(), now);
            let code = record.code.clone();
            *slot = Some(record);
            Ok(code)
        });

        let code = match issued {
            Ok(code) => code,
            Err(retry_after_seconds) => {
                tracing::warn!(
                    identity = %mask_email(identity),
                    retry_after_seconds,
                    event = "rate_limit_exceeded",
                    "Verification code request inside cooldown window"
                );
                return Err(RequestError::Throttled {
                    retry_after_seconds,
                });
            }
        };

        tracing::info!(
            identity = %mask_email(identity),
            event = "otp_generated",
            "Generated new verification code"
        );

        if let Err(e) = self.notifier.deliver(identity, &code).await {
            tracing::error!(
                identity = %mask_email(identity),
                provider = self.notifier.provider_name(),
                error = %e,
                event = "otp_delivery_failed",
                "Failed to deliver verification code"
            );
            return Err(e.into());
        }

        tracing::info!(
            identity = %mask_email(identity),
            provider = self.notifier.provider_name(),
            event = "otp_delivered",
            "Verification code delivered"
        );

        Ok(IssuedCode {
            issued_at: now,
            expires_at: now + self.config.expiry(),
            resend_after_seconds: self.config.cooldown_seconds(),
        })
    }

    /// Verify `submitted` against the live code for `identity`
    ///
    /// An expired record is purged when detected. A wrong code leaves the
    /// record in place so the user may retry within the expiry window. A
    /// correct code consumes the record.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The code matched and has been consumed
    /// * `Err(VerifyError::NotFound)` - Never requested, already used, or superseded
    /// * `Err(VerifyError::Expired)` - Too old; the record has been removed
    /// * `Err(VerifyError::Mismatch)` - Wrong code; the record is kept
    pub async fn verify_code(&self, identity: &str, submitted: &str) -> Result<(), VerifyError> {
        let now = self.clock.now();
        let expiry = self.config.expiry();

        let outcome = self.store.update(identity, |slot| {
            let Some(record) = slot.as_ref() else {
                return Err(VerifyError::NotFound);
            };
            if record.is_expired(now, expiry) {
                *slot = None;
                return Err(VerifyError::Expired);
            }
            if !record.matches(submitted) {
                return Err(VerifyError::Mismatch);
            }
            *slot = None;
            Ok(())
        });

        match &outcome {
            Ok(()) => tracing::info!(
                identity = %mask_email(identity),
                event = "otp_verified_success",
                "Verification code successfully verified"
            ),
            Err(VerifyError::Expired) => tracing::info!(
                identity = %mask_email(identity),
                event = "otp_expired",
                "Expired verification code purged"
            ),
            Err(e) => tracing::warn!(
                identity = %mask_email(identity),
                reason = e.error_code(),
                event = "otp_verification_failed",
                "Verification code verification failed"
            ),
        }

        outcome
    }

    /// Check whether a live record exists for `identity`
    ///
    /// A record past its expiry still counts until a verification attempt or
    /// a new request reclaims it.
    pub fn code_exists(&self, identity: &str) -> bool {
        self.store.get(identity).is_some()
    }
}
