//! Integration tests for the OTP lifecycle through the public API

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};

    use otp_core::{
        CodeStore, DeliveryError, DomainError, FixedCodeGenerator, ManualClock, Notifier,
        OtpManager, OtpManagerConfig, RequestError, VerifyError,
    };

    // Notifier that remembers the last code sent to each identity
    #[derive(Default)]
    struct InboxNotifier {
        inbox: Mutex<Vec<(String, String)>>,
        failures_left: AtomicUsize,
    }

    impl InboxNotifier {
        fn failing_once() -> Self {
            Self {
                failures_left: AtomicUsize::new(1),
                ..Self::default()
            }
        }

        fn last_code_for(&self, identity: &str) -> Option<String> {
            self.inbox
                .lock()
                .unwrap()
                .iter()
                .rev()
                .find(|(to, _)| to == identity)
                .map(|(_, code)| code.clone())
        }

        fn sent(&self) -> usize {
            self.inbox.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl Notifier for InboxNotifier {
        async fn deliver(&self, identity: &str, code: &str) -> Result<(), DeliveryError> {
            let fail = self
                .failures_left
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok();
            if fail {
                return Err(DeliveryError::new("connection refused"));
            }
            self.inbox
                .lock()
                .unwrap()
                .push((identity.to_string(), code.to_string()));
            Ok(())
        }

        fn provider_name(&self) -> &str {
            "inbox"
        }
    }

    fn setup(
        notifier: InboxNotifier,
        codes: &[&str],
    ) -> (OtpManager<InboxNotifier>, Arc<InboxNotifier>, Arc<ManualClock>) {
        let notifier = Arc::new(notifier);
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap(),
        ));
        let manager = OtpManager::new(
            Arc::new(CodeStore::new()),
            notifier.clone(),
            OtpManagerConfig::default(),
        )
        .with_clock(clock.clone())
        .with_code_generator(Arc::new(FixedCodeGenerator::sequence(codes.iter().copied())));
        (manager, notifier, clock)
    }

    #[tokio::test]
    async fn test_full_signup_flow() {
        let (manager, notifier, clock) = setup(InboxNotifier::default(), &["042013"]);

        let issued = manager.request_code("a@x.com").await.unwrap();
        assert_eq!(issued.resend_after_seconds, 60);
        assert_eq!(notifier.last_code_for("a@x.com").as_deref(), Some("042013"));

        clock.advance_seconds(10);
        assert_eq!(
            manager.verify_code("a@x.com", "000000").await,
            Err(VerifyError::Mismatch)
        );

        clock.advance_seconds(10);
        assert!(manager.verify_code("a@x.com", "042013").await.is_ok());

        clock.advance_seconds(1);
        assert_eq!(
            manager.verify_code("a@x.com", "042013").await,
            Err(VerifyError::NotFound)
        );
        assert!(!manager.code_exists("a@x.com"));
    }

    #[tokio::test]
    async fn test_resend_after_cooldown() {
        let (manager, notifier, clock) = setup(InboxNotifier::default(), &["111111", "222222"]);

        manager.request_code("b@x.com").await.unwrap();

        clock.advance_seconds(30);
        match manager.request_code("b@x.com").await {
            Err(RequestError::Throttled {
                retry_after_seconds,
            }) => assert_eq!(retry_after_seconds, 30),
            other => panic!("Expected throttling, got {:?}", other),
        }
        assert_eq!(notifier.sent(), 1);

        clock.advance_seconds(31);
        manager.request_code("b@x.com").await.unwrap();
        assert_eq!(notifier.last_code_for("b@x.com").as_deref(), Some("222222"));

        assert_eq!(
            manager.verify_code("b@x.com", "111111").await,
            Err(VerifyError::Mismatch)
        );
        assert!(manager.verify_code("b@x.com", "222222").await.is_ok());
    }

    #[tokio::test]
    async fn test_code_expires_after_five_minutes() {
        let (manager, _notifier, clock) = setup(InboxNotifier::default(), &["123456"]);

        manager.request_code("c@x.com").await.unwrap();
        clock.advance_seconds(301);

        assert_eq!(
            manager.verify_code("c@x.com", "123456").await,
            Err(VerifyError::Expired)
        );
        assert_eq!(
            manager.verify_code("c@x.com", "123456").await,
            Err(VerifyError::NotFound)
        );

        // An expired code no longer blocks a fresh request
        assert!(manager.request_code("c@x.com").await.is_ok());
    }

    #[tokio::test]
    async fn test_failed_delivery_still_starts_cooldown() {
        let (manager, notifier, clock) = setup(InboxNotifier::failing_once(), &["123456"]);

        let err = manager.request_code("d@x.com").await.unwrap_err();
        assert_eq!(err.error_code(), "DELIVERY_FAILED");
        assert!(manager.code_exists("d@x.com"));

        assert!(matches!(
            manager.request_code("d@x.com").await,
            Err(RequestError::Throttled { .. })
        ));

        clock.advance_seconds(60);
        manager.request_code("d@x.com").await.unwrap();
        assert_eq!(notifier.sent(), 1);
    }

    #[tokio::test]
    async fn test_errors_convert_to_domain_error() {
        let (manager, _notifier, _clock) = setup(InboxNotifier::default(), &["123456"]);

        let err: DomainError = manager.request_code("").await.unwrap_err().into();
        assert_eq!(err.error_code(), "INVALID_IDENTITY");

        let err: DomainError = manager
            .verify_code("nobody@x.com", "123456")
            .await
            .unwrap_err()
            .into();
        assert_eq!(err.error_code(), "OTP_NOT_FOUND");
    }
}
