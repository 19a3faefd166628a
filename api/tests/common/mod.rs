//! Shared helpers for API tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use actix_web::web;
use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use otp_api::routes::otp::AppState;
use otp_core::{
    CodeStore, DeliveryError, FixedCodeGenerator, ManualClock, Notifier, OtpManager,
    OtpManagerConfig,
};

/// Notifier that keeps delivered codes in memory
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<(String, String)>>,
    pub fail: AtomicBool,
}

impl RecordingNotifier {
    pub fn last_code(&self) -> Option<String> {
        self.sent.lock().unwrap().last().map(|(_, code)| code.clone())
    }

    pub fn count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn deliver(&self, identity: &str, code: &str) -> Result<(), DeliveryError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DeliveryError::new("smtp unavailable"));
        }
        self.sent
            .lock()
            .unwrap()
            .push((identity.to_string(), code.to_string()));
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "recording"
    }
}

pub struct TestContext {
    pub state: web::Data<AppState<RecordingNotifier>>,
    pub notifier: Arc<RecordingNotifier>,
    pub clock: Arc<ManualClock>,
}

/// Build app state with a controllable clock and fixed codes
pub fn test_context(codes: &[&str]) -> TestContext {
    let notifier = Arc::new(RecordingNotifier::default());
    let start = Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap();
    let clock = Arc::new(ManualClock::new(start));
    let generator = Arc::new(FixedCodeGenerator::sequence(codes.iter().copied()));
    let store = Arc::new(CodeStore::new());
    let manager = OtpManager::new(store, notifier.clone(), OtpManagerConfig::default())
        .with_clock(clock.clone())
        .with_code_generator(generator);

    TestContext {
        state: web::Data::new(AppState::new(Arc::new(manager))),
        notifier,
        clock,
    }
}
