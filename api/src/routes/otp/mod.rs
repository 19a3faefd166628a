//! OTP route handlers
//!
//! - `POST /send-otp` issues a code and emails it
//! - `POST /verify-otp` checks a submitted code

pub mod send_otp;
pub mod verify_otp;

use std::sync::Arc;

use otp_core::{Notifier, OtpManager};

/// Application state that holds shared services
pub struct AppState<N>
where
    N: Notifier + ?Sized,
{
    pub otp_manager: Arc<OtpManager<N>>,
}

impl<N> AppState<N>
where
    N: Notifier + ?Sized,
{
    pub fn new(otp_manager: Arc<OtpManager<N>>) -> Self {
        Self { otp_manager }
    }
}
