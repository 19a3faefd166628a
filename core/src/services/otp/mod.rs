//! OTP manager module for email-based verification
//!
//! This module provides the passcode lifecycle:
//! - Code generation from a uniform six-digit space
//! - Per-identity resend cooldown
//! - Expiry and single-use verification
//! - Delivery through an injected notifier

mod clock;
mod config;
mod generator;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use clock::{ManualClock, SystemClock};
pub use config::OtpManagerConfig;
pub use generator::{FixedCodeGenerator, RandomCodeGenerator};
pub use service::OtpManager;
pub use traits::{Clock, CodeGenerator, Notifier};
pub use types::IssuedCode;
