//! # MailOTP Core
//!
//! Core logic for issuing and verifying email one-time passcodes.
//! This crate contains the OTP record entity, the sharded in-memory code
//! store, the OTP manager that enforces cooldown, expiry and single use,
//! the collaborator traits it is wired with, and the error types it returns.

pub mod domain;
pub mod errors;
pub mod services;
pub mod store;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
pub use store::*;
