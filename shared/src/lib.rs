//! Shared utilities and common types for the MailOTP server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Configuration error type
//! - The JSON response envelope returned by the API
//! - Utility functions (email masking for logs)

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, Environment, LogFormat, LoggingConfig, NotifierConfig, NotifierProvider,
    OtpConfig, ServerConfig, SmtpConfig,
};
pub use errors::ConfigError;
pub use types::ApiResponse;
pub use utils::mask_email;
