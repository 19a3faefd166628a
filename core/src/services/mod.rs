//! Business services containing domain logic and use cases.

pub mod otp;

// Re-export commonly used types
pub use otp::{
    Clock, CodeGenerator, FixedCodeGenerator, IssuedCode, ManualClock, Notifier, OtpManager,
    OtpManagerConfig, RandomCodeGenerator, SystemClock,
};
