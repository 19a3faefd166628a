pub mod otp;

pub use otp::{SendOtpRequest, VerifyOtpRequest};
