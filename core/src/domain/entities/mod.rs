//! Domain entities.

pub mod otp_record;

pub use otp_record::{is_well_formed_code, OtpRecord, CODE_LENGTH, CODE_SPACE};
