//! Unit tests for the OTP manager
