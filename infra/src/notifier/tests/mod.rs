//! Unit tests for notifier module

#[cfg(test)]
pub mod smtp_tests;
