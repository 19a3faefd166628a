//! Unit tests for the error types

mod domain_error_tests;
