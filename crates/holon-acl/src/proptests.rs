//! Property-based tests for access decisions and filtering.
