//! Property-based tests for the document registry.
