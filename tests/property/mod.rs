//! Property-based tests for resolution precedence
