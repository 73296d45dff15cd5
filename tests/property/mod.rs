//! Property-based tests for parsing and serialization
