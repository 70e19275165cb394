//! Tests for the auth provider implementations
