//! Tests for the auth use cases


mod login_tests;
