//! Tests for the registration workflow
