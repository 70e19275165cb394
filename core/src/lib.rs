//! # AgroLogistic Core
//!
//! Core business logic and domain layer for the AgroLogistic client.
//! This crate contains the domain entities and value objects, the auth
//! provider capability interface with its deterministic mock, the
//! registration and login use cases, the multi-step registration workflow
//! and the error types shared across the client architecture.

pub mod domain;
pub mod dto;
pub mod errors;
pub mod providers;
pub mod storage;
pub mod use_cases;
pub mod workflow;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use providers::*;
pub use use_cases::*;
