//! Shared domain types for papo.
//!
//! This crate contains the types used across the papo terminal client:
//! wire protocol bodies, feedback, the chat transcript, client errors,
//! and configuration.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod api;
pub mod config;
pub mod error;
pub mod feedback;
pub mod transcript;
