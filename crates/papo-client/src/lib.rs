//! HTTP client and configuration loading for the papo chatbot backend.
//!
//! [`client::ChatApiClient`] speaks the two-endpoint JSON protocol
//! (`POST /pergunta`, `POST /feedback`); [`config`] locates and loads
//! `~/.papo/config.toml` and resolves the base URL.

pub mod client;
pub mod config;
