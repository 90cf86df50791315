//! Configuration types for the papo client.
//!
//! `ClientConfig` represents the `config.toml` that points the client at
//! a backend deployment and tunes the transcript presentation.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the papo client.
///
/// Loaded from `~/.papo/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the chatbot backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Transcript label for the bot.
    #[serde(default = "default_bot_name")]
    pub bot_name: String,

    /// Transcript label for the user.
    #[serde(default = "default_user_name")]
    pub user_name: String,

    /// Accent color for rendered answers ("cyan", "verde", ...).
    /// `None` keeps the default skin.
    #[serde(default)]
    pub accent_color: Option<String>,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_bot_name() -> String {
    "Chatbot".to_string()
}

fn default_user_name() -> String {
    "Você".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            bot_name: default_bot_name(),
            user_name: default_user_name(),
            accent_color: None,
        }
    }
}
