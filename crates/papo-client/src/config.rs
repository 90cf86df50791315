//! Configuration loader for the papo client.
//!
//! Reads `config.toml` from the data directory (`~/.papo/` in production)
//! and deserializes it into [`ClientConfig`]. Falls back to sensible
//! defaults when the file is missing or malformed.

use std::path::{Path, PathBuf};

use papo_types::config::ClientConfig;

/// Default data directory: `~/.papo`.
///
/// Returns `None` when the home directory cannot be determined.
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".papo"))
}

/// Load client configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`ClientConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and
///   returns the default.
pub async fn load_config(data_dir: &Path) -> ClientConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(
                "No config.toml found at {}, using defaults",
                config_path.display()
            );
            return ClientConfig::default();
        }
        Err(err) => {
            tracing::warn!(
                "Failed to read {}: {err}, using defaults",
                config_path.display()
            );
            return ClientConfig::default();
        }
    };

    match toml::from_str::<ClientConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            ClientConfig::default()
        }
    }
}

/// Resolve the base URL for the session.
///
/// Priority:
/// 1. Explicit override (`--base-url` flag or `PAPO_BASE_URL`)
/// 2. `base_url` from `config.toml` (defaults to `http://localhost:5000`)
pub fn resolve_base_url(config: &ClientConfig, override_url: Option<&str>) -> String {
    match override_url {
        Some(url) => url.to_string(),
        None => config.base_url.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).await;
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.bot_name, "Chatbot");
    }

    #[tokio::test]
    async fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(
            &config_path,
            r#"
base_url = "http://10.0.0.12:5000"
bot_name = "Sábio"
accent_color = "verde"
"#,
        )
        .await
        .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.base_url, "http://10.0.0.12:5000");
        assert_eq!(config.bot_name, "Sábio");
        assert_eq!(config.user_name, "Você");
        assert_eq!(config.accent_color.as_deref(), Some("verde"));
    }

    #[tokio::test]
    async fn load_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(&config_path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.base_url, "http://localhost:5000");
    }

    #[test]
    fn resolve_base_url_prefers_override() {
        let config = ClientConfig {
            base_url: "http://localhost:5000".to_string(),
            ..ClientConfig::default()
        };
        let url = resolve_base_url(&config, Some("https://chat.exemplo.com.br"));
        assert_eq!(url, "https://chat.exemplo.com.br");
    }

    #[test]
    fn resolve_base_url_without_override_uses_config() {
        let config = ClientConfig {
            base_url: "http://10.0.0.12:5000".to_string(),
            ..ClientConfig::default()
        };
        let url = resolve_base_url(&config, None);
        assert_eq!(url, "http://10.0.0.12:5000");
    }
}
