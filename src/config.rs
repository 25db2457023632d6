use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable holding the provider credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Prefix for environment overrides of any config key, e.g. `TRANSLATE_LLM_SERVER_PORT`.
const ENV_PREFIX: &str = "TRANSLATE_LLM";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Port the translate proxy listens on
    pub server_port: u16,
    pub server_host: String, // 127.0.0.1 keeps the proxy local
    /// Where the UI sends translate requests. Defaults to the local proxy.
    #[serde(default)]
    pub proxy_url: Option<String>,
    /// OpenAI-compatible chat completions URL
    #[serde(default = "default_provider_endpoint")]
    pub provider_endpoint: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Applied to outbound requests when set. `None` waits indefinitely.
    #[serde(default)]
    pub request_timeout_seconds: Option<u64>,
    /// Where history and the UI log live. Defaults to the platform data dir.
    #[serde(default)]
    pub history_directory: Option<PathBuf>,
    /// TUI theme: "textual_dark", "vscode_style", "opencode_style"
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Interface language: "en", "es"
    #[serde(default = "default_language")]
    pub language: String,
    /// Run only the proxy, without the terminal UI.
    #[serde(default)]
    pub headless: bool,
    /// Read from the environment only, never written to the file
    #[serde(skip)]
    pub api_key: Option<String>,
}

fn default_provider_endpoint() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_theme() -> String {
    "textual_dark".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8765,
            server_host: "127.0.0.1".to_string(),
            proxy_url: None,
            provider_endpoint: default_provider_endpoint(),
            model: default_model(),
            request_timeout_seconds: None,
            history_directory: None,
            theme: default_theme(),
            language: default_language(),
            headless: false,
            api_key: None,
        }
    }
}

impl Config {
    /// Load the config file (writing defaults on first run), apply
    /// `TRANSLATE_LLM_*` overrides and pick up the provider credential.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Config::default().save()?;
        }

        let mut config = Self::layered(config_path)?;
        config.api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
        Ok(config)
    }

    fn layered(config_path: PathBuf) -> Result<Self> {
        let defaults = ::config::Config::try_from(&Config::default())
            .context("Failed to build default configuration")?;

        let settings = ::config::Config::builder()
            .add_source(defaults)
            .add_source(::config::File::from(config_path).required(false))
            .add_source(::config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .context("Failed to read configuration")?;

        Ok(settings.try_deserialize()?)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("translate-llm");
        Ok(config_dir.join("config.toml"))
    }

    /// Directory holding persisted client state and the UI log file.
    pub fn data_directory_path(&self) -> PathBuf {
        self.history_directory.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("translate-llm")
        })
    }

    /// The URL the UI posts translate requests to.
    pub fn translate_url(&self) -> String {
        match &self.proxy_url {
            Some(url) => format!("{}/api/translate", url.trim_end_matches('/')),
            None => format!(
                "http://{}:{}/api/translate",
                self.server_host, self.server_port
            ),
        }
    }

    pub fn request_timeout(&self) -> Option<std::time::Duration> {
        self.request_timeout_seconds
            .map(std::time::Duration::from_secs)
    }
}
