use anyhow::{Context, Result};
use std::sync::{Arc, Mutex};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod client;
mod config;
mod errors;
mod i18n;
mod languages;
mod models;
mod provider;
mod server;
mod tui;

use client::api::HttpTranslateApi;
use client::clipboard::SystemClipboard;
use client::storage::FileStore;
use client::Translator;
use crate::config::Config;
use provider::OpenAiProvider;

const LOG_FILE: &str = "translate-llm.log";

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    init_logging(&config)?;

    info!("Starting TranslateLLM");
    if config.api_key.is_none() {
        warn!("{} is not set; provider calls will be unauthenticated", crate::config::API_KEY_ENV);
    }

    // Start the translate proxy
    let provider = Arc::new(OpenAiProvider::new(&config)?);
    let server_handle = {
        let host = config.server_host.clone();
        let port = config.server_port;
        tokio::spawn(async move {
            if let Err(e) = server::start_server(&host, port, provider).await {
                error!("Server error: {}", e);
            }
        })
    };
    info!("Translate proxy listening on {}:{}", config.server_host, config.server_port);

    if config.headless {
        server_handle.await?;
        return Ok(());
    }

    // Start TUI
    let api = Arc::new(HttpTranslateApi::new(&config)?);
    let store = FileStore::new(config.data_directory_path());
    let translator = Translator::new(Box::new(store), Box::new(SystemClipboard::default()), api);
    let i18n = i18n::I18n::new(i18n::Language::from_code(&config.language));
    let theme = tui::theme::get_theme_by_name(&config.theme);

    info!("Starting TUI (interface language: {})", i18n.get_language().to_code());
    if let Err(e) = tui::run_tui(translator, i18n, theme).await {
        error!("TUI error: {}", e);
        return Err(e.into());
    }

    server_handle.abort();
    info!("TranslateLLM shutdown complete");
    Ok(())
}

/// Headless runs log to stderr. With the TUI on screen, logs go to a file in
/// the data directory instead.
fn init_logging(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if config.headless {
        tracing_subscriber::fmt().with_env_filter(filter).init();
        return Ok(());
    }

    let log_dir = config.data_directory_path();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create {}", log_dir.display()))?;
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join(LOG_FILE))
        .context("Failed to open log file")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(log_file))
        .init();
    Ok(())
}
