use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Proxy request failed: {0}")]
    Proxy(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
