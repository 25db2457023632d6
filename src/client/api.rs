use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::TranslateRequest;
use async_trait::async_trait;
use serde_json::Value;

/// The translate proxy as seen from the UI.
#[async_trait]
pub trait TranslateApi: Send + Sync {
    /// One round trip; resolves to `result.content`.
    async fn translate(&self, request: &TranslateRequest) -> AppResult<String>;
}

pub struct HttpTranslateApi {
    client: reqwest::Client,
    url: String,
}

impl HttpTranslateApi {
    pub fn new(config: &Config) -> AppResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url: config.translate_url(),
        })
    }
}

#[async_trait]
impl TranslateApi for HttpTranslateApi {
    async fn translate(&self, request: &TranslateRequest) -> AppResult<String> {
        let response = self.client.post(&self.url).json(request).send().await?;
        let status = response.status();
        let body: Value = response.json().await?;

        if !status.is_success() {
            let reason = body
                .get("error")
                .and_then(|e| e.as_str())
                .unwrap_or("no error message");
            return Err(AppError::Proxy(format!("HTTP {}: {}", status.as_u16(), reason)));
        }

        extract_content(&body)
    }
}

fn extract_content(body: &Value) -> AppResult<String> {
    body.get("result")
        .and_then(|r| r.get("content"))
        .and_then(|c| c.as_str())
        .map(str::to_string)
        .ok_or_else(|| AppError::Proxy("response is missing result.content".to_string()))
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use std::sync::Mutex;

    /// Answers every request with the same outcome and remembers what it was sent.
    pub struct FakeApi {
        reply: Result<String, String>,
        pub requests: Mutex<Vec<TranslateRequest>>,
    }

    impl FakeApi {
        pub fn replying(content: &str) -> Self {
            Self {
                reply: Ok(content.to_string()),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn failing(reason: &str) -> Self {
            Self {
                reply: Err(reason.to_string()),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn call_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl TranslateApi for FakeApi {
        async fn translate(&self, request: &TranslateRequest) -> AppResult<String> {
            self.requests.lock().unwrap().push(request.clone());
            self.reply.clone().map_err(AppError::Proxy)
        }
    }
}
