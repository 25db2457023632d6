//! Client side of the translator: form state, history, and the collaborators
//! (proxy, clipboard, storage) it talks to.

use crate::errors::AppResult;
use crate::models::{TranslateRequest, TranslationRecord};
use chrono::{SubsecRound, Utc};
use std::sync::Arc;
use tracing::{error, warn};

pub mod api;
pub mod clipboard;
pub mod history;
pub mod notice;
pub mod state;
pub mod storage;

use api::TranslateApi;
use clipboard::Clipboard;
use history::History;
use notice::Notice;
use state::TranslatorState;
use storage::KeyValueStore;

/// A sent request paired with what the proxy answered.
pub type Outcome = (TranslateRequest, AppResult<String>);

/// Owns the form state and history; every mutation goes through here.
pub struct Translator {
    state: TranslatorState,
    history: History,
    store: Box<dyn KeyValueStore>,
    clipboard: Box<dyn Clipboard>,
    api: Arc<dyn TranslateApi>,
}

impl Translator {
    /// History is read from `store` once, here.
    pub fn new(
        store: Box<dyn KeyValueStore>,
        clipboard: Box<dyn Clipboard>,
        api: Arc<dyn TranslateApi>,
    ) -> Self {
        let history = History::load(store.as_ref());
        Self {
            state: TranslatorState::default(),
            history,
            store,
            clipboard,
            api,
        }
    }

    pub fn state(&self) -> &TranslatorState {
        &self.state
    }

    pub fn history(&self) -> &[TranslationRecord] {
        self.history.records()
    }

    pub fn api(&self) -> Arc<dyn TranslateApi> {
        Arc::clone(&self.api)
    }

    pub fn select_source(&mut self, name: &str) -> Option<Notice> {
        self.state.select_source(name).err()
    }

    pub fn select_target(&mut self, name: &str) -> Option<Notice> {
        self.state.select_target(name).err()
    }

    #[cfg(test)]
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.state.set_text(text);
    }

    pub fn push_char(&mut self, c: char) {
        self.state.native_text_mut().push(c);
    }

    pub fn pop_char(&mut self) {
        self.state.native_text_mut().pop();
    }

    pub fn clear(&mut self) {
        self.state.clear();
    }

    /// Validate the form. `Ok` carries the request to send.
    pub fn prepare(&self) -> Result<TranslateRequest, Notice> {
        self.state.request()
    }

    /// Apply the outcome of a request built by [`Translator::prepare`].
    pub fn complete(&mut self, request: TranslateRequest, outcome: AppResult<String>) -> Option<Notice> {
        match outcome {
            Ok(content) => {
                self.state.set_translated_text(content.clone());
                self.append_history(TranslationRecord {
                    native_text: request.text,
                    translate_text: content,
                    from: request.from,
                    to: request.to,
                    timestamp: Utc::now().trunc_subsecs(3),
                });
                None
            }
            Err(e) => {
                error!("Translate request failed: {}", e);
                Some(Notice::RequestFailed)
            }
        }
    }

    /// One round trip to the proxy. Takes no borrow of the translator, so
    /// callers can run it on another task and hand the pair to
    /// [`Translator::complete`].
    pub async fn send(api: Arc<dyn TranslateApi>, request: TranslateRequest) -> Outcome {
        let outcome = api.translate(&request).await;
        (request, outcome)
    }

    /// Copy the translated text. Success is only reported for non-empty text.
    pub fn copy(&mut self) -> Option<Notice> {
        let text = self.state.translated_text().to_string();
        match self.clipboard.set_text(&text) {
            Ok(()) if !text.is_empty() => Some(Notice::Copied),
            Ok(()) => None,
            Err(e) => {
                error!("Failed to copy: {}", e);
                None
            }
        }
    }

    /// Prepend `record`, drop entries past the cap and persist the list.
    pub fn append_history(&mut self, record: TranslationRecord) {
        self.history.push(record);
        if let Err(e) = self.history.save(self.store.as_mut()) {
            warn!("Failed to persist translation history: {}", e);
        }
    }
}
