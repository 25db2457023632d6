use super::storage::KeyValueStore;
use crate::errors::AppResult;
use crate::models::TranslationRecord;
use tracing::warn;

pub const HISTORY_KEY: &str = "past-translations";
pub const MAX_HISTORY: usize = 5;

/// Recent translations, most recent first, never longer than [`MAX_HISTORY`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    records: Vec<TranslationRecord>,
}

impl History {
    /// Read the persisted list. Anything unreadable starts an empty history.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let value = match store.load(HISTORY_KEY) {
            Ok(Some(value)) => value,
            Ok(None) => return Self::default(),
            Err(e) => {
                warn!("Failed to read translation history: {}", e);
                return Self::default();
            }
        };

        match serde_json::from_value::<Vec<TranslationRecord>>(value) {
            Ok(mut records) => {
                records.truncate(MAX_HISTORY);
                Self { records }
            }
            Err(e) => {
                warn!("Ignoring malformed translation history: {}", e);
                Self::default()
            }
        }
    }

    pub fn records(&self) -> &[TranslationRecord] {
        &self.records
    }

    pub fn push(&mut self, record: TranslationRecord) {
        self.records.insert(0, record);
        self.records.truncate(MAX_HISTORY);
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) -> AppResult<()> {
        let value = serde_json::to_value(&self.records)?;
        store.save(HISTORY_KEY, &value)
    }
}
