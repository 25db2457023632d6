use crate::errors::{AppError, AppResult};
use serde_json::Value;
use std::path::PathBuf;

/// Persistent key-value storage for client state.
pub trait KeyValueStore: Send {
    fn load(&self, key: &str) -> AppResult<Option<Value>>;
    fn save(&mut self, key: &str, value: &Value) -> AppResult<()>;
}

/// Stores each key as `<key>.json` inside a directory.
pub struct FileStore {
    directory: PathBuf,
}

impl FileStore {
    pub fn new(directory: PathBuf) -> Self {
        Self { directory }
    }

    fn key_path(&self, key: &str) -> AppResult<PathBuf> {
        if key.is_empty() || key.contains(&['/', '\\'][..]) || key.starts_with('.') {
            return Err(AppError::Storage(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.directory.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> AppResult<Option<Value>> {
        let path = self.key_path(key)?;

        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn save(&mut self, key: &str, value: &Value) -> AppResult<()> {
        let path = self.key_path(key)?;
        std::fs::create_dir_all(&self.directory)?;

        // Replace atomically via a sibling temp file.
        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, serde_json::to_string(value)?)?;
        std::fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("translate-llm-store-{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn missing_key_loads_none() {
        let store = FileStore::new(temp_dir());
        assert!(store.load("past-translations").unwrap().is_none());
    }

    #[test]
    fn saved_value_survives_a_new_store() {
        let dir = temp_dir();
        let value = json!([{ "nativeText": "Hello" }]);

        FileStore::new(dir.clone())
            .save("past-translations", &value)
            .unwrap();
        let reloaded = FileStore::new(dir.clone()).load("past-translations").unwrap();

        assert_eq!(reloaded, Some(value));
        assert!(!dir.join("past-translations.json.tmp").exists());
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = temp_dir();
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("past-translations.json"), "[{").unwrap();

        let result = FileStore::new(dir.clone()).load("past-translations");
        assert!(matches!(result, Err(AppError::Serialization(_))));
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn keys_cannot_escape_the_directory() {
        let mut store = FileStore::new(temp_dir());
        assert!(store.save("../outside", &json!(1)).is_err());
        assert!(store.load("").is_err());
    }
}
