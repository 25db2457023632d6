use crate::errors::{AppError, AppResult};

pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> AppResult<()>;
}

/// The OS clipboard. Opened on first use so a headless session never touches it.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> AppResult<()> {
        if self.inner.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| AppError::Clipboard(e.to_string()))?;
            self.inner = Some(clipboard);
        }

        match self.inner.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_string())
                .map_err(|e| AppError::Clipboard(e.to_string())),
            None => Err(AppError::Clipboard("clipboard unavailable".to_string())),
        }
    }
}
