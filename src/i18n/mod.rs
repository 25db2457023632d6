use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Interface language (labels, footer, notifications). Unrelated to the
/// languages offered for translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
}

impl Language {
    pub fn from_code(code: &str) -> Self {
        match code {
            "es" => Language::Spanish,
            _ => Language::English,
        }
    }

    pub fn to_code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
        }
    }
}

pub struct I18n {
    translations: HashMap<String, String>,
    language: Language,
}

impl I18n {
    pub fn new(language: Language) -> Self {
        let mut i18n = Self {
            translations: HashMap::new(),
            language,
        };
        i18n.load_translations();
        i18n
    }

    pub fn get_language(&self) -> Language {
        self.language
    }

    fn load_translations(&mut self) {
        self.translations = match self.language {
            Language::English => get_english_translations(),
            Language::Spanish => get_spanish_translations(),
        };
    }

    /// Look up `key`; unknown keys are echoed back unchanged.
    pub fn ts<'a>(&'a self, key: &'a str) -> &'a str {
        self.translations.get(key).map(|s| s.as_str()).unwrap_or(key)
    }
}

fn get_english_translations() -> HashMap<String, String> {
    let mut map = HashMap::new();

    // Header
    map.insert("app_title".to_string(), "TranslateLLM".to_string());
    map.insert("app_subtitle".to_string(), "A simple LLM-based translation tool".to_string());

    // Form
    map.insert("source_languages".to_string(), "From".to_string());
    map.insert("target_languages".to_string(), "To".to_string());
    map.insert("source_text".to_string(), "Text".to_string());
    map.insert("target_text".to_string(), "Translation".to_string());
    map.insert("active".to_string(), "(active)".to_string());
    map.insert("translating".to_string(), "Translating...".to_string());
    map.insert("history_title".to_string(), "Recent translations".to_string());
    map.insert("footer".to_string(), "Tab - switch focus | ←→ Enter - choose language | Ctrl+T - translate | Ctrl+Y - copy | Ctrl+L - clear | Esc - quit".to_string());

    // Notifications
    map.insert("notice_same_language".to_string(), "Can't choose same language twice".to_string());
    map.insert("notice_choose_languages".to_string(), "Choose two languages".to_string());
    map.insert("notice_empty_text".to_string(), "Try writing something first... 🤔".to_string());
    map.insert("notice_request_failed".to_string(), "Something went wrong".to_string());
    map.insert("notice_copied".to_string(), "Successfully copied".to_string());

    map
}

fn get_spanish_translations() -> HashMap<String, String> {
    let mut map = HashMap::new();

    // Header
    map.insert("app_title".to_string(), "TranslateLLM".to_string());
    map.insert("app_subtitle".to_string(), "Una herramienta de traducción sencilla basada en LLM".to_string());

    // Form
    map.insert("source_languages".to_string(), "De".to_string());
    map.insert("target_languages".to_string(), "A".to_string());
    map.insert("source_text".to_string(), "Texto".to_string());
    map.insert("target_text".to_string(), "Traducción".to_string());
    map.insert("active".to_string(), "(activo)".to_string());
    map.insert("translating".to_string(), "Traduciendo...".to_string());
    map.insert("history_title".to_string(), "Traducciones recientes".to_string());
    map.insert("footer".to_string(), "Tab - cambiar foco | ←→ Enter - elegir idioma | Ctrl+T - traducir | Ctrl+Y - copiar | Ctrl+L - borrar | Esc - salir".to_string());

    // Notifications
    map.insert("notice_same_language".to_string(), "No puedes elegir el mismo idioma dos veces".to_string());
    map.insert("notice_choose_languages".to_string(), "Elige dos idiomas".to_string());
    map.insert("notice_empty_text".to_string(), "Prueba a escribir algo primero... 🤔".to_string());
    map.insert("notice_request_failed".to_string(), "Algo salió mal".to_string());
    map.insert("notice_copied".to_string(), "Copiado correctamente".to_string());

    map
}
