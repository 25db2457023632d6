use super::notice::Notice;
use crate::languages::{self, FOREIGN_PLACEHOLDER, NATIVE_PLACEHOLDER};
use crate::models::TranslateRequest;

/// The form: two text areas and two language selections.
///
/// Selections are language names; an empty string means nothing is selected.
/// The two selections are never equal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslatorState {
    native_text: String,
    translated_text: String,
    native_lang: String,
    foreign_lang: String,
}

impl TranslatorState {
    pub fn native_text(&self) -> &str {
        &self.native_text
    }

    pub fn translated_text(&self) -> &str {
        &self.translated_text
    }

    pub fn native_lang(&self) -> &str {
        &self.native_lang
    }

    pub fn foreign_lang(&self) -> &str {
        &self.foreign_lang
    }

    pub fn select_source(&mut self, name: &str) -> Result<(), Notice> {
        if self.foreign_lang == name {
            return Err(Notice::SameLanguageTwice);
        }
        self.native_lang = name.to_string();
        Ok(())
    }

    /// Picking a new target discards the translation shown for the old one.
    pub fn select_target(&mut self, name: &str) -> Result<(), Notice> {
        if self.native_lang == name {
            return Err(Notice::SameLanguageTwice);
        }
        self.foreign_lang = name.to_string();
        self.translated_text.clear();
        Ok(())
    }

    #[cfg(test)]
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.native_text = text.into();
    }

    pub fn native_text_mut(&mut self) -> &mut String {
        &mut self.native_text
    }

    pub fn set_translated_text(&mut self, text: impl Into<String>) {
        self.translated_text = text.into();
    }

    /// Empties both text areas. Selections are kept.
    pub fn clear(&mut self) {
        self.native_text.clear();
        self.translated_text.clear();
    }

    /// Validate the form and snapshot it as a proxy request.
    pub fn request(&self) -> Result<TranslateRequest, Notice> {
        if self.native_lang.is_empty() || self.foreign_lang.is_empty() {
            return Err(Notice::ChooseTwoLanguages);
        }
        if self.native_text.is_empty() {
            return Err(Notice::EmptyText);
        }

        Ok(TranslateRequest {
            from: self.native_lang.clone(),
            to: self.foreign_lang.clone(),
            text: self.native_text.clone(),
        })
    }

    pub fn native_placeholder(&self) -> &'static str {
        languages::find_native(&self.native_lang)
            .map(|lang| lang.phrase)
            .unwrap_or(NATIVE_PLACEHOLDER)
    }

    pub fn foreign_placeholder(&self) -> &'static str {
        languages::find_foreign(&self.foreign_lang)
            .map(|lang| lang.phrase)
            .unwrap_or(FOREIGN_PLACEHOLDER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected(from: &str, to: &str) -> TranslatorState {
        let mut state = TranslatorState::default();
        state.select_source(from).unwrap();
        state.select_target(to).unwrap();
        state
    }

    #[test]
    fn target_equal_to_source_is_rejected() {
        let mut state = TranslatorState::default();
        state.select_source("English").unwrap();
        let before = state.clone();

        assert_eq!(state.select_target("English"), Err(Notice::SameLanguageTwice));
        assert_eq!(state, before);
        assert_eq!(state.foreign_lang(), "");
    }

    #[test]
    fn source_equal_to_target_is_rejected() {
        let mut state = selected("Spanish", "English");
        let before = state.clone();

        assert_eq!(state.select_source("English"), Err(Notice::SameLanguageTwice));
        assert_eq!(state, before);
    }

    #[test]
    fn reselecting_the_same_side_is_allowed() {
        let mut state = selected("English", "French");
        assert!(state.select_source("English").is_ok());
        assert!(state.select_target("French").is_ok());
    }

    #[test]
    fn changing_target_clears_translation() {
        let mut state = selected("English", "French");
        state.set_translated_text("Bonjour");

        state.select_target("German").unwrap();
        assert_eq!(state.translated_text(), "");
    }

    #[test]
    fn request_requires_both_languages() {
        let mut state = TranslatorState::default();
        state.set_text("Hello");
        assert_eq!(state.request(), Err(Notice::ChooseTwoLanguages));

        state.select_source("English").unwrap();
        assert_eq!(state.request(), Err(Notice::ChooseTwoLanguages));
    }

    #[test]
    fn request_requires_text() {
        let state = selected("English", "Spanish");
        assert_eq!(state.request(), Err(Notice::EmptyText));
    }

    #[test]
    fn request_snapshots_the_form() {
        let mut state = selected("English", "Spanish");
        state.set_text("Hello");
        assert_eq!(
            state.request(),
            Ok(TranslateRequest {
                from: "English".into(),
                to: "Spanish".into(),
                text: "Hello".into(),
            })
        );
    }

    #[test]
    fn clear_keeps_selections() {
        let mut state = selected("English", "Italian");
        state.set_text("Hello");
        state.set_translated_text("Ciao");

        state.clear();
        assert_eq!(state.native_text(), "");
        assert_eq!(state.translated_text(), "");
        assert_eq!(state.native_lang(), "English");
        assert_eq!(state.foreign_lang(), "Italian");
    }

    #[test]
    fn placeholders_follow_selection() {
        let mut state = TranslatorState::default();
        assert_eq!(state.native_placeholder(), "What do you want to translate?");
        assert_eq!(state.foreign_placeholder(), "Translation");

        state.select_source("Spanish").unwrap();
        state.select_target("German").unwrap();
        assert_eq!(state.native_placeholder(), "¿Que te gustaría traducir?");
        assert_eq!(state.foreign_placeholder(), "Übersetzung");
    }
}
