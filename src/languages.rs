//! Fixed language tables for the two selector bars.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Red,
    Yellow,
    Green,
    Orange,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageDescriptor {
    pub name: &'static str,
    pub color: Tint,
    pub flag: &'static str,
    /// Placeholder shown in the text area while this language is selected.
    pub phrase: &'static str,
}

impl LanguageDescriptor {
    pub fn label(&self) -> String {
        format!("{} {}", self.name, self.flag)
    }
}

pub const NATIVE_LANGUAGES: &[LanguageDescriptor] = &[
    LanguageDescriptor {
        name: "English",
        color: Tint::Red,
        flag: "🇬🇧",
        phrase: "What do you want to translate?",
    },
    LanguageDescriptor {
        name: "Spanish",
        color: Tint::Yellow,
        flag: "🇪🇸",
        phrase: "¿Que te gustaría traducir?",
    },
];

pub const FOREIGN_LANGUAGES: &[LanguageDescriptor] = &[
    LanguageDescriptor {
        name: "Italian",
        color: Tint::Green,
        flag: "🇮🇹",
        phrase: "Traduzione",
    },
    LanguageDescriptor {
        name: "German",
        color: Tint::Orange,
        flag: "🇩🇪",
        phrase: "Übersetzung",
    },
    LanguageDescriptor {
        name: "French",
        color: Tint::Blue,
        flag: "🇫🇷",
        phrase: "Traduction",
    },
    LanguageDescriptor {
        name: "Portuguese",
        color: Tint::Red,
        flag: "🇵🇹",
        phrase: "Tradução",
    },
    LanguageDescriptor {
        name: "Spanish",
        color: Tint::Yellow,
        flag: "🇪🇸",
        phrase: "Traducción",
    },
    LanguageDescriptor {
        name: "English",
        color: Tint::Red,
        flag: "🇬🇧",
        phrase: "Translation",
    },
];

pub const NATIVE_PLACEHOLDER: &str = "What do you want to translate?";
pub const FOREIGN_PLACEHOLDER: &str = "Translation";

pub fn find_native(name: &str) -> Option<&'static LanguageDescriptor> {
    NATIVE_LANGUAGES.iter().find(|lang| lang.name == name)
}

pub fn find_foreign(name: &str) -> Option<&'static LanguageDescriptor> {
    FOREIGN_LANGUAGES.iter().find(|lang| lang.name == name)
}
