use serde::{Deserialize, Serialize};

/// Locales the gallery is published in. Korean is the source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, async_graphql::Enum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Ko,
    En,
    Ja,
    Zh,
}

impl Locale {
    pub const ALL: [Locale; 4] = [Locale::Ko, Locale::En, Locale::Ja, Locale::Zh];
    pub const TRANSLATION_TARGETS: [Locale; 3] = [Locale::En, Locale::Ja, Locale::Zh];

    pub fn code(self) -> &'static str {
        match self {
            Locale::Ko => "ko",
            Locale::En => "en",
            Locale::Ja => "ja",
            Locale::Zh => "zh",
        }
    }
}

/// Per-locale text. Missing translations deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalizedText {
    pub ko: String,
    pub en: String,
    pub ja: String,
    pub zh: String,
}

impl LocalizedText {
    pub fn korean(text: impl Into<String>) -> Self {
        Self {
            ko: text.into(),
            ..Self::default()
        }
    }

    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::Ko => &self.ko,
            Locale::En => &self.en,
            Locale::Ja => &self.ja,
            Locale::Zh => &self.zh,
        }
    }

    pub fn set(&mut self, locale: Locale, text: impl Into<String>) {
        let slot = match locale {
            Locale::Ko => &mut self.ko,
            Locale::En => &mut self.en,
            Locale::Ja => &mut self.ja,
            Locale::Zh => &mut self.zh,
        };
        *slot = text.into();
    }
}

pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
