// Translation port.
//
// Given Korean source text and target locales, returns a per-locale map of
// translated text. The model behind it is opaque.

use crate::shared::core::primitives::Locale;
use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("translation failed: {0}")]
    Failed(String),
}

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        targets: &[Locale],
    ) -> Result<HashMap<Locale, String>, TranslationError>;
}

/// Placeholder translator used until a model key is configured. Prefixes the
/// source text with the target locale.
#[derive(Debug, Default, Clone)]
pub struct PrefixTranslator;

#[async_trait]
impl Translator for PrefixTranslator {
    async fn translate(
        &self,
        text: &str,
        targets: &[Locale],
    ) -> Result<HashMap<Locale, String>, TranslationError> {
        Ok(targets
            .iter()
            .map(|locale| {
                let translated = match locale {
                    Locale::Ko => text.to_string(),
                    other => format!("[Translated to {}] {text}", other.code().to_uppercase()),
                };
                (*locale, translated)
            })
            .collect())
    }
}
