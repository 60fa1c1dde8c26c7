// Fills the non-Korean locales of a project form from its Korean source.

use crate::modules::access::core::permissions::can_create;
use crate::modules::access::core::state::AccessState;
use crate::modules::catalog::adapters::outbound::translator::{TranslationError, Translator};
use crate::modules::catalog::core::project::Project;
use crate::shared::core::primitives::{Locale, LocalizedText};
use std::sync::Arc;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum TranslateProjectError {
    #[error("not allowed to edit projects")]
    Forbidden,

    #[error("no Korean text to translate")]
    NothingToTranslate,

    #[error(transparent)]
    Translation(#[from] TranslationError),
}

pub struct TranslateProjectHandler {
    translator: Arc<dyn Translator>,
}

impl TranslateProjectHandler {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self { translator }
    }

    /// Translates title, description and every member name. Fields without
    /// Korean text are left untouched.
    pub async fn handle(
        &self,
        access: &AccessState,
        mut project: Project,
    ) -> Result<Project, TranslateProjectError> {
        if !can_create(access) {
            return Err(TranslateProjectError::Forbidden);
        }
        let has_source = !project.title.ko.trim().is_empty()
            || !project.description.ko.trim().is_empty()
            || project.members.iter().any(|m| !m.name.ko.trim().is_empty());
        if !has_source {
            return Err(TranslateProjectError::NothingToTranslate);
        }

        self.fill(&mut project.title).await?;
        self.fill(&mut project.description).await?;
        for member in project.members.iter_mut() {
            self.fill(&mut member.name).await?;
        }
        Ok(project)
    }

    async fn fill(&self, text: &mut LocalizedText) -> Result<(), TranslateProjectError> {
        if text.ko.trim().is_empty() {
            return Ok(());
        }
        let translations = self
            .translator
            .translate(&text.ko, &Locale::TRANSLATION_TARGETS)
            .await
            .inspect_err(|e| error!(error = %e, "translation failed"))?;
        for (locale, translated) in translations {
            if locale != Locale::Ko {
                text.set(locale, translated);
            }
        }
        Ok(())
    }
}
