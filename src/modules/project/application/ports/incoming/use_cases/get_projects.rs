use crate::modules::i18n::ResolvedLocale;
use crate::modules::project::application::domain::ordering::ProjectListFilter;
use crate::modules::project::application::domain::translation::{
    LocalizedProject, TranslationError,
};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetProjectsError {
    #[error("Translation failed: {0}")]
    TranslationFailed(String),
}

impl From<TranslationError> for GetProjectsError {
    fn from(err: TranslationError) -> Self {
        GetProjectsError::TranslationFailed(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

pub trait GetProjectsUseCase: Send + Sync {
    /// Filtered, then ordered by size tier.
    fn execute(
        &self,
        filter: ProjectListFilter,
        locale: &ResolvedLocale,
    ) -> Result<Vec<LocalizedProject>, GetProjectsError>;
}
