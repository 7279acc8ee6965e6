use crate::modules::i18n::ResolvedLocale;
use crate::modules::project::application::domain::translation::LocalizedProject;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetSingleProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Translation failed: {0}")]
    TranslationFailed(String),
}

pub trait GetSingleProjectUseCase: Send + Sync {
    fn execute(
        &self,
        project_id: &str,
        locale: &ResolvedLocale,
    ) -> Result<LocalizedProject, GetSingleProjectError>;
}
