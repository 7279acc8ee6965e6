use crate::modules::i18n::ResolvedLocale;
use crate::modules::project::application::domain::translation::{localize, LocalizedProject};
use crate::modules::project::application::ports::incoming::use_cases::{
    GetSingleProjectError, GetSingleProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectQuery, ProjectQueryError,
};

pub struct GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

impl<Q> GetSingleProjectUseCase for GetSingleProjectService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    fn execute(
        &self,
        project_id: &str,
        locale: &ResolvedLocale,
    ) -> Result<LocalizedProject, GetSingleProjectError> {
        let project = self.query.get_by_id(project_id).map_err(|e| match e {
            ProjectQueryError::NotFound => GetSingleProjectError::NotFound,
        })?;

        localize(project, &locale.locale, &locale.fallback)
            .map_err(|e| GetSingleProjectError::TranslationFailed(e.to_string()))
    }
}
