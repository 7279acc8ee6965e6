use crate::modules::i18n::ResolvedLocale;
use crate::modules::project::application::domain::ordering::{
    apply_filter, sorted_by_size, ProjectListFilter,
};
use crate::modules::project::application::domain::translation::{localize, LocalizedProject};
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectsError, GetProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::project_query::ProjectQuery;

// ============================================================================
// Service Implementation
// ============================================================================

pub struct GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

impl<Q> GetProjectsUseCase for GetProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    fn execute(
        &self,
        filter: ProjectListFilter,
        locale: &ResolvedLocale,
    ) -> Result<Vec<LocalizedProject>, GetProjectsError> {
        let matching = apply_filter(self.query.all(), &filter);

        sorted_by_size(matching)
            .into_iter()
            .map(|project| {
                localize(project, &locale.locale, &locale.fallback).map_err(GetProjectsError::from)
            })
            .collect()
    }
}
