use crate::modules::i18n::ResolvedLocale;
use crate::modules::project::application::domain::translation::{
    resolve_field, resolve_required_text, FieldResolution, TextField,
};
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectFieldError, GetProjectFieldUseCase, ProjectFieldView,
};
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectQuery, ProjectQueryError,
};

pub struct GetProjectFieldService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectFieldService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

impl<Q> GetProjectFieldUseCase for GetProjectFieldService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    fn execute(
        &self,
        project_id: &str,
        field: TextField,
        locale: &ResolvedLocale,
    ) -> Result<ProjectFieldView, GetProjectFieldError> {
        let project = self.query.get_by_id(project_id).map_err(|e| match e {
            ProjectQueryError::NotFound => GetProjectFieldError::ProjectNotFound,
        })?;

        if field.is_required() {
            resolve_required_text(project, field, &locale.locale, &locale.fallback)
                .map_err(|e| GetProjectFieldError::RequiredFieldMissing(e.to_string()))?;
        }

        match resolve_field(project, field, &locale.locale, &locale.fallback) {
            FieldResolution::Found {
                value,
                locale: resolved,
            } => Ok(ProjectFieldView {
                project_id: project.id.clone(),
                field,
                requested_locale: locale.locale.clone(),
                resolved_locale: resolved.to_string(),
                value: value.into(),
            }),
            FieldResolution::Missing => Err(GetProjectFieldError::FieldMissing(field)),
        }
    }
}
