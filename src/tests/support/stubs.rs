use crate::modules::i18n::ResolvedLocale;
use crate::modules::navigation::application::resolve_route::ResolveRouteUseCase;
use crate::modules::navigation::application::site_routes::{NavigationError, RouteMatch};
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::domain::ordering::ProjectListFilter;
use crate::modules::project::application::domain::translation::{LocalizedProject, TextField};
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectFieldError, GetProjectFieldUseCase, GetProjectsError, GetProjectsUseCase,
    GetSingleProjectError, GetSingleProjectUseCase, GetTechnologiesUseCase, ProjectFieldView,
};
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectQuery, ProjectQueryError,
};

/* --------------------------------------------------
 * Outgoing port stubs
 * -------------------------------------------------- */

/// Unvalidated in-memory query over a fixed list.
#[derive(Debug, Clone, Default)]
pub struct FixedProjectQuery {
    projects: Vec<Project>,
}

impl FixedProjectQuery {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }
}

impl ProjectQuery for FixedProjectQuery {
    fn all(&self) -> &[Project] {
        &self.projects
    }

    fn get_by_id(&self, id: &str) -> Result<&Project, ProjectQueryError> {
        self.projects
            .iter()
            .find(|p| p.id == id)
            .ok_or(ProjectQueryError::NotFound)
    }
}

/* --------------------------------------------------
 * Use case stubs
 * -------------------------------------------------- */

pub struct DefaultStubGetProjectsUseCase;

impl GetProjectsUseCase for DefaultStubGetProjectsUseCase {
    fn execute(
        &self,
        _filter: ProjectListFilter,
        _locale: &ResolvedLocale,
    ) -> Result<Vec<LocalizedProject>, GetProjectsError> {
        Ok(vec![])
    }
}

#[derive(Clone)]
pub struct StubGetSingleProjectUseCase {
    result: Result<LocalizedProject, GetSingleProjectError>,
}

impl StubGetSingleProjectUseCase {
    pub fn not_found() -> Self {
        Self {
            result: Err(GetSingleProjectError::NotFound),
        }
    }
}

impl GetSingleProjectUseCase for StubGetSingleProjectUseCase {
    fn execute(
        &self,
        _project_id: &str,
        _locale: &ResolvedLocale,
    ) -> Result<LocalizedProject, GetSingleProjectError> {
        self.result.clone()
    }
}

pub struct StubGetProjectFieldUseCase;

impl GetProjectFieldUseCase for StubGetProjectFieldUseCase {
    fn execute(
        &self,
        _project_id: &str,
        _field: TextField,
        _locale: &ResolvedLocale,
    ) -> Result<ProjectFieldView, GetProjectFieldError> {
        Err(GetProjectFieldError::ProjectNotFound)
    }
}

pub struct StubGetTechnologiesUseCase;

impl GetTechnologiesUseCase for StubGetTechnologiesUseCase {
    fn execute(&self) -> Vec<String> {
        vec![]
    }
}

pub struct StubResolveRouteUseCase;

impl ResolveRouteUseCase for StubResolveRouteUseCase {
    fn execute(&self, path: &str) -> Result<RouteMatch, NavigationError> {
        Err(NavigationError::UnknownRoute(path.to_string()))
    }
}
