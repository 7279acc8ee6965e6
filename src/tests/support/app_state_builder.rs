use actix_web::web;
use std::sync::Arc;

use crate::modules::i18n::LocaleSettings;
use crate::modules::navigation::application::resolve_route::ResolveRouteUseCase;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectFieldUseCase, GetProjectsUseCase, GetSingleProjectUseCase, GetTechnologiesUseCase,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    project: ProjectUseCases,
    navigation: Arc<dyn ResolveRouteUseCase + Send + Sync>,
    locales: LocaleSettings,
    catalog_size: usize,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            project: ProjectUseCases {
                get_list: Arc::new(DefaultStubGetProjectsUseCase),
                get_single: Arc::new(StubGetSingleProjectUseCase::not_found()),
                get_field: Arc::new(StubGetProjectFieldUseCase),
                get_technologies: Arc::new(StubGetTechnologiesUseCase),
            },
            navigation: Arc::new(StubResolveRouteUseCase),
            locales: LocaleSettings::default(),
            catalog_size: 0,
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_projects(
        mut self,
        uc: impl GetProjectsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_project(
        mut self,
        uc: impl GetSingleProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_single = Arc::new(uc);
        self
    }

    pub fn with_get_project_field(
        mut self,
        uc: impl GetProjectFieldUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_field = Arc::new(uc);
        self
    }

    pub fn with_get_technologies(
        mut self,
        uc: impl GetTechnologiesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_technologies = Arc::new(uc);
        self
    }

    pub fn with_resolve_route(
        mut self,
        uc: impl ResolveRouteUseCase + Send + Sync + 'static,
    ) -> Self {
        self.navigation = Arc::new(uc);
        self
    }

    pub fn with_locales(mut self, locales: LocaleSettings) -> Self {
        self.locales = locales;
        self
    }

    pub fn with_catalog_size(mut self, size: usize) -> Self {
        self.catalog_size = size;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            project: self.project,
            navigation: self.navigation,
            locales: self.locales,
            catalog_size: self.catalog_size,
        })
    }
}
