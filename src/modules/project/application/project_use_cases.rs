use std::sync::Arc;

use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectFieldUseCase, GetProjectsUseCase, GetSingleProjectUseCase, GetTechnologiesUseCase,
};

#[derive(Clone)]
pub struct ProjectUseCases {
    pub get_list: Arc<dyn GetProjectsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleProjectUseCase + Send + Sync>,
    pub get_field: Arc<dyn GetProjectFieldUseCase + Send + Sync>,
    pub get_technologies: Arc<dyn GetTechnologiesUseCase + Send + Sync>,
}
