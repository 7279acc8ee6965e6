mod get_project_field;
mod get_projects;
mod get_single_project;
mod get_technologies;

pub use get_project_field::{
    FieldContent, GetProjectFieldError, GetProjectFieldUseCase, ProjectFieldView,
};
pub use get_projects::{GetProjectsError, GetProjectsUseCase};
pub use get_single_project::{GetSingleProjectError, GetSingleProjectUseCase};
pub use get_technologies::GetTechnologiesUseCase;
