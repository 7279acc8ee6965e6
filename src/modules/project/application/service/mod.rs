mod get_project_field_service;
mod get_projects_service;
mod get_single_project_service;
mod get_technologies_service;
mod load_catalog_service;

pub use get_project_field_service::GetProjectFieldService;
pub use get_projects_service::GetProjectsService;
pub use get_single_project_service::GetSingleProjectService;
pub use get_technologies_service::GetTechnologiesService;
pub use load_catalog_service::{load_catalog, LoadCatalogError};
