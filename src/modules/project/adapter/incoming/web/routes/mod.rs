mod get_project_field;
mod get_projects;
mod get_single_project;
mod get_technologies;

pub use get_project_field::*;
pub use get_projects::*;
pub use get_single_project::*;
pub use get_technologies::*;
