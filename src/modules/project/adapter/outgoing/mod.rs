mod json_file_catalog;
mod project_query_in_memory;
mod static_catalog;

pub use json_file_catalog::JsonFileCatalogSource;
pub use project_query_in_memory::ProjectQueryInMemory;
pub use static_catalog::{site_projects, StaticCatalogSource};
