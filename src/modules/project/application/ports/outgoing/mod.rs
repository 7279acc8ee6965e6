pub mod catalog_source;
pub mod project_query;
