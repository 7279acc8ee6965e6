// src/modules/project/application/ports/outgoing/catalog_source.rs

use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;

#[derive(Debug, thiserror::Error)]
pub enum CatalogSourceError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Yields the raw project definitions once, before any query is served.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Result<Vec<Project>, CatalogSourceError>;

    /// Where the definitions come from, for startup logs.
    fn describe(&self) -> String;
}
