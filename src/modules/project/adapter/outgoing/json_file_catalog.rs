// src/modules/project/adapter/outgoing/json_file_catalog.rs

use std::path::PathBuf;

use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::catalog_source::{
    CatalogSource, CatalogSourceError,
};

/// Reads a JSON array of project definitions from disk.
#[derive(Debug, Clone)]
pub struct JsonFileCatalogSource {
    path: PathBuf,
}

impl JsonFileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for JsonFileCatalogSource {
    async fn load(&self) -> Result<Vec<Project>, CatalogSourceError> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
