// src/modules/project/adapter/outgoing/project_query_in_memory.rs

use std::sync::Arc;

use crate::modules::project::application::domain::catalog::Catalog;
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectQuery, ProjectQueryError,
};

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectQueryInMemory {
    catalog: Arc<Catalog>,
}

impl ProjectQueryInMemory {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl ProjectQuery for ProjectQueryInMemory {
    fn all(&self) -> &[Project] {
        self.catalog.all()
    }

    fn get_by_id(&self, id: &str) -> Result<&Project, ProjectQueryError> {
        Ok(self.catalog.by_id(id)?)
    }
}
