// src/modules/project/application/ports/outgoing/project_query.rs

use crate::modules::project::application::domain::catalog::CatalogQueryError;
use crate::modules::project::application::domain::entities::Project;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Project not found")]
    NotFound,
}

impl From<CatalogQueryError> for ProjectQueryError {
    fn from(err: CatalogQueryError) -> Self {
        match err {
            CatalogQueryError::NotFound { .. } => ProjectQueryError::NotFound,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Port (read-only, in-memory)
// ──────────────────────────────────────────────────────────
//

pub trait ProjectQuery: Send + Sync {
    /// Every project in definition order.
    fn all(&self) -> &[Project];

    /// Exact id match.
    fn get_by_id(&self, id: &str) -> Result<&Project, ProjectQueryError>;
}
