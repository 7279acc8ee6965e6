use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::i18n::ResolvedLocale;
use crate::modules::project::application::domain::translation::{FieldValue, TextField};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum FieldContent {
    Text(String),
    List(Vec<String>),
}

impl From<FieldValue<'_>> for FieldContent {
    fn from(value: FieldValue<'_>) -> Self {
        match value {
            FieldValue::Text(text) => FieldContent::Text(text.to_string()),
            FieldValue::List(items) => FieldContent::List(items.to_vec()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFieldView {
    pub project_id: String,
    pub field: TextField,
    pub requested_locale: String,
    /// Equals `requested_locale` unless the fallback was used.
    pub resolved_locale: String,
    pub value: FieldContent,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetProjectFieldError {
    #[error("Project not found")]
    ProjectNotFound,

    #[error("Field {0} has no translation")]
    FieldMissing(TextField),

    #[error("Required field missing: {0}")]
    RequiredFieldMissing(String),
}

pub trait GetProjectFieldUseCase: Send + Sync {
    fn execute(
        &self,
        project_id: &str,
        field: TextField,
        locale: &ResolvedLocale,
    ) -> Result<ProjectFieldView, GetProjectFieldError>;
}
