use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use super::entities::{LocalizedContent, Project, ProjectDetails, ProjectSize, ProjectType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum TextField {
    Title,
    Description,
    Overview,
    TechnicalDetails,
    Features,
    Challenges,
    Outcomes,
    FutureImprovements,
}

impl TextField {
    pub const ALL: [TextField; 8] = [
        TextField::Title,
        TextField::Description,
        TextField::Overview,
        TextField::TechnicalDetails,
        TextField::Features,
        TextField::Challenges,
        TextField::Outcomes,
        TextField::FutureImprovements,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TextField::Title => "title",
            TextField::Description => "description",
            TextField::Overview => "overview",
            TextField::TechnicalDetails => "technicalDetails",
            TextField::Features => "features",
            TextField::Challenges => "challenges",
            TextField::Outcomes => "outcomes",
            TextField::FutureImprovements => "futureImprovements",
        }
    }

    /// Title and description must resolve for every project.
    pub fn is_required(&self) -> bool {
        matches!(self, TextField::Title | TextField::Description)
    }

    fn read<'a>(&self, content: &'a LocalizedContent) -> Option<FieldValue<'a>> {
        match self {
            TextField::Title => Some(FieldValue::Text(&content.title)),
            TextField::Description => Some(FieldValue::Text(&content.description)),
            TextField::Overview => content.overview.as_deref().map(FieldValue::Text),
            TextField::TechnicalDetails => {
                content.technical_details.as_deref().map(FieldValue::Text)
            }
            TextField::Features => content.features.as_deref().map(FieldValue::List),
            TextField::Challenges => content.challenges.as_deref().map(FieldValue::List),
            TextField::Outcomes => content.outcomes.as_deref().map(FieldValue::List),
            TextField::FutureImprovements => {
                content.future_improvements.as_deref().map(FieldValue::List)
            }
        }
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown text field '{0}'")]
pub struct UnknownTextField(pub String);

impl FromStr for TextField {
    type Err = UnknownTextField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownTextField(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue<'a> {
    Text(&'a str),
    List(&'a [String]),
}

/// Outcome of a field lookup. `Missing` is not the same as an empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldResolution<'a> {
    Found {
        value: FieldValue<'a>,
        /// Locale the value was read from; differs from the requested one
        /// when the fallback was used.
        locale: &'a str,
    },
    Missing,
}

impl<'a> FieldResolution<'a> {
    pub fn value(&self) -> Option<FieldValue<'a>> {
        match self {
            FieldResolution::Found { value, .. } => Some(*value),
            FieldResolution::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, FieldResolution::Missing)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslationError {
    #[error(
        "required field {field} of project '{project_id}' is missing for '{locale}' and fallback '{fallback}'"
    )]
    MissingRequiredField {
        project_id: String,
        field: TextField,
        locale: String,
        fallback: String,
    },
}

/// Exact locale, then fallback locale, then `Missing`.
pub fn resolve_field<'a>(
    project: &'a Project,
    field: TextField,
    locale: &str,
    fallback: &str,
) -> FieldResolution<'a> {
    [locale, fallback]
        .into_iter()
        .find_map(|candidate| {
            let (key, content) = project.translations.get_key_value(candidate)?;
            field.read(content).map(|value| FieldResolution::Found {
                value,
                locale: key.as_str(),
            })
        })
        .unwrap_or(FieldResolution::Missing)
}

/// Resolves title or description. A miss here means the catalog let an
/// invalid project through, so it is reported as an internal error.
pub fn resolve_required_text<'a>(
    project: &'a Project,
    field: TextField,
    locale: &str,
    fallback: &str,
) -> Result<&'a str, TranslationError> {
    match resolve_field(project, field, locale, fallback) {
        FieldResolution::Found {
            value: FieldValue::Text(text),
            ..
        } => Ok(text),
        _ => {
            error!(
                "Required field {} missing for project '{}' (locale={}, fallback={})",
                field, project.id, locale, fallback
            );
            Err(TranslationError::MissingRequiredField {
                project_id: project.id.clone(),
                field,
                locale: locale.to_string(),
                fallback: fallback.to_string(),
            })
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Localized read model
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedProject {
    pub id: String,
    /// Locale the caller asked to read.
    pub locale: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenges: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcomes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub future_improvements: Option<Vec<String>>,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub size: ProjectSize,
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<ProjectDetails>,
}

/// Builds the read model for one locale. Each field falls back on its own,
/// so a partially translated locale still renders.
pub fn localize(
    project: &Project,
    locale: &str,
    fallback: &str,
) -> Result<LocalizedProject, TranslationError> {
    let text = |field: TextField| match resolve_field(project, field, locale, fallback) {
        FieldResolution::Found {
            value: FieldValue::Text(t),
            ..
        } => Some(t.to_string()),
        _ => None,
    };
    let list = |field: TextField| match resolve_field(project, field, locale, fallback) {
        FieldResolution::Found {
            value: FieldValue::List(items),
            ..
        } => Some(items.to_vec()),
        _ => None,
    };

    Ok(LocalizedProject {
        id: project.id.clone(),
        locale: locale.to_string(),
        title: resolve_required_text(project, TextField::Title, locale, fallback)?.to_string(),
        description: resolve_required_text(project, TextField::Description, locale, fallback)?
            .to_string(),
        overview: text(TextField::Overview),
        technical_details: text(TextField::TechnicalDetails),
        features: list(TextField::Features),
        challenges: list(TextField::Challenges),
        outcomes: list(TextField::Outcomes),
        future_improvements: list(TextField::FutureImprovements),
        project_type: project.project_type,
        size: project.size,
        technologies: project.technologies.clone(),
        github_url: project.github_url.clone(),
        live_url: project.live_url.clone(),
        component: project.component.clone(),
        image: project.image.clone(),
        featured: project.featured,
        details: project.details.clone(),
    })
}
