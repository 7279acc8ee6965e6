use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `live` projects embed an interactive tool, `showcase` projects are
/// narrative pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Live,
    Showcase,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Live => "live",
            ProjectType::Showcase => "showcase",
        }
    }
}

/// Presentation tier. Only drives the default display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProjectSize {
    Large,
    Medium,
    Small,
}

impl ProjectSize {
    /// Sort rank: large=0 < medium=1 < small=2.
    pub fn rank(&self) -> u8 {
        match self {
            ProjectSize::Large => 0,
            ProjectSize::Medium => 1,
            ProjectSize::Small => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectSize::Large => "large",
            ProjectSize::Medium => "medium",
            ProjectSize::Small => "small",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseEnumError {
    #[error("unknown project type '{0}' (expected live or showcase)")]
    ProjectType(String),

    #[error("unknown project size '{0}' (expected large, medium or small)")]
    ProjectSize(String),
}

impl FromStr for ProjectType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "live" => Ok(ProjectType::Live),
            "showcase" => Ok(ProjectType::Showcase),
            other => Err(ParseEnumError::ProjectType(other.to_string())),
        }
    }
}

impl FromStr for ProjectSize {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "large" => Ok(ProjectSize::Large),
            "medium" => Ok(ProjectSize::Medium),
            "small" => Ok(ProjectSize::Small),
            other => Err(ParseEnumError::ProjectSize(other.to_string())),
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ProjectSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text of one project in one locale.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedContent {
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
}

impl LocalizedContent {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Default::default()
        }
    }
}

/// Locale code -> text payload. One bundle per project.
pub type TranslationBundle = BTreeMap<String, LocalizedContent>;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct ProjectDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    #[schema(value_type = Object)]
    pub translations: TranslationBundle,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub size: ProjectSize,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<ProjectDetails>,
}

impl Project {
    /// Locales this project carries text for.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.translations.keys().map(String::as_str)
    }

    pub fn content(&self, locale: &str) -> Option<&LocalizedContent> {
        self.translations.get(locale)
    }

    pub fn is_live(&self) -> bool {
        self.project_type == ProjectType::Live
    }
}
