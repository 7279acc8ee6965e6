use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;

use tracing::{error, info};

use super::entities::{LocalizedContent, Project};

//
// ──────────────────────────────────────────────────────────
// Policy
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPolicy {
    /// Locales every project must carry a title and description for.
    /// Always contains `DEFAULT_REQUIRED_LOCALES`.
    pub required_locales: Vec<String>,
}

impl CatalogPolicy {
    pub const DEFAULT_REQUIRED_LOCALES: &'static [&'static str] = &["en", "nb"];

    /// Requires `extra_locales` on top of `DEFAULT_REQUIRED_LOCALES`.
    pub fn new<I, S>(extra_locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut required_locales = Self::default().required_locales;
        for locale in extra_locales {
            let locale = locale.into();
            if !required_locales.contains(&locale) {
                required_locales.push(locale);
            }
        }
        Self { required_locales }
    }
}

impl Default for CatalogPolicy {
    fn default() -> Self {
        Self {
            required_locales: Self::DEFAULT_REQUIRED_LOCALES
                .iter()
                .map(|l| l.to_string())
                .collect(),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogViolation {
    EmptyId { position: usize },
    InvalidId { id: String },
    DuplicateId { id: String },
    MissingLocale { id: String, locale: String },
    EmptyRequiredField {
        id: String,
        locale: String,
        field: &'static str,
    },
    LiveWithoutComponent { id: String },
    InvalidDefinition { reason: String },
}

impl fmt::Display for CatalogViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogViolation::EmptyId { position } => {
                write!(f, "project #{} has an empty id", position)
            }
            CatalogViolation::InvalidId { id } => write!(f, "project id '{}' is not URL-safe", id),
            CatalogViolation::DuplicateId { id } => write!(f, "duplicate project id '{}'", id),
            CatalogViolation::MissingLocale { id, locale } => {
                write!(f, "project '{}' has no '{}' translation", id, locale)
            }
            CatalogViolation::EmptyRequiredField { id, locale, field } => {
                write!(f, "project '{}' has an empty {} for '{}'", id, field, locale)
            }
            CatalogViolation::LiveWithoutComponent { id } => {
                write!(f, "live project '{}' has no component", id)
            }
            CatalogViolation::InvalidDefinition { reason } => {
                write!(f, "invalid definition: {}", reason)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid catalog definition: {}", format_violations(.violations))]
    InvalidCatalogDefinition { violations: Vec<CatalogViolation> },
}

impl CatalogError {
    pub fn violations(&self) -> &[CatalogViolation] {
        match self {
            CatalogError::InvalidCatalogDefinition { violations } => violations,
        }
    }
}

fn format_violations(violations: &[CatalogViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogQueryError {
    #[error("Project '{id}' not found")]
    NotFound { id: String },
}

//
// ──────────────────────────────────────────────────────────
// Catalog
// ──────────────────────────────────────────────────────────
//

/// Immutable, validated collection of projects in definition order.
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Vec<Project>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Validates every project. Any violation fails construction, and the
    /// error carries every violation found, not just the first.
    pub fn new(projects: Vec<Project>, policy: &CatalogPolicy) -> Result<Self, CatalogError> {
        let violations = validate(&projects, policy);

        if !violations.is_empty() {
            for violation in &violations {
                error!("Catalog violation: {}", violation);
            }
            return Err(CatalogError::InvalidCatalogDefinition { violations });
        }

        let index = projects
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();

        info!("Catalog loaded with {} projects", projects.len());

        Ok(Self { projects, index })
    }

    pub fn all(&self) -> &[Project] {
        &self.projects
    }

    pub fn by_id(&self, id: &str) -> Result<&Project, CatalogQueryError> {
        self.index
            .get(id)
            .map(|&i| &self.projects[i])
            .ok_or_else(|| CatalogQueryError::NotFound { id: id.to_string() })
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Union of locales across every project.
    pub fn locales(&self) -> BTreeSet<&str> {
        self.projects.iter().flat_map(|p| p.locales()).collect()
    }
}

//
// ──────────────────────────────────────────────────────────
// Validation
// ──────────────────────────────────────────────────────────
//

fn validate(projects: &[Project], policy: &CatalogPolicy) -> Vec<CatalogViolation> {
    let mut violations = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for (position, project) in projects.iter().enumerate() {
        let id = project.id.as_str();

        if id.is_empty() {
            violations.push(CatalogViolation::EmptyId { position });
        } else if !is_url_safe(id) {
            violations.push(CatalogViolation::InvalidId { id: id.to_string() });
        }

        if !id.is_empty() && !seen.insert(id) {
            violations.push(CatalogViolation::DuplicateId { id: id.to_string() });
        }

        if project.is_live()
            && project
                .component
                .as_deref()
                .map_or(true, |c| c.trim().is_empty())
        {
            violations.push(CatalogViolation::LiveWithoutComponent { id: id.to_string() });
        }

        for locale in &policy.required_locales {
            if !project.translations.contains_key(locale) {
                violations.push(CatalogViolation::MissingLocale {
                    id: id.to_string(),
                    locale: locale.clone(),
                });
            }
        }

        for (locale, content) in &project.translations {
            check_required_text(id, locale, content, &mut violations);
        }
    }

    violations
}

fn check_required_text(
    id: &str,
    locale: &str,
    content: &LocalizedContent,
    violations: &mut Vec<CatalogViolation>,
) {
    for (field, value) in [
        ("title", &content.title),
        ("description", &content.description),
    ] {
        if value.trim().is_empty() {
            violations.push(CatalogViolation::EmptyRequiredField {
                id: id.to_string(),
                locale: locale.to_string(),
                field,
            });
        }
    }
}

/// Lowercase ASCII letters, digits, `-` and `_`, starting with a letter or digit.
fn is_url_safe(id: &str) -> bool {
    let mut chars = id.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c.is_ascii_digit() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}
