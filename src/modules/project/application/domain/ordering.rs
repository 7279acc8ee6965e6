//! Display ordering and filtering. Every function returns a new view and
//! leaves the input slice untouched.

use std::collections::BTreeSet;

use super::entities::{Project, ProjectType};

/// Stable sort by size tier: large, medium, small. Projects in the same tier
/// keep their definition order.
pub fn sorted_by_size<'a, I>(projects: I) -> Vec<&'a Project>
where
    I: IntoIterator<Item = &'a Project>,
{
    let mut view: Vec<&Project> = projects.into_iter().collect();
    // `sort_by_key` is stable.
    view.sort_by_key(|p| p.size.rank());
    view
}

pub fn filter_by_type(projects: &[Project], project_type: ProjectType) -> Vec<&Project> {
    projects
        .iter()
        .filter(|p| has_type(p, project_type))
        .collect()
}

pub fn filter_featured(projects: &[Project]) -> Vec<&Project> {
    projects.iter().filter(|p| p.featured).collect()
}

/// Exact, case-sensitive tag match.
pub fn filter_by_technology<'a>(projects: &'a [Project], technology: &str) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|p| uses_technology(p, technology))
        .collect()
}

fn has_type(project: &Project, project_type: ProjectType) -> bool {
    project.project_type == project_type
}

fn uses_technology(project: &Project, technology: &str) -> bool {
    project.technologies.iter().any(|t| t == technology)
}

pub fn technologies_used(projects: &[Project]) -> BTreeSet<String> {
    projects
        .iter()
        .flat_map(|p| p.technologies.iter().cloned())
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectListFilter {
    pub project_type: Option<ProjectType>,
    pub featured_only: bool,
    pub technology: Option<String>,
}

impl ProjectListFilter {
    pub fn matches(&self, project: &Project) -> bool {
        self.project_type.map_or(true, |t| has_type(project, t))
            && (!self.featured_only || project.featured)
            && self
                .technology
                .as_deref()
                .map_or(true, |tech| uses_technology(project, tech))
    }
}

/// Keeps input order. Agrees with chaining the single-criterion filters.
pub fn apply_filter<'a>(projects: &'a [Project], filter: &ProjectListFilter) -> Vec<&'a Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}
