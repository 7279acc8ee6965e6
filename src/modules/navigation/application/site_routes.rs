use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectQuery, ProjectQueryError,
};

/// View rendered for showcase project pages.
pub const SHOWCASE_VIEW: &str = "ProjectShowcase";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum RouteName {
    Home,
    Projects,
    ProjectDetail,
    About,
    Contact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct SiteRoute {
    pub name: RouteName,
    pub path: &'static str,
    /// `None` when the view depends on the matched project.
    pub view: Option<&'static str>,
}

// About and contact still render the main page.
pub const SITE_ROUTES: &[SiteRoute] = &[
    SiteRoute {
        name: RouteName::Home,
        path: "/",
        view: Some("MainSite"),
    },
    SiteRoute {
        name: RouteName::Projects,
        path: "/projects",
        view: Some("Projects"),
    },
    SiteRoute {
        name: RouteName::ProjectDetail,
        path: "/projects/{id}",
        view: None,
    },
    SiteRoute {
        name: RouteName::About,
        path: "/about",
        view: Some("MainSite"),
    },
    SiteRoute {
        name: RouteName::Contact,
        path: "/contact",
        view: Some("MainSite"),
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RouteMatch {
    pub name: RouteName,
    pub path: String,
    pub view: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("No route matches '{0}'")]
    UnknownRoute(String),

    #[error("Project '{0}' not found")]
    ProjectNotFound(String),
}

/// Drops query string, fragment and trailing slashes. `""` becomes `/`.
fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

pub fn resolve_path<Q>(path: &str, query: &Q) -> Result<RouteMatch, NavigationError>
where
    Q: ProjectQuery + ?Sized,
{
    let normalized = normalize_path(path);

    if let Some(route) = SITE_ROUTES
        .iter()
        .find(|r| r.view.is_some() && r.path == normalized)
    {
        return Ok(RouteMatch {
            name: route.name,
            path: normalized,
            view: route.view.unwrap_or_default().to_string(),
            project_id: None,
        });
    }

    let segments: Vec<&str> = normalized.trim_start_matches('/').split('/').collect();
    match segments.as_slice() {
        ["projects", id] => {
            let project = query.get_by_id(id).map_err(|e| match e {
                ProjectQueryError::NotFound => NavigationError::ProjectNotFound(id.to_string()),
            })?;

            let view = if project.is_live() {
                project.component.clone().unwrap_or_default()
            } else {
                SHOWCASE_VIEW.to_string()
            };

            Ok(RouteMatch {
                name: RouteName::ProjectDetail,
                path: normalized.clone(),
                view,
                project_id: Some(project.id.clone()),
            })
        }
        _ => Err(NavigationError::UnknownRoute(normalized.clone())),
    }
}
