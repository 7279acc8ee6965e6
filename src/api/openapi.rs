use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::OpenApi;

use crate::modules::navigation::application::site_routes::{RouteMatch, RouteName, SiteRoute};
use crate::modules::project::application::domain::entities::{
    ProjectDetails, ProjectSize, ProjectType,
};
use crate::modules::project::application::domain::translation::{LocalizedProject, TextField};
use crate::modules::project::application::ports::incoming::use_cases::{
    FieldContent, ProjectFieldView,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Catalog API",
        version = "1.0.0",
        description = "Read-only, bilingual catalog of portfolio projects"
    ),
    paths(
        // Project endpoints
        crate::modules::project::adapter::incoming::web::routes::get_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::get_project_by_id_handler,
        crate::modules::project::adapter::incoming::web::routes::get_project_field_handler,
        crate::modules::project::adapter::incoming::web::routes::get_technologies_handler,

        // Navigation endpoints
        crate::modules::navigation::adapter::incoming::web::routes::list_routes_handler,
        crate::modules::navigation::adapter::incoming::web::routes::resolve_route_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<LocalizedProject>,
            ErrorResponse,
            ErrorDetail,

            // Project DTOs
            LocalizedProject,
            ProjectType,
            ProjectSize,
            ProjectDetails,
            TextField,
            FieldContent,
            ProjectFieldView,

            // Navigation DTOs
            RouteName,
            SiteRoute,
            RouteMatch
        )
    ),
    tags(
        (name = "projects", description = "Project catalog endpoints"),
        (name = "navigation", description = "Site route resolution"),
    )
)]
pub struct ApiDoc;
