use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::i18n::RequestLocale;
use crate::modules::project::application::domain::entities::{ParseEnumError, ProjectType};
use crate::modules::project::application::domain::ordering::ProjectListFilter;
use crate::modules::project::application::domain::translation::LocalizedProject;
use crate::modules::project::application::ports::incoming::use_cases::GetProjectsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct GetProjectsQuery {
    #[serde(rename = "type")]
    pub project_type: Option<String>,

    #[serde(default)]
    pub featured: bool,

    pub technology: Option<String>,
}

impl TryFrom<GetProjectsQuery> for ProjectListFilter {
    type Error = ParseEnumError;

    fn try_from(q: GetProjectsQuery) -> Result<Self, Self::Error> {
        let project_type = q
            .project_type
            .as_deref()
            .map(str::parse::<ProjectType>)
            .transpose()?;

        Ok(ProjectListFilter {
            project_type,
            featured_only: q.featured,
            technology: q.technology.filter(|t| !t.trim().is_empty()),
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    params(
        ("type" = Option<String>, Query, description = "live or showcase"),
        ("featured" = Option<bool>, Query, description = "Only featured projects"),
        ("technology" = Option<String>, Query, description = "Exact technology tag"),
        ("locale" = Option<String>, Query, description = "Locale code, e.g. en or nb"),
    ),
    responses(
        (status = 200, description = "Projects ordered by size tier", body = inline(SuccessResponse<Vec<LocalizedProject>>)),
        (status = 400, description = "Invalid filter", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(
    query: web::Query<GetProjectsQuery>,
    locale: RequestLocale,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = match ProjectListFilter::try_from(query.into_inner()) {
        Ok(filter) => filter,
        Err(e) => return ApiResponse::bad_request("INVALID_QUERY", &e.to_string()),
    };

    match data.project.get_list.execute(filter, &locale.into_inner()) {
        Ok(projects) => ApiResponse::success(projects),

        Err(GetProjectsError::TranslationFailed(msg)) => {
            error!("Failed to list projects: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
