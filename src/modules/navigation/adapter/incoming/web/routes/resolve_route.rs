use actix_web::{get, web, Responder};
use serde::Deserialize;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::navigation::application::site_routes::{NavigationError, RouteMatch, SiteRoute};
use crate::{shared::api::ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub struct ResolveRouteQuery {
    pub path: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/routes",
    tag = "navigation",
    responses(
        (status = 200, description = "Route table of the site", body = inline(SuccessResponse<Vec<SiteRoute>>)),
    )
)]
#[get("/api/routes")]
pub async fn list_routes_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.navigation.routes())
}

#[utoipa::path(
    get,
    path = "/api/routes/resolve",
    tag = "navigation",
    params(
        ("path" = String, Query, description = "Site path, e.g. /projects/json2csv"),
    ),
    responses(
        (status = 200, description = "Matched route and view", body = inline(SuccessResponse<RouteMatch>),
            example = json!({
                "success": true,
                "data": {
                    "name": "project-detail",
                    "path": "/projects/json2csv",
                    "view": "ProjectJson2CSV",
                    "projectId": "json2csv"
                }
            })
        ),
        (status = 400, description = "Missing path", body = ErrorResponse),
        (status = 404, description = "No route or project matches", body = ErrorResponse),
    )
)]
#[get("/api/routes/resolve")]
pub async fn resolve_route_handler(
    query: web::Query<ResolveRouteQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(path) = query.into_inner().path else {
        return ApiResponse::bad_request("INVALID_QUERY", "Query parameter 'path' is required");
    };

    match data.navigation.execute(&path) {
        Ok(matched) => ApiResponse::success(matched),

        Err(e @ NavigationError::UnknownRoute(_)) => {
            ApiResponse::not_found("ROUTE_NOT_FOUND", &e.to_string())
        }

        Err(e @ NavigationError::ProjectNotFound(_)) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", &e.to_string())
        }
    }
}
