use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::{shared::api::ApiResponse, AppState};

#[utoipa::path(
    get,
    path = "/api/technologies",
    tag = "projects",
    responses(
        (status = 200, description = "Sorted, deduplicated technology tags", body = inline(SuccessResponse<Vec<String>>),
            example = json!({ "success": true, "data": ["CSS3", "Java 21", "TypeScript"] })
        ),
    )
)]
#[get("/api/technologies")]
pub async fn get_technologies_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.project.get_technologies.execute())
}
