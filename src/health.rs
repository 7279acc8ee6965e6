use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse<'a> {
    status: &'static str,
    projects: usize,
    default_locale: &'a str,
    supported_locales: &'a [String],
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Catalog is validated before the server binds
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(ReadinessResponse {
        status: "ok",
        projects: data.catalog_size,
        default_locale: &data.locales.default_locale,
        supported_locales: &data.locales.supported_locales,
    })
}
