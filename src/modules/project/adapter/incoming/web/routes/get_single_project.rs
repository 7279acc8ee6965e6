use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::i18n::RequestLocale;
use crate::modules::project::application::domain::translation::LocalizedProject;
use crate::modules::project::application::ports::incoming::use_cases::GetSingleProjectError;
use crate::{shared::api::ApiResponse, AppState};

#[utoipa::path(
    get,
    path = "/api/projects/{project_id}",
    tag = "projects",
    params(
        ("project_id" = String, Path, description = "Project identifier, e.g. biddingwars"),
        ("locale" = Option<String>, Query, description = "Locale code, e.g. en or nb"),
    ),
    responses(
        (status = 200, description = "Localized project", body = inline(SuccessResponse<LocalizedProject>)),
        (status = 404, description = "Project not found", body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "PROJECT_NOT_FOUND", "message": "No project with id 'nope'" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/projects/{project_id}")]
pub async fn get_project_by_id_handler(
    path: web::Path<String>,
    locale: RequestLocale,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data
        .project
        .get_single
        .execute(&project_id, &locale.into_inner())
    {
        Ok(project) => ApiResponse::success(project),

        Err(GetSingleProjectError::NotFound) => ApiResponse::not_found(
            "PROJECT_NOT_FOUND",
            &format!("No project with id '{}'", project_id),
        ),

        Err(GetSingleProjectError::TranslationFailed(msg)) => {
            error!("Failed to localize project {}: {}", project_id, msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value as JsonValue;

    use crate::modules::i18n::ResolvedLocale;
    use crate::modules::project::application::ports::incoming::use_cases::GetSingleProjectUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::project_test_fixtures::localized_project;

    /* --------------------------------------------------
     * Mock GetSingleProject Use Case
     * -------------------------------------------------- */

    #[derive(Clone)]
    struct MockGetSingleProjectUseCase {
        result: Result<LocalizedProject, GetSingleProjectError>,
    }

    impl GetSingleProjectUseCase for MockGetSingleProjectUseCase {
        fn execute(
            &self,
            _project_id: &str,
            _locale: &ResolvedLocale,
        ) -> Result<LocalizedProject, GetSingleProjectError> {
            self.result.clone()
        }
    }

    async fn call(
        result: Result<LocalizedProject, GetSingleProjectError>,
        uri: &str,
    ) -> (StatusCode, JsonValue) {
        let app_state = TestAppStateBuilder::default()
            .with_get_single_project(MockGetSingleProjectUseCase { result })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_project_by_id_handler),
        )
        .await;

        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: JsonValue = test::read_body_json(resp).await;

        (status, body)
    }

    #[actix_web::test]
    async fn test_get_project_by_id_success() {
        let (status, body) = call(
            Ok(localized_project("biddingwars")),
            "/api/projects/biddingwars?locale=en",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["id"], "biddingwars");
        assert_eq!(body["data"]["type"], "showcase");
        assert_eq!(body["data"]["title"], "biddingwars (nb)");
    }

    #[actix_web::test]
    async fn test_get_project_by_id_not_found() {
        let (status, body) = call(Err(GetSingleProjectError::NotFound), "/api/projects/nope").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "PROJECT_NOT_FOUND");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("nope"));
    }

    #[actix_web::test]
    async fn test_get_project_by_id_translation_failure() {
        let (status, body) = call(
            Err(GetSingleProjectError::TranslationFailed(
                "description".to_string(),
            )),
            "/api/projects/broken",
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
