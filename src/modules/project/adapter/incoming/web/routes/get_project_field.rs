use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::i18n::RequestLocale;
use crate::modules::project::application::domain::translation::TextField;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectFieldError, ProjectFieldView,
};
use crate::{shared::api::ApiResponse, AppState};

#[utoipa::path(
    get,
    path = "/api/projects/{project_id}/fields/{field}",
    tag = "projects",
    params(
        ("project_id" = String, Path, description = "Project identifier"),
        ("field" = String, Path, description = "title, description, overview, technicalDetails, features, challenges, outcomes or futureImprovements"),
        ("locale" = Option<String>, Query, description = "Locale code, e.g. en or nb"),
    ),
    responses(
        (status = 200, description = "Field value and the locale it came from", body = inline(SuccessResponse<ProjectFieldView>)),
        (status = 400, description = "Unknown field name", body = ErrorResponse),
        (status = 404, description = "Project not found or field has no translation", body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "FIELD_MISSING", "message": "Field overview has no translation" }
            })
        ),
        (status = 500, description = "Required field missing in both locales", body = ErrorResponse),
    )
)]
#[get("/api/projects/{project_id}/fields/{field}")]
pub async fn get_project_field_handler(
    path: web::Path<(String, String)>,
    locale: RequestLocale,
    data: web::Data<AppState>,
) -> impl Responder {
    let (project_id, raw_field) = path.into_inner();

    let field = match raw_field.parse::<TextField>() {
        Ok(field) => field,
        Err(e) => return ApiResponse::bad_request("UNKNOWN_FIELD", &e.to_string()),
    };

    match data
        .project
        .get_field
        .execute(&project_id, field, &locale.into_inner())
    {
        Ok(view) => ApiResponse::success(view),

        Err(GetProjectFieldError::ProjectNotFound) => ApiResponse::not_found(
            "PROJECT_NOT_FOUND",
            &format!("No project with id '{}'", project_id),
        ),

        Err(e @ GetProjectFieldError::FieldMissing(_)) => {
            ApiResponse::not_found("FIELD_MISSING", &e.to_string())
        }

        Err(GetProjectFieldError::RequiredFieldMissing(msg)) => {
            error!("Catalog integrity violated: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value as JsonValue;
    use std::sync::{Arc, Mutex};

    use crate::modules::i18n::ResolvedLocale;
    use crate::modules::project::application::ports::incoming::use_cases::{
        FieldContent, GetProjectFieldUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    /* --------------------------------------------------
     * Mock GetProjectField Use Case
     * -------------------------------------------------- */

    #[derive(Clone)]
    struct MockGetProjectFieldUseCase {
        result: Result<ProjectFieldView, GetProjectFieldError>,
        seen_field: Arc<Mutex<Option<TextField>>>,
    }

    impl MockGetProjectFieldUseCase {
        fn new(result: Result<ProjectFieldView, GetProjectFieldError>) -> Self {
            Self {
                result,
                seen_field: Arc::default(),
            }
        }
    }

    impl GetProjectFieldUseCase for MockGetProjectFieldUseCase {
        fn execute(
            &self,
            _project_id: &str,
            field: TextField,
            _locale: &ResolvedLocale,
        ) -> Result<ProjectFieldView, GetProjectFieldError> {
            *self.seen_field.lock().unwrap() = Some(field);
            self.result.clone()
        }
    }

    fn features_view() -> ProjectFieldView {
        ProjectFieldView {
            project_id: "biddingwars".to_string(),
            field: TextField::Features,
            requested_locale: "nb".to_string(),
            resolved_locale: "en".to_string(),
            value: FieldContent::List(vec!["JWT auth".to_string()]),
        }
    }

    async fn call(mock: MockGetProjectFieldUseCase, uri: &str) -> (StatusCode, JsonValue) {
        let app_state = TestAppStateBuilder::default()
            .with_get_project_field(mock)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_project_field_handler),
        )
        .await;

        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: JsonValue = test::read_body_json(resp).await;

        (status, body)
    }

    #[actix_web::test]
    async fn test_get_project_field_success_with_fallback() {
        let mock = MockGetProjectFieldUseCase::new(Ok(features_view()));

        let (status, body) = call(
            mock.clone(),
            "/api/projects/biddingwars/fields/features",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["field"], "features");
        assert_eq!(body["data"]["requestedLocale"], "nb");
        assert_eq!(body["data"]["resolvedLocale"], "en");
        assert_eq!(body["data"]["value"][0], "JWT auth");
        assert_eq!(*mock.seen_field.lock().unwrap(), Some(TextField::Features));
    }

    #[actix_web::test]
    async fn test_get_project_field_parses_camel_case_name() {
        let mock = MockGetProjectFieldUseCase::new(Ok(features_view()));

        let (status, _) = call(
            mock.clone(),
            "/api/projects/biddingwars/fields/technicalDetails",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            *mock.seen_field.lock().unwrap(),
            Some(TextField::TechnicalDetails)
        );
    }

    #[actix_web::test]
    async fn test_get_project_field_unknown_field() {
        let mock = MockGetProjectFieldUseCase::new(Ok(features_view()));

        let (status, body) = call(mock.clone(), "/api/projects/biddingwars/fields/summary").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "UNKNOWN_FIELD");
        assert!(mock.seen_field.lock().unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_get_project_field_missing() {
        let mock = MockGetProjectFieldUseCase::new(Err(GetProjectFieldError::FieldMissing(
            TextField::Overview,
        )));

        let (status, body) = call(mock, "/api/projects/json2csv/fields/overview").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "FIELD_MISSING");
    }

    #[actix_web::test]
    async fn test_get_project_field_project_not_found() {
        let mock = MockGetProjectFieldUseCase::new(Err(GetProjectFieldError::ProjectNotFound));

        let (status, body) = call(mock, "/api/projects/nope/fields/title").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "PROJECT_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_get_project_field_required_missing_is_internal_error() {
        let mock = MockGetProjectFieldUseCase::new(Err(
            GetProjectFieldError::RequiredFieldMissing("title".to_string()),
        ));

        let (status, body) = call(mock, "/api/projects/broken/fields/title").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
