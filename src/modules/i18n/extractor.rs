use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest};
use serde::Deserialize;
use std::future::{ready, Ready};

use crate::modules::i18n::ResolvedLocale;
use crate::{shared::api::ApiResponse, AppState};

#[derive(Debug, Deserialize)]
struct LocaleQuery {
    locale: Option<String>,
}

/// Locale pair for the current request: `?locale=`, then `Accept-Language`,
/// then the configured default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLocale(pub ResolvedLocale);

impl RequestLocale {
    pub fn into_inner(self) -> ResolvedLocale {
        self.0
    }
}

impl FromRequest for RequestLocale {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let data = match req.app_data::<web::Data<AppState>>() {
            Some(data) => data,
            None => {
                return ready(Err(actix_web::error::InternalError::from_response(
                    "",
                    ApiResponse::internal_error(),
                )
                .into()));
            }
        };

        let requested = web::Query::<LocaleQuery>::from_query(req.query_string())
            .ok()
            .and_then(|q| q.into_inner().locale);

        let accept_language = req
            .headers()
            .get("Accept-Language")
            .and_then(|v| v.to_str().ok());

        ready(Ok(RequestLocale(
            data.locales
                .resolve(requested.as_deref(), accept_language),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, http::StatusCode, test, App, HttpResponse, Responder};

    use crate::modules::i18n::LocaleSettings;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[get("/echo")]
    async fn echo(locale: RequestLocale) -> impl Responder {
        let resolved = locale.into_inner();
        HttpResponse::Ok().body(format!("{}|{}", resolved.locale, resolved.fallback))
    }

    async fn call(settings: LocaleSettings, req: test::TestRequest) -> String {
        let app_state = TestAppStateBuilder::default()
            .with_locales(settings)
            .build();
        let app = test::init_service(App::new().app_data(app_state).service(echo)).await;

        let resp = test::call_service(&app, req.to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        String::from_utf8(test::read_body(resp).await.to_vec()).unwrap()
    }

    #[actix_web::test]
    async fn defaults_without_hints() {
        let body = call(LocaleSettings::default(), test::TestRequest::get().uri("/echo")).await;

        assert_eq!(body, "nb|en");
    }

    #[actix_web::test]
    async fn query_parameter_beats_header() {
        let req = test::TestRequest::get()
            .uri("/echo?locale=nb-NO")
            .insert_header(("Accept-Language", "en"));

        assert_eq!(call(LocaleSettings::default(), req).await, "nb|en");
    }

    #[actix_web::test]
    async fn unsupported_query_falls_through_to_header() {
        let req = test::TestRequest::get()
            .uri("/echo?locale=de")
            .insert_header(("Accept-Language", "de;q=1, en;q=0.5"));

        assert_eq!(call(LocaleSettings::default(), req).await, "en|en");
    }

    #[actix_web::test]
    async fn uses_configured_default() {
        let settings = LocaleSettings::new("en", "nb", &["en", "nb"]).unwrap();

        let body = call(settings, test::TestRequest::get().uri("/echo")).await;

        assert_eq!(body, "en|nb");
    }

    #[actix_web::test]
    async fn missing_state_is_internal_error() {
        let app = test::init_service(App::new().service(echo)).await;

        let req = test::TestRequest::get().uri("/echo").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
