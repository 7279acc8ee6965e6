pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

use crate::config::ServerConfig;
use crate::modules::i18n::LocaleSettings;
use crate::modules::navigation::application::resolve_route::{
    ResolveRouteService, ResolveRouteUseCase,
};
use crate::modules::project::adapter::outgoing::{
    JsonFileCatalogSource, ProjectQueryInMemory, StaticCatalogSource,
};
use crate::modules::project::application::domain::catalog::CatalogPolicy;
use crate::modules::project::application::ports::outgoing::catalog_source::CatalogSource;
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::project::application::service::{
    load_catalog, GetProjectFieldService, GetProjectsService, GetSingleProjectService,
    GetTechnologiesService,
};
use crate::shared::api::custom_query_config;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub project: ProjectUseCases,
    pub navigation: Arc<dyn ResolveRouteUseCase + Send + Sync>,
    pub locales: LocaleSettings,
    pub catalog_size: usize,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let server_config = ServerConfig::from_env()?;
    let locales = LocaleSettings::from_env()?;

    // Catalog must validate before anything is served
    let source: Box<dyn CatalogSource> = match &server_config.catalog_path {
        Some(path) => Box::new(JsonFileCatalogSource::new(path.clone())),
        None => Box::new(StaticCatalogSource),
    };
    let policy = CatalogPolicy::new(locales.supported_locales.clone());

    let catalog = load_catalog(source.as_ref(), &policy)
        .await
        .inspect_err(|e| error!("Refusing to start: {}", e))
        .with_context(|| format!("loading catalog from {}", source.describe()))?;

    let catalog_size = catalog.len();
    info!("Catalog locales: {:?}", catalog.locales());
    let project_query = ProjectQueryInMemory::new(Arc::new(catalog));

    let state = AppState {
        project: ProjectUseCases {
            get_list: Arc::new(GetProjectsService::new(project_query.clone())),
            get_single: Arc::new(GetSingleProjectService::new(project_query.clone())),
            get_field: Arc::new(GetProjectFieldService::new(project_query.clone())),
            get_technologies: Arc::new(GetTechnologiesService::new(project_query.clone())),
        },
        navigation: Arc::new(ResolveRouteService::new(project_query)),
        locales,
        catalog_size,
    };

    let server_url = server_config.bind_address();
    info!("Server run on: {}", server_url);

    let openapi = api::openapi::ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_query_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Projects
    cfg.service(crate::modules::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::modules::project::adapter::incoming::web::routes::get_technologies_handler);
    cfg.service(crate::modules::project::adapter::incoming::web::routes::get_project_field_handler);
    cfg.service(crate::modules::project::adapter::incoming::web::routes::get_project_by_id_handler);
    // Navigation
    cfg.service(crate::modules::navigation::adapter::incoming::web::routes::list_routes_handler);
    cfg.service(crate::modules::navigation::adapter::incoming::web::routes::resolve_route_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
