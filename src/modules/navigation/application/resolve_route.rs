use crate::modules::navigation::application::site_routes::{
    resolve_path, NavigationError, RouteMatch, SiteRoute, SITE_ROUTES,
};
use crate::modules::project::application::ports::outgoing::project_query::ProjectQuery;

pub trait ResolveRouteUseCase: Send + Sync {
    fn execute(&self, path: &str) -> Result<RouteMatch, NavigationError>;

    fn routes(&self) -> &'static [SiteRoute] {
        SITE_ROUTES
    }
}

pub struct ResolveRouteService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> ResolveRouteService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

impl<Q> ResolveRouteUseCase for ResolveRouteService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    fn execute(&self, path: &str) -> Result<RouteMatch, NavigationError> {
        resolve_path(path, &self.query)
    }
}
