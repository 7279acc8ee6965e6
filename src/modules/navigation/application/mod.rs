pub mod resolve_route;
pub mod site_routes;
