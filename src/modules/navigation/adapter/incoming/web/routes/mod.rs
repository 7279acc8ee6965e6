mod resolve_route;

pub use resolve_route::*;
