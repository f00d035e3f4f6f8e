use crate::route::Route;
use std::sync::Arc;
use waypoint_location::{Params, Query};

/// Routing context handed to the router store alongside a destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteContext {
    pub route: Arc<Route>,
    pub params: Params,
    pub query: Query,
}

/// Builds the context passed to prefetch and navigation calls.
#[must_use]
pub fn create_router_context(route: Arc<Route>, params: Params, query: Query) -> RouteContext {
    RouteContext { route, params, query }
}
