use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// A navigable route descriptor: a path template plus an optional name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Path template, e.g. `/projects/:id/settings`.
    pub path: String,
    /// Stable route name for diagnostics and matching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Route {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), name: None }
    }

    #[must_use]
    pub fn named(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self { path: path.into(), name: Some(name.into()) }
    }
}

/// The shape a deferred route resolves to: either the route itself, or a
/// lazily loaded module wrapping it under the conventional default-export
/// key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RouteExport {
    Route(Route),
    Module { default: Route },
}

impl RouteExport {
    /// Unwraps to the route descriptor.
    #[must_use]
    pub fn into_route(self) -> Route {
        match self {
            Self::Route(route) => route,
            Self::Module { default } => default,
        }
    }
}

/// A route descriptor that resolves asynchronously.
pub type DeferredRoute = Pin<Box<dyn Future<Output = RouteExport> + Send>>;

/// The destination input of a link.
pub enum LinkTarget {
    /// A path-like string used verbatim as the destination.
    Path(String),
    /// An already resolved route descriptor.
    Route(Arc<Route>),
    /// A route descriptor that resolves asynchronously. The controller
    /// subscribes exactly once; resolution after teardown is ignored.
    Deferred(DeferredRoute),
}

impl LinkTarget {
    /// Wraps a future resolving to a route or a route module.
    pub fn deferred<F>(future: F) -> Self
    where
        F: Future<Output = RouteExport> + Send + 'static,
    {
        Self::Deferred(Box::pin(future))
    }
}

impl fmt::Debug for LinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Self::Route(route) => f.debug_tuple("Route").field(route).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

impl From<&str> for LinkTarget {
    fn from(path: &str) -> Self {
        Self::Path(path.to_owned())
    }
}

impl From<String> for LinkTarget {
    fn from(path: String) -> Self {
        Self::Path(path)
    }
}

impl From<Route> for LinkTarget {
    fn from(route: Route) -> Self {
        Self::Route(Arc::new(route))
    }
}

impl From<Arc<Route>> for LinkTarget {
    fn from(route: Arc<Route>) -> Self {
        Self::Route(route)
    }
}
