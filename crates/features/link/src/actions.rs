use crate::context::RouteContext;

/// The router store's action surface consumed by the link controller.
///
/// Prefetching is fire-and-forget: failures are the router's concern, and
/// repeated prefetch calls for an identical destination are expected to be
/// idempotent on the router side.
pub trait RouterActions: Send + Sync {
    /// The base path prepended to generated route destinations.
    fn base_path(&self) -> String;

    /// Speculatively fetches the resources of the route at `destination`.
    fn prefetch_next_route_resources(&self, destination: &str, context: Option<&RouteContext>);

    /// Pushes a new history entry for `destination`.
    fn push(&self, destination: &str, context: Option<&RouteContext>);

    /// Replaces the current history entry with `destination`.
    fn replace(&self, destination: &str, context: Option<&RouteContext>);
}
