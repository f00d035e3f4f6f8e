//! # Link
//!
//! The navigable link slice: resolves a destination from a static `href`
//! or a (possibly deferred) route descriptor, prefetches route resources
//! ahead of navigation under timing and interaction constraints, and hands
//! activation off to the router store.
//!
//! ## Architecture
//!
//! * [`LinkController`] composes the shared location primitives, the flag
//!   gate and the debounce scheduler into one interactive element.
//! * [`PrefetchStrategy`] freezes the flag-gated wiring variant once per
//!   controller instance; the legacy and improved variants share the same
//!   scheduler abstraction and differ only in delay and handler set.
//! * [`RouterActions`] is the consumed capability boundary: base path,
//!   resource prefetching, and history mutation all live behind it.
//!
//! ## Example
//!
//! ```rust,ignore
//! let config = LinkConfig::builder()
//!     .to(Route::new("/projects/:id"))
//!     .params([("id".to_owned(), "7".to_owned())].into())
//!     .prefetch(PrefetchMode::Hover)
//!     .build();
//! let link = LinkController::new(config, actions, process_flags());
//! link.pointer_enter(); // schedules a prefetch
//! ```

mod actions;
mod activation;
mod config;
mod context;
mod controller;
mod route;
mod strategy;

pub use actions::RouterActions;
pub use activation::{ActivationEvent, NavigationOutcome};
pub use config::{
    ActivationObserver, InteractionObserver, LinkConfig, LinkKind, PrefetchMode, Target,
};
pub use context::{RouteContext, create_router_context};
pub use controller::{LinkAttributes, LinkController};
pub use route::{DeferredRoute, LinkTarget, Route, RouteExport};
pub use strategy::{IMPROVED_PREFETCHING_FLAG, PrefetchStrategy};
