use crate::actions::RouterActions;
use crate::activation::{ActivationEvent, NavigationOutcome};
use crate::config::{
    ActivationObserver, InteractionObserver, LinkConfig, LinkKind, PrefetchMode, Target,
};
use crate::context::create_router_context;
use crate::route::{LinkTarget, Route};
use crate::strategy::PrefetchStrategy;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, trace, warn};
use waypoint_flags::FlagSource;
use waypoint_location::{Params, PathAttributes, Query, create_path, generate_location_from_path};
use waypoint_scheduler::Scheduler;

/// Attributes the host should render on the link element.
///
/// `href` always equals [`LinkController::destination`], so copy/paste,
/// middle-click and new-tab behavior stay consistent with programmatic
/// navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkAttributes {
    pub kind: LinkKind,
    pub href: String,
    pub target: Target,
}

/// State shared with timer callbacks and the deferred-route subscription.
struct LinkShared {
    actions: Arc<dyn RouterActions>,
    scheduler: Scheduler,
    href: Option<String>,
    static_path: Option<String>,
    params: Params,
    query: Query,
    route: RwLock<Option<Arc<Route>>>,
    /// Cancellation token: cleared on teardown so late timer fires and
    /// late route resolution are ignored.
    alive: AtomicBool,
}

impl LinkShared {
    fn destination_of(&self, route: Option<&Route>) -> String {
        if let Some(href) = &self.href {
            return href.clone();
        }
        if let Some(path) = &self.static_path {
            return path.clone();
        }
        let Some(route) = route else {
            return String::new();
        };
        let attributes = PathAttributes {
            params: self.params.clone(),
            query: self.query.clone(),
            base_path: self.actions.base_path(),
        };
        match generate_location_from_path(&route.path, &attributes) {
            Ok(location) => create_path(&location),
            Err(error) => {
                warn!(%error, template = route.path, "destination generation failed");
                String::new()
            },
        }
    }

    /// Fires a prefetch if the destination is ready.
    ///
    /// Resolution is re-checked here rather than at schedule time: a
    /// deferred route may settle, or stay pending, independently of the
    /// timer.
    fn trigger_prefetch(&self) {
        if !self.alive.load(Ordering::Acquire) {
            return;
        }
        let route = self.route.read().clone();
        if self.static_path.is_none() && route.is_none() {
            trace!("prefetch skipped: route not resolved");
            return;
        }
        let destination = self.destination_of(route.as_deref());
        if destination.is_empty() {
            trace!("prefetch skipped: empty destination");
            return;
        }
        let context = route
            .map(|route| create_router_context(route, self.params.clone(), self.query.clone()));
        debug!(destination, "prefetching route resources");
        self.actions.prefetch_next_route_resources(&destination, context.as_ref());
    }
}

fn schedule_prefetch(shared: &Arc<LinkShared>) {
    let weak = Arc::downgrade(shared);
    shared.scheduler.schedule(move || {
        if let Some(shared) = weak.upgrade() {
            shared.trigger_prefetch();
        }
    });
}

/// An interactive navigational element.
///
/// Composes destination resolution, flag-gated prefetch wiring and
/// activation handling. The host forwards interaction events to the
/// matching methods and renders [`LinkController::attributes`]; dropping
/// the controller cancels any pending prefetch.
pub struct LinkController {
    shared: Arc<LinkShared>,
    strategy: PrefetchStrategy,
    prefetch: PrefetchMode,
    target: Target,
    replace: bool,
    kind: LinkKind,
    on_click: Option<ActivationObserver>,
    on_pointer_enter: Option<InteractionObserver>,
    on_pointer_leave: Option<InteractionObserver>,
    on_pointer_down: Option<InteractionObserver>,
    on_focus: Option<InteractionObserver>,
    on_blur: Option<InteractionObserver>,
}

impl LinkController {
    /// Builds a controller, freezing the prefetch strategy from `flags`.
    ///
    /// A deferred route target is subscribed to exactly once; `mount`
    /// prefetching is scheduled immediately. Must be called within a
    /// Tokio runtime when the target is deferred or prefetching is
    /// enabled.
    #[must_use]
    pub fn new(config: LinkConfig, actions: Arc<dyn RouterActions>, flags: &dyn FlagSource) -> Self {
        let strategy = PrefetchStrategy::select(flags);
        let LinkConfig {
            href,
            to,
            target,
            replace,
            prefetch,
            kind,
            params,
            query,
            on_click,
            on_pointer_enter,
            on_pointer_leave,
            on_pointer_down,
            on_focus,
            on_blur,
        } = config;

        let (static_path, route, deferred) = match to {
            None => (None, None, None),
            Some(LinkTarget::Path(path)) => (Some(path), None, None),
            Some(LinkTarget::Route(route)) => (None, Some(route), None),
            Some(LinkTarget::Deferred(future)) => (None, None, Some(future)),
        };

        let shared = Arc::new(LinkShared {
            actions,
            scheduler: Scheduler::new(strategy.delay()),
            href,
            static_path,
            params,
            query,
            route: RwLock::new(route),
            alive: AtomicBool::new(true),
        });

        if let Some(future) = deferred {
            let weak = Arc::downgrade(&shared);
            tokio::spawn(async move {
                let export = future.await;
                let Some(shared) = weak.upgrade() else { return };
                if shared.alive.load(Ordering::Acquire) {
                    *shared.route.write() = Some(Arc::new(export.into_route()));
                    trace!("deferred route resolved");
                } else {
                    trace!("route resolved after teardown; ignored");
                }
            });
        }

        let controller = Self {
            shared,
            strategy,
            prefetch,
            target,
            replace,
            kind,
            on_click,
            on_pointer_enter,
            on_pointer_leave,
            on_pointer_down,
            on_focus,
            on_blur,
        };
        if controller.prefetch == PrefetchMode::Mount {
            schedule_prefetch(&controller.shared);
        }
        controller
    }

    /// The destination string, identical to the rendered `href`.
    ///
    /// Empty until a deferred route resolves (or when template expansion
    /// fails); such a link does not prefetch and is inert on activation.
    #[must_use]
    pub fn destination(&self) -> String {
        let route = self.shared.route.read().clone();
        self.shared.destination_of(route.as_deref())
    }

    /// Attributes for the host element.
    #[must_use]
    pub fn attributes(&self) -> LinkAttributes {
        LinkAttributes { kind: self.kind, href: self.destination(), target: self.target }
    }

    /// The resolved route descriptor, if any.
    #[must_use]
    pub fn route(&self) -> Option<Arc<Route>> {
        self.shared.route.read().clone()
    }

    /// The wiring variant frozen at construction.
    #[must_use]
    pub const fn strategy(&self) -> PrefetchStrategy {
        self.strategy
    }

    /// Pointer entered the element.
    pub fn pointer_enter(&self) {
        if self.prefetch == PrefetchMode::Hover {
            schedule_prefetch(&self.shared);
        }
        if let Some(observer) = &self.on_pointer_enter {
            observer();
        }
    }

    /// Pointer left the element; a pending hover prefetch is dropped.
    pub fn pointer_leave(&self) {
        if self.prefetch == PrefetchMode::Hover {
            self.shared.scheduler.cancel();
        }
        if let Some(observer) = &self.on_pointer_leave {
            observer();
        }
    }

    /// Keyboard focus reached the element. Schedules under the improved
    /// strategy only.
    pub fn focus(&self) {
        if self.strategy.extended_handler_set() && self.prefetch == PrefetchMode::Hover {
            schedule_prefetch(&self.shared);
        }
        if let Some(observer) = &self.on_focus {
            observer();
        }
    }

    /// Focus left the element.
    pub fn blur(&self) {
        if self.strategy.extended_handler_set() && self.prefetch == PrefetchMode::Hover {
            self.shared.scheduler.cancel();
        }
        if let Some(observer) = &self.on_blur {
            observer();
        }
    }

    /// Pointer pressed. Under the improved strategy the pending timer is
    /// dropped and the prefetch fires immediately, covering touch and
    /// fast-click paths that never see a completed hover delay.
    pub fn pointer_down(&self) {
        if self.strategy.extended_handler_set() && self.prefetch == PrefetchMode::Hover {
            self.shared.scheduler.cancel();
            self.shared.trigger_prefetch();
        }
        if let Some(observer) = &self.on_pointer_down {
            observer();
        }
    }

    /// Pointer click or key activation.
    ///
    /// Bypasses the scheduler entirely: when the event allows client-side
    /// handling, navigation goes straight to the router actions with the
    /// same destination the rendered `href` shows.
    pub fn activate(&self, event: &ActivationEvent) -> NavigationOutcome {
        if let Some(key) = &event.key {
            if key != "Enter" {
                return NavigationOutcome::Inert;
            }
        }
        if let Some(observer) = &self.on_click {
            observer(event);
        }
        if event.default_prevented
            || !event.is_main_button()
            || event.is_modified()
            || self.target != Target::SelfWindow
        {
            return NavigationOutcome::NativeFallback;
        }

        let route = self.shared.route.read().clone();
        let destination = self.shared.destination_of(route.as_deref());
        if destination.is_empty() {
            trace!("activation ignored: no destination");
            return NavigationOutcome::Inert;
        }
        let context = route.map(|route| {
            create_router_context(route, self.shared.params.clone(), self.shared.query.clone())
        });
        debug!(destination, replace = self.replace, "navigating");
        if self.replace {
            self.shared.actions.replace(&destination, context.as_ref());
        } else {
            self.shared.actions.push(&destination, context.as_ref());
        }
        NavigationOutcome::ClientHandled
    }
}

impl Drop for LinkController {
    /// Teardown cancels any pending prefetch and invalidates late
    /// deferred-route resolution.
    fn drop(&mut self) {
        self.shared.alive.store(false, Ordering::Release);
        self.shared.scheduler.cancel();
    }
}

impl fmt::Debug for LinkController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkController")
            .field("strategy", &self.strategy)
            .field("prefetch", &self.prefetch)
            .field("target", &self.target)
            .field("replace", &self.replace)
            .field("kind", &self.kind)
            .field("destination", &self.destination())
            .finish_non_exhaustive()
    }
}
