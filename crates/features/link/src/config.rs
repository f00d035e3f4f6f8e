use crate::activation::ActivationEvent;
use crate::route::LinkTarget;
use std::fmt;
use std::sync::Arc;
use typed_builder::TypedBuilder;
use waypoint_location::{Params, Query};

/// When a link prefetches its route resources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PrefetchMode {
    /// Never prefetch.
    #[default]
    Off,
    /// Schedule once when the controller is created.
    Mount,
    /// Schedule on pointer-enter (and focus, under the improved strategy).
    Hover,
}

/// Browsing context the activation targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Target {
    /// Same browsing context; eligible for client-side navigation.
    #[default]
    SelfWindow,
    Blank,
    Parent,
    Top,
}

/// Element kind the host should render for the link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkKind {
    #[default]
    Anchor,
    Button,
}

impl LinkKind {
    /// Parses a requested kind, degrading unknown values to an anchor.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "button" => Self::Button,
            _ => Self::Anchor,
        }
    }
}

/// Pass-through interaction observer, invoked in addition to the
/// controller's internal handling.
pub type InteractionObserver = Arc<dyn Fn() + Send + Sync>;

/// Pass-through activation observer receiving the activation event.
pub type ActivationObserver = Arc<dyn Fn(&ActivationEvent) + Send + Sync>;

/// Configuration surface of a link.
///
/// ```rust
/// use waypoint_link::{LinkConfig, PrefetchMode, Route};
///
/// let config = LinkConfig::builder()
///     .to(Route::new("/projects/:id"))
///     .params([("id".to_owned(), "7".to_owned())].into())
///     .prefetch(PrefetchMode::Hover)
///     .build();
/// assert!(config.href.is_none());
/// ```
#[derive(TypedBuilder)]
#[builder(doc)]
pub struct LinkConfig {
    /// Explicit destination; wins over `to` when set.
    #[builder(default, setter(strip_option, into))]
    pub href: Option<String>,
    /// Route input: verbatim path, resolved route, or deferred route.
    #[builder(default, setter(strip_option, into))]
    pub to: Option<LinkTarget>,
    #[builder(default)]
    pub target: Target,
    /// Replace the current history entry instead of pushing one.
    #[builder(default)]
    pub replace: bool,
    #[builder(default)]
    pub prefetch: PrefetchMode,
    #[builder(default)]
    pub kind: LinkKind,
    /// Path parameters substituted into the route template.
    #[builder(default)]
    pub params: Params,
    /// Query appended to generated destinations.
    #[builder(default)]
    pub query: Query,
    #[builder(default, setter(strip_option))]
    pub on_click: Option<ActivationObserver>,
    #[builder(default, setter(strip_option))]
    pub on_pointer_enter: Option<InteractionObserver>,
    #[builder(default, setter(strip_option))]
    pub on_pointer_leave: Option<InteractionObserver>,
    #[builder(default, setter(strip_option))]
    pub on_pointer_down: Option<InteractionObserver>,
    #[builder(default, setter(strip_option))]
    pub on_focus: Option<InteractionObserver>,
    #[builder(default, setter(strip_option))]
    pub on_blur: Option<InteractionObserver>,
}

impl fmt::Debug for LinkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkConfig")
            .field("href", &self.href)
            .field("to", &self.to)
            .field("target", &self.target)
            .field("replace", &self.replace)
            .field("prefetch", &self.prefetch)
            .field("kind", &self.kind)
            .field("params", &self.params)
            .field("query", &self.query)
            .field("observers", &ObserverSummary(self))
            .finish()
    }
}

struct ObserverSummary<'a>(&'a LinkConfig);

impl fmt::Debug for ObserverSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.0;
        f.debug_struct("Observers")
            .field("on_click", &config.on_click.is_some())
            .field("on_pointer_enter", &config.on_pointer_enter.is_some())
            .field("on_pointer_leave", &config.on_pointer_leave.is_some())
            .field("on_pointer_down", &config.on_pointer_down.is_some())
            .field("on_focus", &config.on_focus.is_some())
            .field("on_blur", &config.on_blur.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kind_degrades_to_anchor() {
        assert_eq!(LinkKind::from_name("button"), LinkKind::Button);
        assert_eq!(LinkKind::from_name("a"), LinkKind::Anchor);
        assert_eq!(LinkKind::from_name("span"), LinkKind::Anchor);
    }

    #[test]
    fn builder_defaults_are_inert() {
        let config = LinkConfig::builder().build();
        assert!(config.href.is_none());
        assert!(config.to.is_none());
        assert_eq!(config.target, Target::SelfWindow);
        assert_eq!(config.prefetch, PrefetchMode::Off);
        assert!(!config.replace);
    }
}
