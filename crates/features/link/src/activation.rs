use typed_builder::TypedBuilder;

/// Pointer or keyboard activation as reported by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, TypedBuilder)]
#[builder(doc)]
pub struct ActivationEvent {
    /// Pointer button; `None` for keyboard activation. `0` is the main
    /// button.
    #[builder(default, setter(strip_option))]
    pub button: Option<u8>,
    /// Key name for keyboard activation; only `"Enter"` activates.
    #[builder(default, setter(strip_option, into))]
    pub key: Option<String>,
    #[builder(default)]
    pub meta_key: bool,
    #[builder(default)]
    pub ctrl_key: bool,
    #[builder(default)]
    pub alt_key: bool,
    #[builder(default)]
    pub shift_key: bool,
    /// Whether an earlier handler already claimed the event.
    #[builder(default)]
    pub default_prevented: bool,
}

impl ActivationEvent {
    /// A plain main-button click with no modifiers.
    #[must_use]
    pub fn click() -> Self {
        Self::builder().button(0).build()
    }

    /// Keyboard activation via the Enter key.
    #[must_use]
    pub fn enter_key() -> Self {
        Self::builder().key("Enter").build()
    }

    /// Whether any modifier key is held (opens in new tab/window paths).
    #[must_use]
    pub const fn is_modified(&self) -> bool {
        self.meta_key || self.ctrl_key || self.alt_key || self.shift_key
    }

    /// Whether this is a main-button press; keyboard events qualify.
    #[must_use]
    pub fn is_main_button(&self) -> bool {
        self.button.is_none_or(|button| button == 0)
    }
}

/// How the controller handled an activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Navigation was delegated to the router actions.
    ClientHandled,
    /// The event should fall through to native browser handling.
    NativeFallback,
    /// Nothing happened: a non-activating key, or no destination yet.
    Inert,
}
