//! Facade crate for the Waypoint routing toolkit.
//! Re-exports the location primitives, the feature-flag gate, the debounce
//! scheduler and the link slice under one roof.
//! Keep this crate thin: it should compose other crates, not implement
//! routing logic.

pub use waypoint_flags as flags;
pub use waypoint_link as link;
pub use waypoint_location as location;
pub use waypoint_scheduler as scheduler;

/// Everything a host integration typically needs.
pub mod prelude {
    pub use waypoint_flags::{FlagSource, FlagTier, boolean_feature_flag, process_flags};
    pub use waypoint_link::{
        ActivationEvent, LinkAttributes, LinkConfig, LinkController, LinkKind, LinkTarget,
        NavigationOutcome, PrefetchMode, Route, RouterActions, Target,
    };
    pub use waypoint_location::{
        ParsedLocation, PathAttributes, create_path, generate_location_from_path, parse_path,
    };
    pub use waypoint_scheduler::Scheduler;
}
