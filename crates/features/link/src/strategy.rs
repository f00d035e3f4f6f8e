use std::time::Duration;
use waypoint_flags::FlagSource;

/// Flag guarding the improved prefetch wiring.
pub const IMPROVED_PREFETCHING_FLAG: &str = "waypoint.improved-prefetching";

const LEGACY_DELAY: Duration = Duration::from_millis(300);
const IMPROVED_DELAY: Duration = Duration::from_millis(225);

/// Prefetch wiring variant, frozen once per controller instance.
///
/// The variants differ structurally (delay and handler set), so the choice
/// is snapshotted at construction instead of re-reading the flag gate per
/// interaction; a link never changes wiring mid-lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefetchStrategy {
    /// 300 ms delay; mount and hover wiring only.
    Legacy,
    /// 225 ms delay; adds focus/blur scheduling and an immediate trigger
    /// on pointer-down for touch and fast-click paths where hover events
    /// are unreliable.
    Improved,
}

impl PrefetchStrategy {
    /// Snapshots the flag gate into a strategy.
    #[must_use]
    pub fn select(flags: &dyn FlagSource) -> Self {
        if flags.boolean_flag(IMPROVED_PREFETCHING_FLAG) { Self::Improved } else { Self::Legacy }
    }

    /// The debounce delay for scheduled prefetches.
    #[must_use]
    pub const fn delay(self) -> Duration {
        match self {
            Self::Legacy => LEGACY_DELAY,
            Self::Improved => IMPROVED_DELAY,
        }
    }

    /// Whether focus/blur and pointer-down participate in prefetching.
    #[must_use]
    pub const fn extended_handler_set(self) -> bool {
        matches!(self, Self::Improved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypoint_flags::{FlagEntry, FlagTable, FlagTier, ProcessFlags};

    fn flags_with(enabled: bool) -> ProcessFlags {
        let flags = ProcessFlags::new();
        let mut table = FlagTable::default();
        table.insert(IMPROVED_PREFETCHING_FLAG.to_owned(), FlagEntry::on(enabled));
        flags.set(FlagTier::Client, table);
        flags
    }

    #[test]
    fn selects_improved_when_flag_is_on() {
        assert_eq!(PrefetchStrategy::select(&flags_with(true)), PrefetchStrategy::Improved);
        assert_eq!(PrefetchStrategy::select(&flags_with(false)), PrefetchStrategy::Legacy);
        assert_eq!(PrefetchStrategy::select(&ProcessFlags::new()), PrefetchStrategy::Legacy);
    }

    #[test]
    fn delays_match_the_variants() {
        assert_eq!(PrefetchStrategy::Legacy.delay(), Duration::from_millis(300));
        assert_eq!(PrefetchStrategy::Improved.delay(), Duration::from_millis(225));
    }

    #[test]
    fn only_improved_extends_the_handler_set() {
        assert!(PrefetchStrategy::Improved.extended_handler_set());
        assert!(!PrefetchStrategy::Legacy.extended_handler_set());
    }
}
