use crate::table::{FlagTable, FlagValue};
use parking_lot::RwLock;
use tracing::trace;

/// A read-only source of boolean feature decisions.
///
/// Injected into consumers so behavior-variant selection stays testable
/// without touching process-wide state.
pub trait FlagSource: Send + Sync {
    /// Returns `true` only when the flag exists and carries a truthy value.
    fn boolean_flag(&self, name: &str) -> bool;
}

/// The tier a flag table belongs to, in lookup priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagTier {
    /// Server-rendered table covering all flags.
    SsrAll,
    /// Server-rendered table covering frontend-only flags.
    SsrFrontend,
    /// Table populated by the client at runtime.
    Client,
}

/// Process-wide flag tables with a three-tier fallback.
///
/// The first tier that is *present* answers a lookup entirely; a key
/// missing from that table is `false` with no fallthrough to lower tiers.
/// Mirrors how hosts render one table or another, never a merged view.
#[derive(Debug, Default)]
pub struct ProcessFlags {
    ssr_all: RwLock<Option<FlagTable>>,
    ssr_frontend: RwLock<Option<FlagTable>>,
    client: RwLock<Option<FlagTable>>,
}

impl ProcessFlags {
    /// An instance with no tables present: every lookup is `false`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ssr_all: RwLock::new(None),
            ssr_frontend: RwLock::new(None),
            client: RwLock::new(None),
        }
    }

    /// Installs `table` as the given tier, replacing any previous table.
    pub fn set(&self, tier: FlagTier, table: FlagTable) {
        *self.slot(tier).write() = Some(table);
    }

    /// Parses a host-rendered JSON payload into the given tier.
    ///
    /// # Errors
    /// Returns the deserialization error when the payload does not match
    /// the flag-table shape; the tier is left untouched in that case.
    pub fn load_json(&self, tier: FlagTier, payload: &str) -> Result<(), serde_json::Error> {
        let table: FlagTable = serde_json::from_str(payload)?;
        self.set(tier, table);
        Ok(())
    }

    /// Removes all tables. Primarily useful for tests.
    pub fn clear(&self) {
        *self.ssr_all.write() = None;
        *self.ssr_frontend.write() = None;
        *self.client.write() = None;
    }

    /// Looks `name` up through the tier fallback.
    #[must_use]
    pub fn lookup(&self, name: &str) -> bool {
        for slot in [&self.ssr_all, &self.ssr_frontend, &self.client] {
            let guard = slot.read();
            if let Some(table) = guard.as_ref() {
                return table
                    .get(name)
                    .and_then(|entry| entry.value.as_ref())
                    .is_some_and(FlagValue::is_truthy);
            }
        }
        trace!(flag = name, "no flag table present");
        false
    }

    const fn slot(&self, tier: FlagTier) -> &RwLock<Option<FlagTable>> {
        match tier {
            FlagTier::SsrAll => &self.ssr_all,
            FlagTier::SsrFrontend => &self.ssr_frontend,
            FlagTier::Client => &self.client,
        }
    }
}

impl FlagSource for ProcessFlags {
    fn boolean_flag(&self, name: &str) -> bool {
        self.lookup(name)
    }
}

static PROCESS_FLAGS: ProcessFlags = ProcessFlags::new();

/// The process-wide flag source. Composition roots populate it from the
/// host payloads; everything else should prefer an injected [`FlagSource`].
#[must_use]
pub fn process_flags() -> &'static ProcessFlags {
    &PROCESS_FLAGS
}

/// Convenience lookup against [`process_flags`].
#[must_use]
pub fn boolean_feature_flag(name: &str) -> bool {
    PROCESS_FLAGS.lookup(name)
}
