#![allow(dead_code)]

use parking_lot::Mutex;
use std::sync::Arc;
use waypoint_flags::{FlagEntry, FlagTable, FlagTier, ProcessFlags};
use waypoint_link::{IMPROVED_PREFETCHING_FLAG, RouteContext, RouterActions};

/// Router-store double recording every call it receives.
#[derive(Debug, Default)]
pub struct RecordingActions {
    pub base_path: String,
    pub prefetches: Mutex<Vec<(String, Option<RouteContext>)>>,
    pub pushes: Mutex<Vec<String>>,
    pub replaces: Mutex<Vec<String>>,
}

impl RecordingActions {
    pub fn arc() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_base_path(base_path: &str) -> Arc<Self> {
        Arc::new(Self { base_path: base_path.to_owned(), ..Self::default() })
    }

    pub fn prefetch_count(&self) -> usize {
        self.prefetches.lock().len()
    }

    pub fn prefetch_destinations(&self) -> Vec<String> {
        self.prefetches.lock().iter().map(|(destination, _)| destination.clone()).collect()
    }
}

impl RouterActions for RecordingActions {
    fn base_path(&self) -> String {
        self.base_path.clone()
    }

    fn prefetch_next_route_resources(&self, destination: &str, context: Option<&RouteContext>) {
        self.prefetches.lock().push((destination.to_owned(), context.cloned()));
    }

    fn push(&self, destination: &str, _context: Option<&RouteContext>) {
        self.pushes.lock().push(destination.to_owned());
    }

    fn replace(&self, destination: &str, _context: Option<&RouteContext>) {
        self.replaces.lock().push(destination.to_owned());
    }
}

/// A flag source with the improved-prefetching flag enabled.
pub fn improved_flags() -> ProcessFlags {
    let flags = ProcessFlags::new();
    let mut table = FlagTable::default();
    table.insert(IMPROVED_PREFETCHING_FLAG.to_owned(), FlagEntry::on(true));
    flags.set(FlagTier::Client, table);
    flags
}

/// A flag source with no tables: every flag is off.
pub fn legacy_flags() -> ProcessFlags {
    ProcessFlags::new()
}

/// Params/query helper.
pub fn pairs(entries: &[(&str, &str)]) -> std::collections::BTreeMap<String, String> {
    entries.iter().map(|(key, value)| ((*key).to_owned(), (*value).to_owned())).collect()
}
