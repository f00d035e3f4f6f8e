//! # Feature Flags
//!
//! Boolean feature decisions sourced from host-rendered flag tables.
//!
//! ## Overview
//!
//! Hosts render up to three flag tables: an "all flags" table and a
//! frontend-only table emitted during server rendering, plus a table the
//! client populates at runtime. Lookups walk the tiers in that priority
//! order; the first table that is present answers, and a flag is `true`
//! only when its entry carries a truthy value.
//!
//! Consumers that need a stable decision (e.g. picking a behavior variant
//! for the lifetime of a component) must snapshot the result themselves:
//! the gate always reads the live tables.
//!
//! ## Example
//!
//! ```rust
//! use waypoint_flags::{FlagSource, FlagTier, ProcessFlags};
//!
//! let flags = ProcessFlags::new();
//! flags.load_json(FlagTier::Client, r#"{ "nav.fast-path": { "value": true } }"#).unwrap();
//!
//! assert!(flags.boolean_flag("nav.fast-path"));
//! assert!(!flags.boolean_flag("nav.unknown"));
//! ```

mod source;
mod table;

pub use source::{FlagSource, FlagTier, ProcessFlags, boolean_feature_flag, process_flags};
pub use table::{FlagEntry, FlagTable, FlagValue};
