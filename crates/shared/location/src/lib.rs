//! # Location
//!
//! Pure location primitives shared across the routing slices: path
//! decomposition ([`parse_path`]), path serialization ([`create_path`]),
//! and route-template expansion ([`generate_location_from_path`]).
//! Keep it lean: no I/O and no async, just string handling.

mod error;
mod generate;
mod location;

pub use error::LocationError;
pub use generate::{Params, PathAttributes, Query, generate_location_from_path};
pub use location::{ParsedLocation, create_path, parse_path};
