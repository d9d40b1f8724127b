//! Geographic coordinate types
//!
//! Provides the [`Coordinate`] used across requests, polylines and markers,
//! and the [`BoundingRegion`] used to fit the map viewport to a route.

mod types;

pub use types::{BoundingRegion, CoordError, Coordinate, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
