//! Injected cache capability for geocoding results.
//!
//! Repeated resolutions of the same destination (re-opening the screen after
//! an error, for example) skip the geocoding round-trip when a cache is
//! attached to the pipeline.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use routesheet::cache::MemoryGeocodeCache;
//! use routesheet::pipeline::RoutePipeline;
//!
//! let pipeline = RoutePipeline::new(geocoder, directions)
//!     .with_cache(Arc::new(MemoryGeocodeCache::default()));
//! ```

mod memory;
mod traits;

pub use memory::{MemoryGeocodeCache, DEFAULT_GEOCODE_CAPACITY};
pub use traits::{normalize_address, BoxFuture, GeocodeCache};
