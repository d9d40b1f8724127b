//! Map overlay rendering.
//!
//! [`MapOverlayRenderer`] turns a resolved [`Route`](crate::pipeline::Route)
//! into commands on a [`MapSurface`]: one polyline overlay above every other
//! layer, one destination marker, and an animated viewport change to the
//! route's bounding region.

mod recording;
mod renderer;
mod surface;

pub use recording::{MapSnapshot, RecordingMapSurface};
pub use renderer::MapOverlayRenderer;
pub use surface::{MapSurface, Marker, Overlay, OverlayLevel, PolylineStyle, Rgba};
