//! In-memory map surface.

use std::sync::Arc;

use parking_lot::Mutex;

use super::surface::{MapSurface, Marker, Overlay};
use crate::coord::BoundingRegion;

/// Current contents of a [`RecordingMapSurface`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapSnapshot {
    pub overlays: Vec<Overlay>,
    pub markers: Vec<Marker>,
    /// Last viewport set, with its `animated` flag.
    pub viewport: Option<(BoundingRegion, bool)>,
    /// Number of `set_viewport` commands received.
    pub viewport_changes: usize,
}

/// Map surface that keeps its contents in memory.
///
/// Clones share state, so a test (or the CLI) can keep a handle for
/// inspection after moving the surface into a screen.
#[derive(Debug, Clone, Default)]
pub struct RecordingMapSurface {
    state: Arc<Mutex<MapSnapshot>>,
}

impl RecordingMapSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> MapSnapshot {
        self.state.lock().clone()
    }

    pub fn overlay_count(&self) -> usize {
        self.state.lock().overlays.len()
    }

    pub fn marker_count(&self) -> usize {
        self.state.lock().markers.len()
    }
}

impl MapSurface for RecordingMapSurface {
    fn add_overlay(&mut self, overlay: Overlay) {
        self.state.lock().overlays.push(overlay);
    }

    fn clear_overlays(&mut self) {
        self.state.lock().overlays.clear();
    }

    fn add_marker(&mut self, marker: Marker) {
        self.state.lock().markers.push(marker);
    }

    fn clear_markers(&mut self) {
        self.state.lock().markers.clear();
    }

    fn set_viewport(&mut self, region: BoundingRegion, animated: bool) {
        let mut state = self.state.lock();
        state.viewport = Some((region, animated));
        state.viewport_changes += 1;
    }
}
