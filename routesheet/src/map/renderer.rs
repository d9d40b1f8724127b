//! Draws a resolved route onto a map surface.

use tracing::debug;

use super::surface::{MapSurface, Marker, Overlay, OverlayLevel, PolylineStyle};
use crate::pipeline::Route;

/// Renders the route polyline, destination marker and viewport.
///
/// Rendering always starts by clearing what the surface currently shows, so
/// repeated calls never accumulate overlays or markers.
pub struct MapOverlayRenderer<S: MapSurface> {
    surface: S,
    style: PolylineStyle,
}

impl<S: MapSurface> MapOverlayRenderer<S> {
    pub fn new(surface: S) -> Self {
        Self::with_style(surface, PolylineStyle::default())
    }

    pub fn with_style(surface: S, style: PolylineStyle) -> Self {
        Self { surface, style }
    }

    pub fn style(&self) -> PolylineStyle {
        self.style
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Draw `route`, labelling the destination marker with `destination_label`.
    pub fn render(&mut self, route: &Route, destination_label: &str) {
        self.clear();

        self.surface.add_overlay(Overlay::Polyline {
            points: route.polyline().to_vec(),
            style: self.style,
            level: OverlayLevel::AboveLabels,
        });
        self.surface.add_marker(Marker {
            coordinate: route.destination(),
            title: destination_label.to_string(),
        });
        self.surface.set_viewport(route.bounding_region(), true);

        debug!(
            points = route.polyline().len(),
            destination = destination_label,
            "Route rendered"
        );
    }

    /// Remove everything drawn so far.
    pub fn clear(&mut self) {
        self.surface.clear_overlays();
        self.surface.clear_markers();
    }
}
