//! Request and result types of the resolution pipeline.

use crate::coord::{BoundingRegion, Coordinate};
use crate::provider::RouteCandidate;

/// Input to one resolution attempt. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    source: Coordinate,
    destination_address: String,
}

impl RouteRequest {
    pub fn new(source: Coordinate, destination_address: impl Into<String>) -> Self {
        Self {
            source,
            destination_address: destination_address.into(),
        }
    }

    /// The user's current position.
    pub fn source(&self) -> Coordinate {
        self.source
    }

    /// Free-text destination as entered by the user.
    pub fn destination_address(&self) -> &str {
        &self.destination_address
    }
}

/// A resolved driving route.
///
/// The polyline is never empty; [`Route::new`] refuses to build one from an
/// empty sequence, so renderers can rely on a first and last point.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    polyline: Vec<Coordinate>,
    distance_meters: f64,
    duration_seconds: f64,
    bounding_region: BoundingRegion,
}

impl Route {
    /// Build a route, computing its bounding region.
    ///
    /// Returns `None` when `polyline` is empty.
    pub fn new(polyline: Vec<Coordinate>, distance_meters: f64, duration_seconds: f64) -> Option<Self> {
        let bounding_region = BoundingRegion::enclosing(&polyline)?;
        Some(Self {
            polyline,
            distance_meters,
            duration_seconds,
            bounding_region,
        })
    }

    /// Build a route from a directions candidate.
    pub fn from_candidate(candidate: RouteCandidate) -> Option<Self> {
        Self::new(
            candidate.polyline,
            candidate.distance_meters,
            candidate.duration_seconds,
        )
    }

    pub fn polyline(&self) -> &[Coordinate] {
        &self.polyline
    }

    pub fn distance_meters(&self) -> f64 {
        self.distance_meters
    }

    pub fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }

    /// Minimal rectangle enclosing the polyline.
    pub fn bounding_region(&self) -> BoundingRegion {
        self.bounding_region
    }

    /// Last point of the polyline.
    pub fn destination(&self) -> Coordinate {
        // Non-empty by construction
        self.polyline[self.polyline.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_polyline_is_rejected() {
        assert!(Route::new(Vec::new(), 100.0, 10.0).is_none());
    }

    #[test]
    fn test_route_bounding_region() {
        let route = Route::new(
            vec![
                Coordinate::new(48.85, 2.35),
                Coordinate::new(48.90, 2.30),
                Coordinate::new(48.80, 2.40),
            ],
            12_340.0,
            5_400.0,
        )
        .unwrap();

        let region = route.bounding_region();
        assert_eq!(region.min_lat, 48.80);
        assert_eq!(region.max_lat, 48.90);
        assert_eq!(region.min_lon, 2.30);
        assert_eq!(region.max_lon, 2.40);
        assert_eq!(route.destination(), Coordinate::new(48.80, 2.40));
    }

    #[test]
    fn test_request_accessors() {
        let request = RouteRequest::new(Coordinate::new(1.0, 2.0), "Main St 1");
        assert_eq!(request.source(), Coordinate::new(1.0, 2.0));
        assert_eq!(request.destination_address(), "Main St 1");
    }
}
