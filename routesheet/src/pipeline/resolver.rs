//! Sequential geocode → directions pipeline.

use std::sync::Arc;
use std::time::Instant;

use futures::TryFutureExt;
use tracing::{debug, info, warn};

use super::error::ResolutionError;
use super::types::{Route, RouteRequest};
use crate::cache::GeocodeCache;
use crate::coord::Coordinate;
use crate::provider::{DirectionsProvider, Geocoder, TransportMode};
use crate::telemetry::ResolutionMetrics;

/// Resolves a [`RouteRequest`] into a [`Route`].
///
/// Stages run strictly in sequence: the directions request is chained onto
/// a successful geocode and can never start before it.
///
/// # Example
///
/// ```ignore
/// let pipeline = RoutePipeline::new(geocoder, directions);
/// let request = RouteRequest::new(Coordinate::new(53.55, 9.99), "Lübeck Hauptbahnhof");
/// match pipeline.resolve(&request).await {
///     Ok(route) => renderer.render(&route, request.destination_address()),
///     Err(error) => alerts.present(Alert::for_error(&error, &request)),
/// }
/// ```
pub struct RoutePipeline<G: Geocoder, D: DirectionsProvider> {
    geocoder: G,
    directions: D,
    cache: Option<Arc<dyn GeocodeCache>>,
    metrics: Arc<ResolutionMetrics>,
}

impl<G: Geocoder, D: DirectionsProvider> RoutePipeline<G, D> {
    /// Create a pipeline without a geocode cache.
    pub fn new(geocoder: G, directions: D) -> Self {
        Self {
            geocoder,
            directions,
            cache: None,
            metrics: Arc::new(ResolutionMetrics::new()),
        }
    }

    /// Attach a geocode cache.
    pub fn with_cache(mut self, cache: Arc<dyn GeocodeCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Share a metrics instance with other components.
    pub fn with_metrics(mut self, metrics: Arc<ResolutionMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn metrics(&self) -> &Arc<ResolutionMetrics> {
        &self.metrics
    }

    /// Resolve a request into a route.
    ///
    /// # Errors
    ///
    /// - [`ResolutionError::AddressNotFound`] when the address is blank or has no match
    /// - [`ResolutionError::GeocodingFailed`] for any other geocoder failure
    /// - [`ResolutionError::NoRouteFound`] when no usable route is returned
    /// - [`ResolutionError::DirectionsFailed`] for any other directions failure
    pub async fn resolve(&self, request: &RouteRequest) -> Result<Route, ResolutionError> {
        self.metrics.resolution_started();
        let started = Instant::now();

        let result = self
            .geocode(request.destination_address())
            .and_then(|destination| self.direct(request.source(), destination))
            .await;

        match &result {
            Ok(route) => {
                self.metrics.resolution_succeeded(started.elapsed());
                info!(
                    destination = request.destination_address(),
                    distance_m = route.distance_meters(),
                    duration_s = route.duration_seconds(),
                    points = route.polyline().len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Route resolved"
                );
            }
            Err(error) => {
                self.metrics.resolution_failed(error);
                warn!(
                    destination = request.destination_address(),
                    kind = error.kind(),
                    error = %error,
                    "Route resolution failed"
                );
            }
        }

        result
    }

    /// Stage 1: address → coordinate.
    async fn geocode(&self, address: &str) -> Result<Coordinate, ResolutionError> {
        if address.trim().is_empty() {
            return Err(ResolutionError::AddressNotFound);
        }

        if let Some(cache) = &self.cache {
            if let Some(coordinate) = cache.get(address).await {
                self.metrics.geocode_cache_hit();
                debug!(address, %coordinate, "Geocode cache hit");
                return Ok(coordinate);
            }
        }

        let result = self
            .geocoder
            .geocode(address)
            .await
            .map_err(|e| ResolutionError::GeocodingFailed(e.to_string()))?
            .ok_or(ResolutionError::AddressNotFound)?;

        debug!(
            address,
            coordinate = %result.coordinate,
            geocoder = self.geocoder.name(),
            "Address geocoded"
        );

        if let Some(cache) = &self.cache {
            cache.set(address, result.coordinate).await;
        }

        Ok(result.coordinate)
    }

    /// Stage 2: source + destination → first usable route.
    async fn direct(
        &self,
        source: Coordinate,
        destination: Coordinate,
    ) -> Result<Route, ResolutionError> {
        let candidates = self
            .directions
            .directions(source, destination, TransportMode::Automobile)
            .await
            .map_err(|e| ResolutionError::DirectionsFailed(e.to_string()))?;

        debug!(
            candidates = candidates.len(),
            provider = self.directions.name(),
            "Directions received"
        );

        candidates
            .into_iter()
            .find_map(Route::from_candidate)
            .ok_or(ResolutionError::NoRouteFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryGeocodeCache;
    use crate::pipeline::mock::{MockDirections, MockGeocoder};
    use crate::provider::{ProviderError, RouteCandidate};

    const SOURCE: Coordinate = Coordinate::new(53.5511, 9.9937);
    const DESTINATION: Coordinate = Coordinate::new(53.8655, 10.6866);

    fn request(address: &str) -> RouteRequest {
        RouteRequest::new(SOURCE, address)
    }

    fn candidate() -> RouteCandidate {
        RouteCandidate {
            polyline: vec![SOURCE, Coordinate::new(53.7, 10.2), DESTINATION],
            distance_meters: 67_000.0,
            duration_seconds: 3_100.0,
        }
    }

    #[tokio::test]
    async fn test_success_returns_first_route() {
        let mut second = candidate();
        second.distance_meters = 99_000.0;
        let pipeline = RoutePipeline::new(
            MockGeocoder::found(DESTINATION),
            MockDirections::routes(vec![candidate(), second]),
        );

        let route = pipeline.resolve(&request("Lübeck")).await.unwrap();
        assert_eq!(route.distance_meters(), 67_000.0);
        assert_eq!(route.polyline().len(), 3);
        assert_eq!(route.bounding_region().min_lat, SOURCE.lat);
        assert_eq!(route.bounding_region().max_lon, DESTINATION.lon);
    }

    #[tokio::test]
    async fn test_directions_receive_geocoded_destination() {
        let directions = MockDirections::routes(vec![candidate()]);
        let pipeline = RoutePipeline::new(MockGeocoder::found(DESTINATION), directions);

        pipeline.resolve(&request("Lübeck")).await.unwrap();

        let calls = pipeline.directions.requests();
        assert_eq!(calls, vec![(SOURCE, DESTINATION, TransportMode::Automobile)]);
    }

    #[tokio::test]
    async fn test_no_match_is_address_not_found_and_skips_directions() {
        let pipeline = RoutePipeline::new(
            MockGeocoder::no_match(),
            MockDirections::routes(vec![candidate()]),
        );

        let result = pipeline.resolve(&request("Nowhere")).await;
        assert_eq!(result, Err(ResolutionError::AddressNotFound));
        assert_eq!(pipeline.directions.calls(), 0);
    }

    #[tokio::test]
    async fn test_blank_address_skips_geocoder() {
        let pipeline = RoutePipeline::new(
            MockGeocoder::found(DESTINATION),
            MockDirections::routes(vec![candidate()]),
        );

        let result = pipeline.resolve(&request("   ")).await;
        assert_eq!(result, Err(ResolutionError::AddressNotFound));
        assert_eq!(pipeline.geocoder.calls(), 0);
    }

    #[tokio::test]
    async fn test_geocoder_error_is_geocoding_failed() {
        let pipeline = RoutePipeline::new(
            MockGeocoder::failing(ProviderError::Timeout("10s".to_string())),
            MockDirections::routes(vec![candidate()]),
        );

        let result = pipeline.resolve(&request("Lübeck")).await;
        assert_eq!(
            result,
            Err(ResolutionError::GeocodingFailed(
                "Request timed out: 10s".to_string()
            ))
        );
        assert_eq!(pipeline.directions.calls(), 0);
    }

    #[tokio::test]
    async fn test_zero_routes_is_no_route_found() {
        let pipeline = RoutePipeline::new(
            MockGeocoder::found(DESTINATION),
            MockDirections::routes(Vec::new()),
        );

        let result = pipeline.resolve(&request("Lübeck")).await;
        assert_eq!(result, Err(ResolutionError::NoRouteFound));
    }

    #[tokio::test]
    async fn test_empty_geometry_is_no_route_found() {
        let pipeline = RoutePipeline::new(
            MockGeocoder::found(DESTINATION),
            MockDirections::routes(vec![RouteCandidate {
                polyline: Vec::new(),
                distance_meters: 0.0,
                duration_seconds: 0.0,
            }]),
        );

        let result = pipeline.resolve(&request("Lübeck")).await;
        assert_eq!(result, Err(ResolutionError::NoRouteFound));
    }

    #[tokio::test]
    async fn test_directions_error_is_directions_failed() {
        let pipeline = RoutePipeline::new(
            MockGeocoder::found(DESTINATION),
            MockDirections::failing(ProviderError::HttpError("reset".to_string())),
        );

        let result = pipeline.resolve(&request("Lübeck")).await;
        assert_eq!(
            result,
            Err(ResolutionError::DirectionsFailed(
                "HTTP error: reset".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_cache_short_circuits_geocoder() {
        let cache = Arc::new(MemoryGeocodeCache::default());
        let pipeline = RoutePipeline::new(
            MockGeocoder::found(DESTINATION),
            MockDirections::routes(vec![candidate()]),
        )
        .with_cache(cache);

        pipeline.resolve(&request("Lübeck")).await.unwrap();
        pipeline.resolve(&request("  lübeck ")).await.unwrap();

        assert_eq!(pipeline.geocoder.calls(), 1);
        assert_eq!(pipeline.directions.calls(), 2);
        assert_eq!(pipeline.metrics().snapshot().geocode_cache_hits, 1);
    }

    #[tokio::test]
    async fn test_metrics_record_outcomes() {
        let pipeline = RoutePipeline::new(
            MockGeocoder::no_match(),
            MockDirections::routes(vec![candidate()]),
        );

        let _ = pipeline.resolve(&request("Nowhere")).await;

        let snapshot = pipeline.metrics().snapshot();
        assert_eq!(snapshot.started, 1);
        assert_eq!(snapshot.succeeded, 0);
        assert_eq!(snapshot.address_not_found, 1);
    }
}
