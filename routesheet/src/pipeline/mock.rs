//! Test doubles for the geocoding and directions collaborators.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::Notify;

use crate::coord::Coordinate;
use crate::provider::{
    DirectionsProvider, GeocodeResult, Geocoder, ProviderError, RouteCandidate, TransportMode,
};

/// Geocoder returning a canned response, optionally held until released.
pub struct MockGeocoder {
    response: Result<Option<GeocodeResult>, ProviderError>,
    calls: AtomicUsize,
    gate: Option<Arc<Notify>>,
}

impl MockGeocoder {
    pub fn found(coordinate: Coordinate) -> Self {
        Self::with_response(Ok(Some(GeocodeResult::new(coordinate))))
    }

    pub fn no_match() -> Self {
        Self::with_response(Ok(None))
    }

    pub fn failing(error: ProviderError) -> Self {
        Self::with_response(Err(error))
    }

    fn with_response(response: Result<Option<GeocodeResult>, ProviderError>) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
            gate: None,
        }
    }

    /// Hold every response until `gate` is notified.
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Geocoder for MockGeocoder {
    fn geocode(
        &self,
        _address: &str,
    ) -> impl Future<Output = Result<Option<GeocodeResult>, ProviderError>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let response = self.response.clone();
        let gate = self.gate.clone();
        async move {
            if let Some(gate) = gate {
                gate.notified().await;
            }
            response
        }
    }

    fn name(&self) -> &str {
        "mock-geocoder"
    }
}

/// Directions provider returning canned candidates and recording requests.
pub struct MockDirections {
    response: Result<Vec<RouteCandidate>, ProviderError>,
    requests: Mutex<Vec<(Coordinate, Coordinate, TransportMode)>>,
}

impl MockDirections {
    pub fn routes(candidates: Vec<RouteCandidate>) -> Self {
        Self {
            response: Ok(candidates),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: ProviderError) -> Self {
        Self {
            response: Err(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn requests(&self) -> Vec<(Coordinate, Coordinate, TransportMode)> {
        self.requests.lock().clone()
    }
}

impl DirectionsProvider for MockDirections {
    fn directions(
        &self,
        source: Coordinate,
        destination: Coordinate,
        mode: TransportMode,
    ) -> impl Future<Output = Result<Vec<RouteCandidate>, ProviderError>> + Send {
        self.requests.lock().push((source, destination, mode));
        let response = self.response.clone();
        async move { response }
    }

    fn name(&self) -> &str {
        "mock-directions"
    }
}
