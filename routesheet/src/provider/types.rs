//! Provider types and traits

use std::fmt;
use std::future::Future;

use crate::coord::Coordinate;

/// Errors that can occur during provider operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// HTTP request failed before a response was received
    HttpError(String),
    /// Server answered with a non-success status
    HttpStatus { status: u16, body: String },
    /// Request exceeded the client timeout
    Timeout(String),
    /// Response body could not be decoded
    InvalidResponse(String),
    /// Provider-specific error
    ProviderSpecific(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::HttpError(msg) => write!(f, "HTTP error: {}", msg),
            ProviderError::HttpStatus { status, .. } => write!(f, "HTTP status {}", status),
            ProviderError::Timeout(msg) => write!(f, "Request timed out: {}", msg),
            ProviderError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
            ProviderError::ProviderSpecific(msg) => write!(f, "Provider error: {}", msg),
        }
    }
}

impl std::error::Error for ProviderError {}

/// A successful geocoding match.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeResult {
    pub coordinate: Coordinate,
    /// Human-readable name of the match, when the service supplies one.
    pub display_name: Option<String>,
}

impl GeocodeResult {
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            display_name: None,
        }
    }
}

/// Transport mode requested from a directions service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportMode {
    #[default]
    Automobile,
}

impl TransportMode {
    /// OSRM routing profile for this mode.
    pub fn osrm_profile(&self) -> &'static str {
        match self {
            TransportMode::Automobile => "driving",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportMode::Automobile => write!(f, "automobile"),
        }
    }
}

/// One route returned by a directions service, in service order.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteCandidate {
    pub polyline: Vec<Coordinate>,
    pub distance_meters: f64,
    pub duration_seconds: f64,
}

/// Resolves free-text addresses to coordinates.
pub trait Geocoder: Send + Sync {
    /// Geocode an address.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the service has no match, `Ok(Some(_))` with the best
    /// match otherwise.
    fn geocode(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<Option<GeocodeResult>, ProviderError>> + Send;

    /// Returns the provider's name for logging and identification.
    fn name(&self) -> &str;
}

/// Computes routes between two coordinates.
pub trait DirectionsProvider: Send + Sync {
    /// Request routes from `source` to `destination`.
    ///
    /// # Returns
    ///
    /// Candidates in the service's preference order; empty when no route
    /// exists.
    fn directions(
        &self,
        source: Coordinate,
        destination: Coordinate,
        mode: TransportMode,
    ) -> impl Future<Output = Result<Vec<RouteCandidate>, ProviderError>> + Send;

    /// Returns the provider's name for logging and identification.
    fn name(&self) -> &str;
}
