//! Resolution error taxonomy.

use thiserror::Error;

/// Why a resolution attempt failed. Every variant is terminal for the attempt.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolutionError {
    /// The geocoder had no match for the destination address.
    #[error("No location matches the destination address")]
    AddressNotFound,

    /// The geocoder failed for any other reason, including timeouts.
    #[error("Geocoding failed: {0}")]
    GeocodingFailed(String),

    /// The directions service failed, including timeouts.
    #[error("Directions request failed: {0}")]
    DirectionsFailed(String),

    /// The directions service returned no usable route.
    #[error("No route found to the destination")]
    NoRouteFound,
}

impl ResolutionError {
    /// Short machine-readable kind for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ResolutionError::AddressNotFound => "address_not_found",
            ResolutionError::GeocodingFailed(_) => "geocoding_failed",
            ResolutionError::DirectionsFailed(_) => "directions_failed",
            ResolutionError::NoRouteFound => "no_route_found",
        }
    }
}
