//! External geocoding and directions collaborators.
//!
//! This module provides the [`Geocoder`] and [`DirectionsProvider`] traits the
//! resolution pipeline depends on, plus HTTP implementations backed by
//! OpenStreetMap services (Nominatim for geocoding, OSRM for routing).
//!
//! # Example
//!
//! ```ignore
//! use routesheet::provider::{AsyncReqwestClient, NominatimGeocoder, OsrmDirections};
//!
//! let http_client = AsyncReqwestClient::new()?;
//! let geocoder = NominatimGeocoder::new(http_client.clone());
//! let directions = OsrmDirections::new(http_client);
//! ```

mod http;
mod nominatim;
mod osrm;
mod types;

pub use http::{AsyncHttpClient, AsyncReqwestClient, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
pub use nominatim::{NominatimGeocoder, DEFAULT_NOMINATIM_URL};
pub use osrm::{OsrmDirections, DEFAULT_OSRM_URL};
pub use types::{
    DirectionsProvider, GeocodeResult, Geocoder, ProviderError, RouteCandidate, TransportMode,
};

#[cfg(test)]
pub use http::tests::MockAsyncHttpClient;
