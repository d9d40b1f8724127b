//! OpenStreetMap Nominatim geocoder.
//!
//! # API Endpoint
//!
//! `GET {base}/search?q={address}&format=jsonv2&limit=1`
//!
//! The response is a JSON array of matches, best first. Latitude and
//! longitude are encoded as strings:
//!
//! ```text
//! [{"lat": "52.5170365", "lon": "13.3888599", "display_name": "Berlin, Deutschland"}]
//! ```
//!
//! An empty array means the address has no match.

use std::future::Future;

use serde::Deserialize;

use crate::coord::Coordinate;
use crate::provider::{AsyncHttpClient, GeocodeResult, Geocoder, ProviderError};

/// Public Nominatim instance.
pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: Option<String>,
}

/// Geocoder backed by a Nominatim server.
pub struct NominatimGeocoder<C: AsyncHttpClient> {
    http_client: C,
    base_url: String,
}

impl<C: AsyncHttpClient> NominatimGeocoder<C> {
    /// Creates a geocoder against the public Nominatim instance.
    pub fn new(http_client: C) -> Self {
        Self::with_base_url(http_client, DEFAULT_NOMINATIM_URL)
    }

    /// Creates a geocoder against a custom Nominatim server.
    pub fn with_base_url(http_client: C, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn build_url(&self, address: &str) -> Result<String, ProviderError> {
        reqwest::Url::parse_with_params(
            &format!("{}/search", self.base_url),
            &[("q", address), ("format", "jsonv2"), ("limit", "1")],
        )
        .map(String::from)
        .map_err(|e| ProviderError::ProviderSpecific(format!("Invalid geocoder URL: {}", e)))
    }
}

/// Decode a Nominatim search response into its best match.
fn parse_search_response(body: &[u8]) -> Result<Option<GeocodeResult>, ProviderError> {
    let places: Vec<Place> = serde_json::from_slice(body)
        .map_err(|e| ProviderError::InvalidResponse(format!("Malformed geocoder JSON: {}", e)))?;

    let Some(place) = places.into_iter().next() else {
        return Ok(None);
    };

    let lat: f64 = place
        .lat
        .parse()
        .map_err(|_| ProviderError::InvalidResponse(format!("Bad latitude '{}'", place.lat)))?;
    let lon: f64 = place
        .lon
        .parse()
        .map_err(|_| ProviderError::InvalidResponse(format!("Bad longitude '{}'", place.lon)))?;
    let coordinate = Coordinate::validated(lat, lon)
        .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

    Ok(Some(GeocodeResult {
        coordinate,
        display_name: place.display_name,
    }))
}

impl<C: AsyncHttpClient> Geocoder for NominatimGeocoder<C> {
    fn geocode(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<Option<GeocodeResult>, ProviderError>> + Send {
        let url = self.build_url(address);
        async move {
            let body = self.http_client.get(&url?).await?;
            parse_search_response(&body)
        }
    }

    fn name(&self) -> &str {
        "Nominatim"
    }
}
