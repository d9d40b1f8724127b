//! OSRM directions provider.
//!
//! # API Endpoint
//!
//! `GET {base}/route/v1/{profile}/{src_lon},{src_lat};{dst_lon},{dst_lat}?overview=full&geometries=geojson&alternatives=false&steps=false`
//!
//! Coordinates in both the request path and the GeoJSON geometry are
//! `lon,lat` ordered. A `NoRoute` code (which OSRM may send with a 400
//! status) means the points are not connected and maps to zero candidates.

use std::future::Future;

use serde::Deserialize;

use crate::coord::Coordinate;
use crate::provider::{
    AsyncHttpClient, DirectionsProvider, ProviderError, RouteCandidate, TransportMode,
};

/// Public OSRM demo server.
pub const DEFAULT_OSRM_URL: &str = "https://router.project-osrm.org";

const NO_ROUTE_CODES: &[&str] = &["NoRoute", "NoSegment"];

#[derive(Debug, Deserialize)]
struct RouteResponse {
    code: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    distance: f64,
    duration: f64,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    coordinates: Vec<[f64; 2]>,
}

/// Directions provider backed by an OSRM server.
pub struct OsrmDirections<C: AsyncHttpClient> {
    http_client: C,
    base_url: String,
}

impl<C: AsyncHttpClient> OsrmDirections<C> {
    /// Creates a provider against the public OSRM demo server.
    pub fn new(http_client: C) -> Self {
        Self::with_base_url(http_client, DEFAULT_OSRM_URL)
    }

    /// Creates a provider against a custom OSRM server.
    pub fn with_base_url(http_client: C, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn build_url(&self, source: Coordinate, destination: Coordinate, mode: TransportMode) -> String {
        format!(
            "{}/route/v1/{}/{},{};{},{}?overview=full&geometries=geojson&alternatives=false&steps=false",
            self.base_url,
            mode.osrm_profile(),
            source.lon,
            source.lat,
            destination.lon,
            destination.lat
        )
    }
}

/// Decode an OSRM route response body.
fn parse_route_response(body: &[u8]) -> Result<Vec<RouteCandidate>, ProviderError> {
    let response: RouteResponse = serde_json::from_slice(body)
        .map_err(|e| ProviderError::InvalidResponse(format!("Malformed directions JSON: {}", e)))?;

    if NO_ROUTE_CODES.contains(&response.code.as_str()) {
        return Ok(Vec::new());
    }
    if response.code != "Ok" {
        return Err(ProviderError::ProviderSpecific(format!(
            "{}: {}",
            response.code,
            response.message.unwrap_or_default()
        )));
    }

    Ok(response
        .routes
        .into_iter()
        .map(|route| RouteCandidate {
            polyline: route
                .geometry
                .coordinates
                .into_iter()
                .map(|[lon, lat]| Coordinate::new(lat, lon))
                .collect(),
            distance_meters: route.distance,
            duration_seconds: route.duration,
        })
        .collect())
}

impl<C: AsyncHttpClient> DirectionsProvider for OsrmDirections<C> {
    fn directions(
        &self,
        source: Coordinate,
        destination: Coordinate,
        mode: TransportMode,
    ) -> impl Future<Output = Result<Vec<RouteCandidate>, ProviderError>> + Send {
        let url = self.build_url(source, destination, mode);
        async move {
            match self.http_client.get(&url).await {
                Ok(body) => parse_route_response(&body),
                // Error statuses still carry a structured code
                Err(ProviderError::HttpStatus { status, body }) => {
                    match parse_route_response(body.as_bytes()) {
                        Ok(candidates) => Ok(candidates),
                        Err(_) => Err(ProviderError::HttpStatus { status, body }),
                    }
                }
                Err(e) => Err(e),
            }
        }
    }

    fn name(&self) -> &str {
        "OSRM"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::MockAsyncHttpClient;

    const HAMBURG: Coordinate = Coordinate::new(53.5511, 9.9937);
    const LUBECK: Coordinate = Coordinate::new(53.8655, 10.6866);

    const OK_BODY: &str = r#"{
        "code": "Ok",
        "routes": [{
            "distance": 67012.3,
            "duration": 3120.5,
            "geometry": {"type": "LineString", "coordinates": [[9.9937, 53.5511], [10.2, 53.7], [10.6866, 53.8655]]}
        }],
        "waypoints": []
    }"#;

    #[test]
    fn test_url_is_lon_lat_ordered() {
        let provider = OsrmDirections::with_base_url(
            MockAsyncHttpClient::ok(OK_BODY),
            "https://osrm.example.com/",
        );
        let url = provider.build_url(HAMBURG, LUBECK, TransportMode::Automobile);
        assert!(url.starts_with(
            "https://osrm.example.com/route/v1/driving/9.9937,53.5511;10.6866,53.8655?"
        ));
        assert!(url.contains("overview=full"));
        assert!(url.contains("geometries=geojson"));
    }

    #[tokio::test]
    async fn test_directions_parses_candidate() {
        let provider = OsrmDirections::new(MockAsyncHttpClient::ok(OK_BODY));
        let candidates = provider
            .directions(HAMBURG, LUBECK, TransportMode::Automobile)
            .await
            .unwrap();

        assert_eq!(candidates.len(), 1);
        let route = &candidates[0];
        assert_eq!(route.polyline.len(), 3);
        assert_eq!(route.polyline[0], HAMBURG);
        assert_eq!(route.distance_meters, 67012.3);
        assert_eq!(route.duration_seconds, 3120.5);
    }

    #[tokio::test]
    async fn test_no_route_code_is_empty() {
        let provider = OsrmDirections::new(MockAsyncHttpClient::ok(
            r#"{"code": "NoRoute", "message": "Impossible route between points"}"#,
        ));
        let candidates = provider
            .directions(HAMBURG, LUBECK, TransportMode::Automobile)
            .await
            .unwrap();
        assert!(candidates.is_empty());
    }

    #[tokio::test]
    async fn test_no_route_with_error_status_is_empty() {
        let provider = OsrmDirections::new(MockAsyncHttpClient::with_response(Err(
            ProviderError::HttpStatus {
                status: 400,
                body: r#"{"code": "NoRoute", "message": "Impossible route"}"#.to_string(),
            },
        )));
        let candidates = provider
            .directions(HAMBURG, LUBECK, TransportMode::Automobile)
            .await
            .unwrap();
        assert!(candidates.is_empty());
    }

    #[tokio::test]
    async fn test_error_status_without_code_is_kept() {
        let provider = OsrmDirections::new(MockAsyncHttpClient::with_response(Err(
            ProviderError::HttpStatus {
                status: 502,
                body: "Bad Gateway".to_string(),
            },
        )));
        let result = provider
            .directions(HAMBURG, LUBECK, TransportMode::Automobile)
            .await;
        assert!(matches!(
            result,
            Err(ProviderError::HttpStatus { status: 502, .. })
        ));
    }

    #[tokio::test]
    async fn test_other_code_is_provider_error() {
        let provider = OsrmDirections::new(MockAsyncHttpClient::ok(
            r#"{"code": "InvalidQuery", "message": "Query string malformed"}"#,
        ));
        let result = provider
            .directions(HAMBURG, LUBECK, TransportMode::Automobile)
            .await;
        assert_eq!(
            result,
            Err(ProviderError::ProviderSpecific(
                "InvalidQuery: Query string malformed".to_string()
            ))
        );
    }
}
