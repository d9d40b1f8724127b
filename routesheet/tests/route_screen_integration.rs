//! Integration tests for the route screen.
//!
//! These tests drive the complete flow with the HTTP-backed providers over a
//! canned HTTP client:
//! - open → Nominatim → OSRM → map overlay + summary card
//! - resolution errors → alert → acknowledgement → dismiss
//! - sheet gestures racing the resolution
//!
//! Run with: `cargo test --test route_screen_integration`

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use routesheet::alert::RecordingAlertChannel;
use routesheet::cache::MemoryGeocodeCache;
use routesheet::coord::Coordinate;
use routesheet::map::{Overlay, PolylineStyle, RecordingMapSurface};
use routesheet::pipeline::{RoutePipeline, RouteRequest};
use routesheet::provider::{AsyncHttpClient, NominatimGeocoder, OsrmDirections, ProviderError};
use routesheet::screen::{DismissReason, RecordingHost, RouteScreen, ScreenEvent, ScreenPhase, ScreenSurfaces};
use routesheet::sheet::{PanEvent, SheetConfig, SheetController, SheetExtent};
use routesheet::summary::RecordingCardSurface;

// ============================================================================
// Helper Functions
// ============================================================================

const HAMBURG: Coordinate = Coordinate::new(53.5511, 9.9937);
const ANIMATION: Duration = Duration::from_millis(300);

const LUEBECK_SEARCH: &str = r#"[{"lat":"53.8655","lon":"10.6866","display_name":"Lübeck, Schleswig-Holstein, Deutschland"}]"#;

const HAMBURG_LUEBECK_ROUTE: &str = r#"{
    "code": "Ok",
    "routes": [{
        "distance": 67450.3,
        "duration": 3125.9,
        "geometry": {"type": "LineString", "coordinates": [[9.9937, 53.5511], [10.2, 53.7], [10.6866, 53.8655]]}
    }]
}"#;

/// HTTP client answering by endpoint and recording every URL.
#[derive(Clone)]
struct CannedHttp {
    search: Result<String, ProviderError>,
    route: Result<String, ProviderError>,
    urls: Arc<Mutex<Vec<String>>>,
}

impl CannedHttp {
    fn new(search: &str, route: &str) -> Self {
        Self {
            search: Ok(search.to_string()),
            route: Ok(route.to_string()),
            urls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn with_route_error(mut self, error: ProviderError) -> Self {
        self.route = Err(error);
        self
    }

    fn urls(&self) -> Vec<String> {
        self.urls.lock().clone()
    }
}

impl AsyncHttpClient for CannedHttp {
    fn get(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, ProviderError>> + Send {
        self.urls.lock().push(url.to_string());
        let response = if url.contains("/search") {
            self.search.clone()
        } else {
            self.route.clone()
        };
        async move { response.map(String::into_bytes) }
    }
}

struct Views {
    map: RecordingMapSurface,
    card: RecordingCardSurface,
    alerts: RecordingAlertChannel,
    host: RecordingHost,
}

type Screen = RouteScreen<NominatimGeocoder<CannedHttp>, OsrmDirections<CannedHttp>>;

fn make_screen(http: &CannedHttp, address: &str) -> (Screen, Views) {
    let views = Views {
        map: RecordingMapSurface::new(),
        card: RecordingCardSurface::new(),
        alerts: RecordingAlertChannel::new(),
        host: RecordingHost::new(),
    };
    let pipeline = RoutePipeline::new(
        NominatimGeocoder::with_base_url(http.clone(), "http://geocoder.test"),
        OsrmDirections::with_base_url(http.clone(), "http://router.test"),
    )
    .with_cache(Arc::new(MemoryGeocodeCache::default()));
    let sheet = SheetController::new(
        SheetExtent::new(0.0, 560.0).unwrap(),
        SheetConfig::new(ANIMATION),
    );
    let screen = RouteScreen::new(
        RouteRequest::new(HAMBURG, address),
        Arc::new(pipeline),
        sheet,
        PolylineStyle::default(),
        ScreenSurfaces::new(
            views.map.clone(),
            views.card.clone(),
            views.alerts.clone(),
            views.host.clone(),
        ),
    );
    (screen, views)
}

// ============================================================================
// Integration Tests
// ============================================================================

#[tokio::test]
async fn test_open_resolves_and_renders_route() {
    let http = CannedHttp::new(LUEBECK_SEARCH, HAMBURG_LUEBECK_ROUTE);
    let (mut screen, views) = make_screen(&http, "Lübeck");

    screen.open();
    screen.handle(ScreenEvent::Tick(ANIMATION));
    assert!(screen.process_next().await);

    let map = views.map.snapshot();
    assert_eq!(map.overlays.len(), 1);
    let Overlay::Polyline { points, .. } = &map.overlays[0];
    assert_eq!(points.len(), 3);
    assert_eq!(map.markers[0].title, "Lübeck");
    assert_eq!(map.markers[0].coordinate, Coordinate::new(53.8655, 10.6866));
    assert!(map.viewport.unwrap().1, "viewport change should be animated");

    assert_eq!(views.card.cards()[0].text, "67.45 km • 0h 52m");
    assert_eq!(screen.sheet().offset(), 560.0);

    // Geocode strictly precedes directions
    let urls = http.urls();
    assert_eq!(urls.len(), 2);
    assert!(urls[0].starts_with("http://geocoder.test/search?"));
    assert!(urls[1].starts_with("http://router.test/route/v1/driving/9.9937,53.5511;10.6866,53.8655"));
}

#[tokio::test]
async fn test_unknown_address_alerts_and_dismisses_after_acknowledgement() {
    let http = CannedHttp::new("[]", HAMBURG_LUEBECK_ROUTE);
    let (mut screen, views) = make_screen(&http, "Atlantis");

    screen.open();
    assert!(screen.process_next().await);

    assert_eq!(screen.phase(), ScreenPhase::AwaitingAlertAck);
    let alerts = views.alerts.alerts();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].title, "Address Not Found");
    assert!(alerts[0].message.contains("Atlantis"));
    // Directions are never requested
    assert_eq!(http.urls().len(), 1);

    screen.ui_handle().acknowledge_alert();
    screen.process_pending();

    assert_eq!(views.host.dismissals(), vec![DismissReason::ResolutionFailed]);
    assert!(views.card.cards().is_empty());
}

#[tokio::test]
async fn test_no_route_response_is_no_route_found() {
    let http = CannedHttp::new(LUEBECK_SEARCH, r#"{"code":"NoRoute","message":"Impossible route","routes":[]}"#);
    let (mut screen, views) = make_screen(&http, "Lübeck");

    screen.open();
    assert!(screen.process_next().await);

    assert_eq!(views.alerts.alerts()[0].title, "No Route Found");
    assert_eq!(views.map.overlay_count(), 0);
}

#[tokio::test]
async fn test_directions_timeout_is_directions_unavailable() {
    let http = CannedHttp::new(LUEBECK_SEARCH, HAMBURG_LUEBECK_ROUTE)
        .with_route_error(ProviderError::Timeout("15s".to_string()));
    let (mut screen, views) = make_screen(&http, "Lübeck");

    screen.open();
    assert!(screen.process_next().await);

    let alerts = views.alerts.alerts();
    assert_eq!(alerts[0].title, "Directions Unavailable");
    assert!(alerts[0].message.contains("15s"));
}

#[tokio::test]
async fn test_retry_reuses_cached_geocode() {
    let http = CannedHttp::new(LUEBECK_SEARCH, HAMBURG_LUEBECK_ROUTE);
    let (mut screen, views) = make_screen(&http, "Lübeck");

    screen.open();
    assert!(screen.process_next().await);
    screen.handle(ScreenEvent::Retry);
    assert!(screen.process_next().await);

    let searches = http.urls().iter().filter(|u| u.contains("/search")).count();
    assert_eq!(searches, 1);
    assert_eq!(views.map.overlay_count(), 1);
    assert_eq!(views.card.cards().len(), 1);
}

#[tokio::test]
async fn test_flick_down_mid_resolution_dismisses_and_drops_result() {
    let http = CannedHttp::new(LUEBECK_SEARCH, HAMBURG_LUEBECK_ROUTE);
    let (mut screen, views) = make_screen(&http, "Lübeck");
    let ui = screen.ui_handle();

    screen.open();
    screen.handle(ScreenEvent::Tick(ANIMATION));
    ui.pan(PanEvent::changed(80.0, 1200.0));
    ui.pan(PanEvent::ended(80.0, 1200.0));
    ui.send(ScreenEvent::Tick(ANIMATION));
    screen.process_pending();

    assert_eq!(views.host.dismissals(), vec![DismissReason::SheetClosed]);

    tokio::time::sleep(Duration::from_millis(20)).await;
    screen.process_pending();
    assert_eq!(views.map.overlay_count(), 0);
    assert!(views.card.cards().is_empty());
    assert_eq!(views.host.dismissals().len(), 1);
}

#[tokio::test]
async fn test_run_until_sheet_closed() {
    let http = CannedHttp::new(LUEBECK_SEARCH, HAMBURG_LUEBECK_ROUTE);
    let (mut screen, views) = make_screen(&http, "Lübeck");
    let ui = screen.ui_handle();

    let closer = async {
        while views.card.cards().is_empty() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        ui.request_close();
    };
    let (reason, ()) = tokio::join!(screen.run(), closer);

    assert_eq!(reason, Some(DismissReason::SheetClosed));
    assert_eq!(views.host.dismissals(), vec![DismissReason::SheetClosed]);
}
