//! Route command - resolve a destination and present it on a sheet.
//!
//! The terminal plays the user: once the summary card is shown the sheet is
//! closed, and an error alert is acknowledged as soon as it is printed.

use std::sync::Arc;

use console::style;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;

use routesheet::cache::MemoryGeocodeCache;
use routesheet::config::ConfigFile;
use routesheet::coord::Coordinate;
use routesheet::pipeline::{RoutePipeline, RouteRequest};
use routesheet::provider::{AsyncReqwestClient, NominatimGeocoder, OsrmDirections};
use routesheet::screen::{DismissReason, RouteScreen, ScreenSurfaces, UiHandle};
use routesheet::sheet::SheetController;

use crate::console::{ConsoleAlerts, ConsoleCard, ConsoleHost, ConsoleMap, Seen};
use crate::error::CliError;

pub fn run(config: &ConfigFile, from: Coordinate, to: &str) -> Result<(), CliError> {
    let runtime = tokio::runtime::Runtime::new().map_err(CliError::Runtime)?;
    runtime.block_on(present_route(config, from, to))
}

async fn present_route(config: &ConfigFile, from: Coordinate, to: &str) -> Result<(), CliError> {
    let http_client =
        AsyncReqwestClient::with_settings(config.network.timeout_secs, &config.network.user_agent)
            .map_err(CliError::HttpClient)?;

    let mut pipeline = RoutePipeline::new(
        NominatimGeocoder::with_base_url(http_client.clone(), config.geocoder.url.as_str()),
        OsrmDirections::with_base_url(http_client, config.directions.url.as_str()),
    );
    if config.cache.geocode_capacity > 0 {
        pipeline = pipeline.with_cache(Arc::new(MemoryGeocodeCache::new(
            config.cache.geocode_capacity,
            None,
        )));
    }
    let pipeline = Arc::new(pipeline);

    let (seen_tx, seen_rx) = mpsc::unbounded_channel();
    let surfaces = ScreenSurfaces::new(
        ConsoleMap,
        ConsoleCard::new(seen_tx.clone()),
        ConsoleAlerts::new(seen_tx),
        ConsoleHost,
    );
    let sheet = SheetController::new(config.sheet.extent, config.sheet.sheet_config());
    let mut screen = RouteScreen::new(
        RouteRequest::new(from, to),
        Arc::clone(&pipeline),
        sheet,
        config.map.route_style,
        surfaces,
    );

    println!(
        "Route from {} to {}",
        style(from).bold(),
        style(to).bold()
    );

    let ui = screen.ui_handle();
    let liveness = screen.liveness();
    let (reason, ()) = tokio::join!(screen.run(), act_as_user(seen_rx, ui, liveness));

    info!(metrics = %pipeline.metrics().snapshot(), "Route command finished");

    match reason {
        Some(DismissReason::SheetClosed) => Ok(()),
        Some(DismissReason::ResolutionFailed) => Err(CliError::RouteFailed),
        None => Err(CliError::Interrupted),
    }
}

/// Close the sheet after the card appears; acknowledge any alert.
///
/// Returns once the screen is torn down.
async fn act_as_user(
    mut seen: mpsc::UnboundedReceiver<Seen>,
    ui: UiHandle,
    liveness: CancellationToken,
) {
    loop {
        let event = tokio::select! {
            _ = liveness.cancelled() => return,
            event = seen.recv() => event,
        };
        let delivered = match event {
            Some(Seen::Card) => ui.request_close(),
            Some(Seen::Alert) => ui.acknowledge_alert(),
            None => return,
        };
        if !delivered {
            return;
        }
    }
}
