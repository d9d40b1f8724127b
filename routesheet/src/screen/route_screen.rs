//! The route screen's UI loop.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace, warn};

use super::events::{DismissReason, HostScreen, ScreenEvent, UiHandle};
use crate::alert::{Alert, AlertChannel};
use crate::map::{MapOverlayRenderer, MapSurface, PolylineStyle};
use crate::pipeline::{ResolutionSlot, Route, RouteRequest, RoutePipeline};
use crate::provider::{DirectionsProvider, Geocoder};
use crate::sheet::{PanTracker, SheetController, SheetEvent, SheetState};
use crate::summary::{CardSurface, RouteSummaryPresenter};

/// Animation frame interval of [`RouteScreen::run`].
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Lifecycle of a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenPhase {
    /// Constructed, not yet opened.
    Created,
    /// Sheet visible; resolution pending or done.
    Open,
    /// A resolution error is on screen, waiting for acknowledgement.
    AwaitingAlertAck,
    /// Host dismissed or screen torn down. Terminal.
    Dismissed,
}

/// The views a screen drives.
pub struct ScreenSurfaces {
    pub map: Box<dyn MapSurface + Send>,
    pub card: Box<dyn CardSurface + Send>,
    pub alerts: Box<dyn AlertChannel + Send>,
    pub host: Box<dyn HostScreen + Send>,
}

impl ScreenSurfaces {
    pub fn new(
        map: impl MapSurface + Send + 'static,
        card: impl CardSurface + Send + 'static,
        alerts: impl AlertChannel + Send + 'static,
        host: impl HostScreen + Send + 'static,
    ) -> Self {
        Self {
            map: Box::new(map),
            card: Box::new(card),
            alerts: Box::new(alerts),
            host: Box::new(host),
        }
    }
}

/// A sheet hosting a map, resolving one destination on open.
///
/// All UI state (sheet, overlays, card, alert, phase) is owned here and only
/// mutated from [`handle`](Self::handle). Resolutions run on spawned tokio
/// tasks and come back as [`ScreenEvent::Resolved`] through a weak sender,
/// so a torn-down screen never sees them.
///
/// The host is dismissed at most once.
pub struct RouteScreen<G: Geocoder, D: DirectionsProvider> {
    request: RouteRequest,
    pipeline: Arc<RoutePipeline<G, D>>,
    sheet: SheetController,
    pan: PanTracker,
    renderer: MapOverlayRenderer<Box<dyn MapSurface + Send>>,
    summary: RouteSummaryPresenter<Box<dyn CardSurface + Send>>,
    alerts: Box<dyn AlertChannel + Send>,
    host: Box<dyn HostScreen + Send>,
    liveness: CancellationToken,
    slot: ResolutionSlot,
    tx: mpsc::UnboundedSender<ScreenEvent>,
    rx: mpsc::UnboundedReceiver<ScreenEvent>,
    phase: ScreenPhase,
    close_pending: bool,
    route: Option<Route>,
    dismissed: Option<DismissReason>,
}

impl<G, D> RouteScreen<G, D>
where
    G: Geocoder + 'static,
    D: DirectionsProvider + 'static,
{
    pub fn new(
        request: RouteRequest,
        pipeline: Arc<RoutePipeline<G, D>>,
        sheet: SheetController,
        style: PolylineStyle,
        surfaces: ScreenSurfaces,
    ) -> Self {
        let liveness = CancellationToken::new();
        let slot = ResolutionSlot::new(liveness.clone(), Arc::clone(pipeline.metrics()));
        let (tx, rx) = mpsc::unbounded_channel();

        Self {
            request,
            pipeline,
            sheet,
            pan: PanTracker::new(),
            renderer: MapOverlayRenderer::with_style(surfaces.map, style),
            summary: RouteSummaryPresenter::new(surfaces.card),
            alerts: surfaces.alerts,
            host: surfaces.host,
            liveness,
            slot,
            tx,
            rx,
            phase: ScreenPhase::Created,
            close_pending: false,
            route: None,
            dismissed: None,
        }
    }

    /// Sender for external input (gestures, alert acknowledgement, close).
    pub fn ui_handle(&self) -> UiHandle {
        UiHandle::new(self.tx.clone())
    }

    /// Token cancelled on teardown; cancelling it tears the screen down.
    pub fn liveness(&self) -> CancellationToken {
        self.liveness.clone()
    }

    pub fn request(&self) -> &RouteRequest {
        &self.request
    }

    pub fn phase(&self) -> ScreenPhase {
        self.phase
    }

    pub fn sheet(&self) -> &SheetController {
        &self.sheet
    }

    /// The route currently drawn, if resolution succeeded.
    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    pub fn dismissed(&self) -> Option<DismissReason> {
        self.dismissed
    }

    /// Whether a resolution is outstanding.
    pub fn is_resolving(&self) -> bool {
        self.slot.is_in_flight()
    }

    /// Animate the sheet open and start resolving the destination.
    ///
    /// Must be called from within a tokio runtime. Does nothing unless the
    /// screen was just created.
    pub fn open(&mut self) {
        if self.phase != ScreenPhase::Created || self.is_torn_down() {
            return;
        }
        self.phase = ScreenPhase::Open;
        self.sheet.request_open();
        info!(
            source = %self.request.source(),
            destination = self.request.destination_address(),
            "Route screen opened"
        );
        self.start_resolution();
    }

    /// Process one event. No-op once the screen is dismissed or torn down.
    pub fn handle(&mut self, event: ScreenEvent) {
        if self.is_torn_down() {
            trace!(?event, "Event after teardown ignored");
            return;
        }

        match event {
            ScreenEvent::Pan(pan) => {
                if self.phase == ScreenPhase::Open {
                    self.pan.feed(pan, &mut self.sheet);
                }
            }
            ScreenEvent::Tick(dt) => {
                if self.sheet.advance(dt) == Some(SheetEvent::Closed) {
                    self.dismiss(DismissReason::SheetClosed);
                    return;
                }
            }
            ScreenEvent::Resolved { generation, result } => {
                if !self.slot.complete(generation) {
                    return;
                }
                match result {
                    Ok(route) => self.show_route(route),
                    Err(error) => {
                        self.alerts.present(Alert::for_error(&error, &self.request));
                        self.phase = ScreenPhase::AwaitingAlertAck;
                    }
                }
            }
            ScreenEvent::AlertAcknowledged => {
                if self.phase == ScreenPhase::AwaitingAlertAck {
                    self.dismiss(DismissReason::ResolutionFailed);
                    return;
                }
            }
            ScreenEvent::CloseRequested => {
                self.close_pending = true;
            }
            ScreenEvent::Retry => {
                if self.phase == ScreenPhase::Open {
                    self.start_resolution();
                }
            }
        }

        self.settle_pending_close();
    }

    /// Handle every event already queued, without waiting.
    ///
    /// Returns how many events were drained.
    pub fn process_pending(&mut self) -> usize {
        let mut drained = 0;
        while let Ok(event) = self.rx.try_recv() {
            drained += 1;
            self.handle(event);
        }
        drained
    }

    /// Wait for the next queued event and handle it.
    ///
    /// Returns `false` if the screen was torn down while waiting.
    pub async fn process_next(&mut self) -> bool {
        tokio::select! {
            biased;

            _ = self.liveness.cancelled() => false,

            event = self.rx.recv() => match event {
                Some(event) => {
                    self.handle(event);
                    true
                }
                None => false,
            },
        }
    }

    /// Open the screen (if needed) and run its UI loop until it is dismissed
    /// or torn down.
    ///
    /// Returns the dismiss reason, or `None` on teardown.
    pub async fn run(&mut self) -> Option<DismissReason> {
        self.open();

        let mut frames = tokio::time::interval(FRAME_INTERVAL);
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut last_frame = Instant::now();

        while self.dismissed.is_none() {
            tokio::select! {
                biased;

                _ = self.liveness.cancelled() => break,

                event = self.rx.recv() => {
                    let Some(event) = event else { break };
                    self.handle(event);
                }

                now = frames.tick() => {
                    let dt = now.duration_since(last_frame);
                    last_frame = now;
                    self.handle(ScreenEvent::Tick(dt));
                }
            }
        }

        if self.dismissed.is_none() {
            self.teardown();
        }
        self.dismissed
    }

    /// Tear the screen down without notifying the host.
    ///
    /// Cancels the resolution in flight; its result, if any, is dropped.
    pub fn teardown(&mut self) {
        if self.phase != ScreenPhase::Dismissed {
            debug!("Route screen torn down");
        }
        self.phase = ScreenPhase::Dismissed;
        self.slot.cancel();
        self.liveness.cancel();
    }

    fn is_torn_down(&self) -> bool {
        self.phase == ScreenPhase::Dismissed || self.liveness.is_cancelled()
    }

    fn start_resolution(&mut self) {
        let weak_tx = self.tx.downgrade();
        let generation = self.slot.start(
            Arc::clone(&self.pipeline),
            self.request.clone(),
            move |generation, result| {
                if let Some(tx) = weak_tx.upgrade() {
                    let _ = tx.send(ScreenEvent::Resolved { generation, result });
                }
            },
        );
        debug!(generation, "Resolution started");
    }

    fn show_route(&mut self, route: Route) {
        self.renderer
            .render(&route, self.request.destination_address());
        self.summary.present(&route);
        self.route = Some(route);
    }

    /// Close once the sheet rests. Closing an already collapsed sheet
    /// dismisses immediately.
    fn settle_pending_close(&mut self) {
        if !self.close_pending || !matches!(self.sheet.state(), SheetState::Idle(_)) {
            return;
        }
        self.close_pending = false;
        if !self.sheet.request_close() {
            self.dismiss(DismissReason::SheetClosed);
        }
    }

    fn dismiss(&mut self, reason: DismissReason) {
        if self.dismissed.is_some() {
            warn!(?reason, "Screen already dismissed");
            return;
        }
        self.dismissed = Some(reason);
        self.teardown();
        self.summary.dismiss();
        self.renderer.clear();
        self.host.dismiss(reason);
        info!(?reason, "Route screen dismissed");
    }
}

impl<G: Geocoder, D: DirectionsProvider> Drop for RouteScreen<G, D> {
    fn drop(&mut self) {
        self.liveness.cancel();
    }
}
