//! Events and outward signals of the route screen.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::mpsc;

use crate::pipeline::{Generation, ResolutionError, Route};
use crate::sheet::PanEvent;

/// Input processed by the screen's UI loop, in arrival order.
#[derive(Debug, Clone)]
pub enum ScreenEvent {
    /// Pan gesture on the sheet.
    Pan(PanEvent),
    /// Animation clock advanced by the given amount.
    Tick(Duration),
    /// A resolution finished; redispatched from the worker task.
    Resolved {
        generation: Generation,
        result: Result<Route, ResolutionError>,
    },
    /// The user acknowledged the error alert.
    AlertAcknowledged,
    /// Close the sheet as if the user had flicked it down.
    CloseRequested,
    /// Resolve again, superseding any attempt in flight.
    Retry,
}

/// Why the screen dismissed its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// The sheet snapped closed.
    SheetClosed,
    /// The user acknowledged a resolution error.
    ResolutionFailed,
}

/// The container presenting the screen; told once when the screen is done.
pub trait HostScreen {
    fn dismiss(&mut self, reason: DismissReason);
}

impl<H: HostScreen + ?Sized> HostScreen for Box<H> {
    fn dismiss(&mut self, reason: DismissReason) {
        (**self).dismiss(reason)
    }
}

/// Host that records dismissals. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    dismissals: Arc<Mutex<Vec<DismissReason>>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dismissals(&self) -> Vec<DismissReason> {
        self.dismissals.lock().clone()
    }
}

impl HostScreen for RecordingHost {
    fn dismiss(&mut self, reason: DismissReason) {
        self.dismissals.lock().push(reason);
    }
}

/// Cloneable sender into a screen's UI loop.
///
/// Every method returns `false` once the screen is gone.
#[derive(Debug, Clone)]
pub struct UiHandle {
    tx: mpsc::UnboundedSender<ScreenEvent>,
}

impl UiHandle {
    pub(crate) fn new(tx: mpsc::UnboundedSender<ScreenEvent>) -> Self {
        Self { tx }
    }

    pub fn send(&self, event: ScreenEvent) -> bool {
        self.tx.send(event).is_ok()
    }

    pub fn pan(&self, event: PanEvent) -> bool {
        self.send(ScreenEvent::Pan(event))
    }

    pub fn acknowledge_alert(&self) -> bool {
        self.send(ScreenEvent::AlertAcknowledged)
    }

    pub fn request_close(&self) -> bool {
        self.send(ScreenEvent::CloseRequested)
    }

    pub fn retry(&self) -> bool {
        self.send(ScreenEvent::Retry)
    }
}
