//! User-facing error alerts.
//!
//! Every [`ResolutionError`] is surfaced exactly once as an [`Alert`]. The
//! channel reports acknowledgement back to the screen as
//! [`ScreenEvent::AlertAcknowledged`](crate::screen::ScreenEvent), which
//! dismisses it.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::pipeline::{ResolutionError, RouteRequest};

/// Title and message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Human-readable alert for a failed resolution of `request`.
    pub fn for_error(error: &ResolutionError, request: &RouteRequest) -> Self {
        match error {
            ResolutionError::AddressNotFound => Self::new(
                "Address Not Found",
                format!(
                    "We couldn't find a location matching \"{}\".",
                    request.destination_address().trim()
                ),
            ),
            ResolutionError::GeocodingFailed(reason) => Self::new(
                "Location Lookup Failed",
                format!("Could not look up the destination address: {}", reason),
            ),
            ResolutionError::DirectionsFailed(reason) => Self::new(
                "Directions Unavailable",
                format!("Could not calculate directions: {}", reason),
            ),
            ResolutionError::NoRouteFound => Self::new(
                "No Route Found",
                "There is no driving route to this destination.",
            ),
        }
    }
}

/// Presents alerts to the user.
pub trait AlertChannel {
    fn present(&mut self, alert: Alert);
}

impl<A: AlertChannel + ?Sized> AlertChannel for Box<A> {
    fn present(&mut self, alert: Alert) {
        (**self).present(alert)
    }
}

/// Alert channel that records every alert. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct RecordingAlertChannel {
    alerts: Arc<Mutex<Vec<Alert>>>,
}

impl RecordingAlertChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.lock().clone()
    }
}

impl AlertChannel for RecordingAlertChannel {
    fn present(&mut self, alert: Alert) {
        self.alerts.lock().push(alert);
    }
}
