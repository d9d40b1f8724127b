//! Pan gesture adapter.
//!
//! The map surface reports pan gestures in screen coordinates: translation is
//! cumulative since the gesture began and positive y points down. The sheet
//! controller wants per-event deltas in offset units, where positive points
//! toward expanded.

use super::controller::SheetController;

/// Phase of a pan gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanPhase {
    Changed,
    Ended,
}

/// A pan gesture event from the map surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanEvent {
    pub phase: PanPhase,
    /// Cumulative vertical translation since the gesture began (screen points, down positive).
    pub translation_y: f64,
    /// Vertical velocity (screen points per second, down positive).
    pub velocity_y: f64,
}

impl PanEvent {
    pub fn changed(translation_y: f64, velocity_y: f64) -> Self {
        Self {
            phase: PanPhase::Changed,
            translation_y,
            velocity_y,
        }
    }

    pub fn ended(translation_y: f64, velocity_y: f64) -> Self {
        Self {
            phase: PanPhase::Ended,
            translation_y,
            velocity_y,
        }
    }
}

/// Converts cumulative pan translation into controller calls.
#[derive(Debug, Default, Clone)]
pub struct PanTracker {
    last_translation_y: f64,
}

impl PanTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one pan event into the controller.
    ///
    /// Returns whether the controller accepted it. Translation is consumed
    /// even when the controller drops the event, so a drag that outlives an
    /// animation resumes from the finger's current position.
    pub fn feed(&mut self, event: PanEvent, sheet: &mut SheetController) -> bool {
        match event.phase {
            PanPhase::Changed => {
                let screen_delta = event.translation_y - self.last_translation_y;
                self.last_translation_y = event.translation_y;
                sheet.on_drag_changed(-screen_delta, event.velocity_y)
            }
            PanPhase::Ended => {
                self.last_translation_y = 0.0;
                sheet.on_drag_ended(event.velocity_y)
            }
        }
    }
}
