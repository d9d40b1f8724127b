//! Stateful sheet position controller.

use std::time::Duration;

use super::extent::{SheetConfig, SheetExtent};
use super::state::{transition, SheetEvent, SheetInput, SheetState};

/// Owns the sheet offset and turns drag input into position updates and a
/// terminal open/close decision.
///
/// Gestures delivered while an animation runs are dropped, not queued: the
/// offset stays on the animation curve until it settles.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use routesheet::sheet::{SheetConfig, SheetController, SheetEvent, SheetExtent};
///
/// let mut sheet = SheetController::new(SheetExtent::default(), SheetConfig::default());
/// sheet.request_open();
/// assert_eq!(sheet.advance(Duration::from_secs(1)), Some(SheetEvent::Expanded));
///
/// sheet.on_drag_changed(-80.0, 120.0);
/// sheet.on_drag_ended(40.0);
/// assert_eq!(sheet.advance(Duration::from_secs(1)), Some(SheetEvent::Closed));
/// ```
#[derive(Debug, Clone)]
pub struct SheetController {
    extent: SheetExtent,
    config: SheetConfig,
    state: SheetState,
}

impl SheetController {
    /// Create a controller resting at the collapsed offset.
    pub fn new(extent: SheetExtent, config: SheetConfig) -> Self {
        Self {
            state: SheetState::Idle(extent.collapsed()),
            extent,
            config,
        }
    }

    /// Current state.
    pub fn state(&self) -> SheetState {
        self.state
    }

    /// Current offset, interpolated while animating.
    pub fn offset(&self) -> f64 {
        self.state.offset(&self.config)
    }

    /// Extent the sheet travels within.
    pub fn extent(&self) -> &SheetExtent {
        &self.extent
    }

    /// Whether an animation is in progress.
    pub fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    /// Animate from collapsed to expanded.
    ///
    /// Like every input method, returns `false` when the input was ignored or
    /// left the state unchanged.
    pub fn request_open(&mut self) -> bool {
        self.apply(SheetInput::Open).0
    }

    /// Animate from the current resting offset to collapsed.
    pub fn request_close(&mut self) -> bool {
        self.apply(SheetInput::Close).0
    }

    /// Apply a drag movement of `delta_y` offset units (positive = toward
    /// expanded). Ignored while an animation is running.
    pub fn on_drag_changed(&mut self, delta_y: f64, velocity_y: f64) -> bool {
        self.apply(SheetInput::DragChanged {
            delta_y,
            velocity_y,
        })
        .0
    }

    /// Release the drag and snap by velocity sign (positive = downward).
    pub fn on_drag_ended(&mut self, velocity_y: f64) -> bool {
        let accepted = self.apply(SheetInput::DragEnded { velocity_y }).0;
        if accepted {
            tracing::debug!(velocity_y, state = ?self.state, "Sheet released");
        }
        accepted
    }

    /// Advance the animation clock, returning the event produced when an
    /// animation settles.
    pub fn advance(&mut self, dt: Duration) -> Option<SheetEvent> {
        let (_, event) = self.apply(SheetInput::Tick(dt));
        if let Some(event) = event {
            tracing::debug!(?event, offset = self.offset(), "Sheet animation settled");
        }
        event
    }

    fn apply(&mut self, input: SheetInput) -> (bool, Option<SheetEvent>) {
        let (next, event) = transition(self.state, input, &self.extent, &self.config);
        let changed = next != self.state;
        if !changed && !matches!(input, SheetInput::Tick(_)) {
            tracing::trace!(?input, state = ?self.state, "Sheet input ignored");
        }
        self.state = next;
        (changed, event)
    }
}
