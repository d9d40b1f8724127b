//! Sheet state machine.
//!
//! # State Machine
//!
//! ```text
//! Idle(collapsed) --Open--> Animating(collapsed, expanded)
//! Idle(o > collapsed) --Close--> Animating(o, collapsed)
//! Idle(o) | Dragging(o, s) --DragChanged(d)--> Dragging(clamp(o + d), s)
//! Idle(o) | Dragging(o, _) --DragEnded(v > 0)--> Animating(o, collapsed)
//! Idle(o) | Dragging(o, _) --DragEnded(v <= 0)--> Animating(o, expanded)
//! Animating(_, to) --Tick (duration elapsed)--> Idle(to)  [+ Closed if to == collapsed]
//! Animating --any other input--> Animating (ignored)
//! ```
//!
//! [`transition`] is a pure function; [`SheetController`](super::SheetController)
//! is the stateful wrapper used by the screen.

use std::time::Duration;

use super::extent::{SheetConfig, SheetExtent};

/// Current state of the sheet. Exactly one variant is active at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SheetState {
    /// Resting at an offset.
    Idle(f64),

    /// Following a drag gesture.
    Dragging {
        /// Current clamped offset.
        offset: f64,
        /// Offset at which the drag began.
        start_offset: f64,
    },

    /// Running a fixed-duration ease animation between two offsets.
    Animating {
        from: f64,
        to: f64,
        /// Time elapsed since the animation started.
        elapsed: Duration,
    },
}

impl SheetState {
    /// Start an animation between two offsets.
    pub fn animating(from: f64, to: f64) -> Self {
        SheetState::Animating {
            from,
            to,
            elapsed: Duration::ZERO,
        }
    }

    /// Whether an animation is in progress.
    pub fn is_animating(&self) -> bool {
        matches!(self, SheetState::Animating { .. })
    }

    /// Offset of the sheet in this state.
    ///
    /// While animating this is the eased interpolation between `from` and `to`.
    pub fn offset(&self, config: &SheetConfig) -> f64 {
        match *self {
            SheetState::Idle(offset) => offset,
            SheetState::Dragging { offset, .. } => offset,
            SheetState::Animating { from, to, elapsed } => {
                let progress = animation_progress(elapsed, config.animation_duration);
                from + (to - from) * ease_in_out(progress)
            }
        }
    }
}

/// Input accepted by the sheet state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SheetInput {
    /// Animate from collapsed to expanded.
    Open,
    /// Animate from the current resting offset to collapsed.
    Close,
    /// Drag moved by `delta_y` offset units.
    DragChanged { delta_y: f64, velocity_y: f64 },
    /// Drag released with `velocity_y` (positive = downward, toward collapsed).
    DragEnded { velocity_y: f64 },
    /// Animation clock advanced.
    Tick(Duration),
}

/// Events emitted when an animation settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetEvent {
    /// The sheet came to rest fully expanded.
    Expanded,
    /// The sheet came to rest collapsed; the owning screen should tear down.
    Closed,
}

/// Pure transition function of the sheet state machine.
///
/// Returns the next state and, when an animation completes, the event it
/// produced. Input that is not valid in the current state leaves the state
/// unchanged.
pub fn transition(
    state: SheetState,
    input: SheetInput,
    extent: &SheetExtent,
    config: &SheetConfig,
) -> (SheetState, Option<SheetEvent>) {
    match (state, input) {
        (SheetState::Idle(offset), SheetInput::Open) if offset == extent.collapsed() => {
            (SheetState::animating(offset, extent.expanded()), None)
        }

        (SheetState::Idle(offset), SheetInput::Close) if offset > extent.collapsed() => {
            (SheetState::animating(offset, extent.collapsed()), None)
        }

        (SheetState::Idle(offset), SheetInput::DragChanged { delta_y, .. })
            if delta_y.is_finite() =>
        {
            let next = SheetState::Dragging {
                offset: extent.clamp(offset + delta_y),
                start_offset: offset,
            };
            (next, None)
        }

        (
            SheetState::Dragging {
                offset,
                start_offset,
            },
            SheetInput::DragChanged { delta_y, .. },
        ) if delta_y.is_finite() => {
            let next = SheetState::Dragging {
                offset: extent.clamp(offset + delta_y),
                start_offset,
            };
            (next, None)
        }

        (SheetState::Idle(offset), SheetInput::DragEnded { velocity_y })
        | (SheetState::Dragging { offset, .. }, SheetInput::DragEnded { velocity_y }) => {
            (SheetState::animating(offset, snap_target(velocity_y, extent)), None)
        }

        (SheetState::Animating { from, to, elapsed }, SheetInput::Tick(dt)) => {
            let elapsed = elapsed.saturating_add(dt);
            if elapsed >= config.animation_duration {
                let event = if to == extent.collapsed() {
                    SheetEvent::Closed
                } else {
                    SheetEvent::Expanded
                };
                (SheetState::Idle(to), Some(event))
            } else {
                (SheetState::Animating { from, to, elapsed }, None)
            }
        }

        (state, _) => (state, None),
    }
}

/// Release decision: any downward velocity collapses, anything else expands.
///
/// This is a velocity-sign rule, not a nearest-resting-offset rule.
pub fn snap_target(velocity_y: f64, extent: &SheetExtent) -> f64 {
    if velocity_y > 0.0 {
        extent.collapsed()
    } else {
        extent.expanded()
    }
}

fn animation_progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

/// Smoothstep easing on `[0, 1]`.
fn ease_in_out(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}
