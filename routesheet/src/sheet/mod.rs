//! Draggable sheet positioning.
//!
//! The sheet travels between a collapsed and an expanded offset. Drags move
//! it within those bounds (no rubber-banding); releasing it snaps open or
//! closed by the sign of the release velocity. Snapping closed emits
//! [`SheetEvent::Closed`], which the owning screen treats as a dismiss.
//!
//! The module is free of any rendering or animation API: the animation clock
//! is advanced explicitly through [`SheetController::advance`].

mod controller;
mod extent;
mod gesture;
mod state;

pub use controller::SheetController;
pub use extent::{
    SheetConfig, SheetError, SheetExtent, DEFAULT_ANIMATION_DURATION, DEFAULT_COLLAPSED_OFFSET,
    DEFAULT_EXPANDED_OFFSET,
};
pub use gesture::{PanEvent, PanPhase, PanTracker};
pub use state::{snap_target, transition, SheetEvent, SheetInput, SheetState};
