//! Route screen composition.
//!
//! [`RouteScreen`] ties the sheet controller, the resolution pipeline, the map
//! renderer, the summary presenter and the alert channel together on a
//! single UI loop:
//!
//! ```text
//! UiHandle ──┐
//!            ├──► mpsc ──► RouteScreen::handle ──► sheet / map / card / alert
//! worker ────┘  (weak)                       └──► HostScreen::dismiss (once)
//! ```
//!
//! External input (gestures, alert acknowledgement, close) enters through a
//! [`UiHandle`]. Resolution results come back from their worker task through
//! a weak sender and are dropped once the screen is torn down.

mod events;
mod route_screen;

pub use events::{DismissReason, HostScreen, RecordingHost, ScreenEvent, UiHandle};
pub use route_screen::{RouteScreen, ScreenPhase, ScreenSurfaces, FRAME_INTERVAL};
