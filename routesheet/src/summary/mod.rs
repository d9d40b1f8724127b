//! Route summary card.
//!
//! Formats a route's distance and duration as `"12.34 km • 1h 30m"` and shows
//! it in a single card anchored to the top of the map.

mod format;
mod presenter;

pub use format::{format_distance, format_duration, format_summary};
pub use presenter::{
    CardAnchor, CardIcon, CardSurface, RecordingCardSurface, RouteSummaryPresenter, SummaryCard,
};
