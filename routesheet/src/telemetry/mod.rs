//! Resolution telemetry.
//!
//! Lock-free counters updated by the pipeline and the resolution slot, with
//! a point-in-time snapshot for display.
//!
//! ```text
//! RoutePipeline / ResolutionSlot ─────► ResolutionMetrics ─────► ResolutionSnapshot
//!                                       (atomic counters)       (point-in-time copy)
//! ```

mod metrics;
mod snapshot;

pub use metrics::ResolutionMetrics;
pub use snapshot::ResolutionSnapshot;
