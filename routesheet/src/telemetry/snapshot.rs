//! Point-in-time copy of resolution metrics.

use std::fmt;

/// Snapshot of [`ResolutionMetrics`](super::ResolutionMetrics).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolutionSnapshot {
    pub started: u64,
    pub succeeded: u64,
    pub address_not_found: u64,
    pub geocoding_failed: u64,
    pub directions_failed: u64,
    pub no_route_found: u64,
    pub geocode_cache_hits: u64,
    pub superseded: u64,
    pub dropped: u64,
    /// Mean duration of successful resolutions in milliseconds
    pub avg_success_ms: f64,
}

impl ResolutionSnapshot {
    /// Total failed resolutions across all kinds.
    pub fn failed(&self) -> u64 {
        self.address_not_found + self.geocoding_failed + self.directions_failed + self.no_route_found
    }
}

impl fmt::Display for ResolutionSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "resolutions: {} started, {} ok, {} failed, {} superseded, {} dropped (avg {:.0}ms)",
            self.started,
            self.succeeded,
            self.failed(),
            self.superseded,
            self.dropped,
            self.avg_success_ms
        )
    }
}
