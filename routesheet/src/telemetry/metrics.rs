//! Lock-free atomic metrics collection.
//!
//! All operations use `Relaxed` ordering: the counters are independent
//! measurements and nothing synchronizes on them.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use super::ResolutionSnapshot;
use crate::pipeline::ResolutionError;

/// Counters for route resolutions.
#[derive(Debug, Default)]
pub struct ResolutionMetrics {
    started: AtomicU64,
    succeeded: AtomicU64,
    address_not_found: AtomicU64,
    geocoding_failed: AtomicU64,
    directions_failed: AtomicU64,
    no_route_found: AtomicU64,
    geocode_cache_hits: AtomicU64,
    superseded: AtomicU64,
    dropped_after_cancel: AtomicU64,
    /// Total time of successful resolutions, in microseconds
    success_time_us: AtomicU64,
}

impl ResolutionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a resolution starting.
    pub fn resolution_started(&self) {
        self.started.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a successful resolution and how long it took.
    pub fn resolution_succeeded(&self, elapsed: Duration) {
        self.succeeded.fetch_add(1, Ordering::Relaxed);
        self.success_time_us
            .fetch_add(elapsed.as_micros() as u64, Ordering::Relaxed);
    }

    /// Record a failed resolution by error kind.
    pub fn resolution_failed(&self, error: &ResolutionError) {
        let counter = match error {
            ResolutionError::AddressNotFound => &self.address_not_found,
            ResolutionError::GeocodingFailed(_) => &self.geocoding_failed,
            ResolutionError::DirectionsFailed(_) => &self.directions_failed,
            ResolutionError::NoRouteFound => &self.no_route_found,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a geocode served from cache.
    pub fn geocode_cache_hit(&self) {
        self.geocode_cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an in-flight resolution replaced by a newer one.
    pub fn resolution_superseded(&self) {
        self.superseded.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a result discarded because its screen or generation was gone.
    pub fn result_dropped(&self) {
        self.dropped_after_cancel.fetch_add(1, Ordering::Relaxed);
    }

    /// Take a point-in-time copy of all counters.
    pub fn snapshot(&self) -> ResolutionSnapshot {
        let succeeded = self.succeeded.load(Ordering::Relaxed);
        let success_time_us = self.success_time_us.load(Ordering::Relaxed);
        ResolutionSnapshot {
            started: self.started.load(Ordering::Relaxed),
            succeeded,
            address_not_found: self.address_not_found.load(Ordering::Relaxed),
            geocoding_failed: self.geocoding_failed.load(Ordering::Relaxed),
            directions_failed: self.directions_failed.load(Ordering::Relaxed),
            no_route_found: self.no_route_found.load(Ordering::Relaxed),
            geocode_cache_hits: self.geocode_cache_hits.load(Ordering::Relaxed),
            superseded: self.superseded.load(Ordering::Relaxed),
            dropped: self.dropped_after_cancel.load(Ordering::Relaxed),
            avg_success_ms: if succeeded > 0 {
                success_time_us as f64 / succeeded as f64 / 1000.0
            } else {
                0.0
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failures_are_counted_by_kind() {
        let metrics = ResolutionMetrics::new();
        metrics.resolution_failed(&ResolutionError::AddressNotFound);
        metrics.resolution_failed(&ResolutionError::NoRouteFound);
        metrics.resolution_failed(&ResolutionError::NoRouteFound);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.address_not_found, 1);
        assert_eq!(snapshot.no_route_found, 2);
        assert_eq!(snapshot.failed(), 3);
    }

    #[test]
    fn test_average_success_time() {
        let metrics = ResolutionMetrics::new();
        metrics.resolution_succeeded(Duration::from_millis(100));
        metrics.resolution_succeeded(Duration::from_millis(300));

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.succeeded, 2);
        assert!((snapshot.avg_success_ms - 200.0).abs() < 0.001);
    }
}
