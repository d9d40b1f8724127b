//! Single-flight resolution with supersede semantics.
//!
//! A screen owns one [`ResolutionSlot`]. Starting a resolution while another
//! is in flight cancels the older one; its result, if it still arrives, is
//! discarded by generation. Every resolution runs under a child of the
//! screen's liveness token, so tearing the screen down cancels them all.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::error::ResolutionError;
use super::resolver::RoutePipeline;
use super::types::{Route, RouteRequest};
use crate::provider::{DirectionsProvider, Geocoder};
use crate::telemetry::ResolutionMetrics;

/// Monotonic id of a resolution attempt within one slot.
pub type Generation = u64;

/// Tracks the single outstanding resolution of a screen.
#[derive(Debug)]
pub struct ResolutionSlot {
    liveness: CancellationToken,
    generation: Generation,
    in_flight: Option<CancellationToken>,
    metrics: Arc<ResolutionMetrics>,
}

impl ResolutionSlot {
    /// Create a slot whose resolutions are cancelled along with `liveness`.
    pub fn new(liveness: CancellationToken, metrics: Arc<ResolutionMetrics>) -> Self {
        Self {
            liveness,
            generation: 0,
            in_flight: None,
            metrics,
        }
    }

    /// Generation of the most recently started resolution (0 if none).
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Whether a resolution is outstanding.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start resolving `request` on the tokio runtime, superseding any
    /// in-flight resolution.
    ///
    /// `on_complete` runs on the worker task exactly when the resolution
    /// finishes and neither it nor the screen has been cancelled. It must
    /// only hand the result off (typically by sending it to the UI loop).
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<G, D, F>(
        &mut self,
        pipeline: Arc<RoutePipeline<G, D>>,
        request: RouteRequest,
        on_complete: F,
    ) -> Generation
    where
        G: Geocoder + 'static,
        D: DirectionsProvider + 'static,
        F: FnOnce(Generation, Result<Route, ResolutionError>) + Send + 'static,
    {
        if let Some(previous) = self.in_flight.take() {
            previous.cancel();
            self.metrics.resolution_superseded();
            debug!(generation = self.generation, "Superseding in-flight resolution");
        }

        self.generation += 1;
        let generation = self.generation;
        let token = self.liveness.child_token();
        self.in_flight = Some(token.clone());
        let metrics = Arc::clone(&self.metrics);

        tokio::spawn(async move {
            let outcome = tokio::select! {
                _ = token.cancelled() => None,
                result = pipeline.resolve(&request) => Some(result),
            };

            match outcome {
                Some(result) if !token.is_cancelled() => on_complete(generation, result),
                _ => {
                    metrics.result_dropped();
                    debug!(generation, "Resolution cancelled before delivery");
                }
            }
        });

        generation
    }

    /// Accept a delivered result.
    ///
    /// Returns `true` if `generation` is the current one; the slot is then
    /// no longer in flight. Stale generations return `false`.
    pub fn complete(&mut self, generation: Generation) -> bool {
        if generation != self.generation || self.in_flight.is_none() {
            self.metrics.result_dropped();
            debug!(
                generation,
                current = self.generation,
                "Discarding stale resolution result"
            );
            return false;
        }
        self.in_flight = None;
        true
    }

    /// Cancel the in-flight resolution, if any.
    pub fn cancel(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
    }
}
