//! Geocode cache capability.
//!
//! The pipeline depends on this trait rather than a concrete store so the
//! host can inject whatever cache it already owns (or none at all).
//!
//! # Dyn Compatibility
//!
//! Uses `Pin<Box<dyn Future>>` for async methods so the pipeline can hold an
//! `Arc<dyn GeocodeCache>`.

use std::future::Future;
use std::pin::Pin;

use crate::coord::Coordinate;

/// Boxed future type for dyn-compatible async methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Key-value cache from addresses to geocoded coordinates.
///
/// Implementations are expected to normalize keys with
/// [`normalize_address`] so trivially different spellings share an entry.
pub trait GeocodeCache: Send + Sync {
    /// Look up a previously geocoded address.
    fn get(&self, address: &str) -> BoxFuture<'_, Option<Coordinate>>;

    /// Store the coordinate for an address.
    fn set(&self, address: &str, coordinate: Coordinate) -> BoxFuture<'_, ()>;
}

/// Normalize an address into a cache key.
///
/// Trims, lowercases and collapses internal whitespace runs.
pub fn normalize_address(address: &str) -> String {
    address
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
