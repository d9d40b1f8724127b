//! Typed configuration sections.

use std::time::Duration;

use crate::cache::DEFAULT_GEOCODE_CAPACITY;
use crate::map::PolylineStyle;
use crate::provider::{DEFAULT_NOMINATIM_URL, DEFAULT_OSRM_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::sheet::{SheetConfig, SheetExtent, DEFAULT_ANIMATION_DURATION};

/// Complete user configuration, one field per INI section.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigFile {
    pub sheet: SheetSettings,
    pub geocoder: GeocoderSettings,
    pub directions: DirectionsSettings,
    pub network: NetworkSettings,
    pub map: MapSettings,
    pub cache: CacheSettings,
}

/// `[sheet]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetSettings {
    pub extent: SheetExtent,
    pub animation_duration: Duration,
}

impl SheetSettings {
    pub fn sheet_config(&self) -> SheetConfig {
        SheetConfig::new(self.animation_duration)
    }
}

impl Default for SheetSettings {
    fn default() -> Self {
        Self {
            extent: SheetExtent::default(),
            animation_duration: DEFAULT_ANIMATION_DURATION,
        }
    }
}

/// `[geocoder]`
#[derive(Debug, Clone, PartialEq)]
pub struct GeocoderSettings {
    /// Base URL of a Nominatim-compatible service.
    pub url: String,
}

impl Default for GeocoderSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_NOMINATIM_URL.to_string(),
        }
    }
}

/// `[directions]`
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionsSettings {
    /// Base URL of an OSRM-compatible service.
    pub url: String,
}

impl Default for DirectionsSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_OSRM_URL.to_string(),
        }
    }
}

/// `[network]`
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkSettings {
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// `[map]`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MapSettings {
    pub route_style: PolylineStyle,
}

/// `[cache]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CacheSettings {
    /// Maximum cached addresses; 0 disables the geocode cache.
    pub geocode_capacity: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            geocode_capacity: DEFAULT_GEOCODE_CAPACITY,
        }
    }
}
