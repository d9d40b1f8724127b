//! User configuration.
//!
//! Settings are read from `~/.routesheet/config.ini`:
//!
//! ```ini
//! [sheet]
//! collapsed = 0
//! expanded = 560
//! animation_ms = 300
//!
//! [network]
//! timeout = 15
//! ```
//!
//! Every key is optional; missing keys keep their defaults.

mod file;
mod parser;
mod settings;
mod writer;

pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{
    CacheSettings, ConfigFile, DirectionsSettings, GeocoderSettings, MapSettings, NetworkSettings,
    SheetSettings,
};
