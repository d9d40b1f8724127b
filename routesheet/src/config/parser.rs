//! INI parsing: `Ini` → [`ConfigFile`].
//!
//! Starts from defaults and overlays every key present. This is the single
//! place where INI key names map to struct fields.

use std::str::FromStr;
use std::time::Duration;

use ini::{Ini, Properties};

use super::file::ConfigFileError;
use super::settings::ConfigFile;
use crate::map::Rgba;
use crate::sheet::SheetExtent;

pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [sheet]
    if let Some(section) = ini.section(Some("sheet")) {
        let collapsed = parse_number(section, "sheet", "collapsed")?
            .unwrap_or(config.sheet.extent.collapsed());
        let expanded = parse_number(section, "sheet", "expanded")?
            .unwrap_or(config.sheet.extent.expanded());
        config.sheet.extent = SheetExtent::new(collapsed, expanded).map_err(|e| {
            invalid(
                "sheet",
                "expanded",
                &expanded.to_string(),
                &e.to_string(),
            )
        })?;
        if let Some(ms) = parse_number::<u64>(section, "sheet", "animation_ms")? {
            config.sheet.animation_duration = Duration::from_millis(ms);
        }
    }

    // [geocoder]
    if let Some(section) = ini.section(Some("geocoder")) {
        if let Some(url) = parse_url(section, "geocoder")? {
            config.geocoder.url = url;
        }
    }

    // [directions]
    if let Some(section) = ini.section(Some("directions")) {
        if let Some(url) = parse_url(section, "directions")? {
            config.directions.url = url;
        }
    }

    // [network]
    if let Some(section) = ini.section(Some("network")) {
        if let Some(timeout) = parse_number::<u64>(section, "network", "timeout")? {
            if timeout == 0 {
                return Err(invalid(
                    "network",
                    "timeout",
                    "0",
                    "must be at least 1 second",
                ));
            }
            config.network.timeout_secs = timeout;
        }
        if let Some(v) = section.get("user_agent") {
            let v = v.trim();
            if !v.is_empty() {
                config.network.user_agent = v.to_string();
            }
        }
    }

    // [map]
    if let Some(section) = ini.section(Some("map")) {
        if let Some(v) = section.get("route_color") {
            config.map.route_style.stroke_color = Rgba::from_hex(v).ok_or_else(|| {
                invalid("map", "route_color", v, "expected a hex color like 007AFF")
            })?;
        }
        if let Some(width) = parse_number::<f64>(section, "map", "route_width")? {
            if !(width.is_finite() && width > 0.0) {
                return Err(invalid(
                    "map",
                    "route_width",
                    &width.to_string(),
                    "must be a positive number",
                ));
            }
            config.map.route_style.line_width = width;
        }
    }

    // [cache]
    if let Some(section) = ini.section(Some("cache")) {
        if let Some(capacity) = parse_number::<u64>(section, "cache", "geocode_capacity")? {
            config.cache.geocode_capacity = capacity;
        }
    }

    Ok(config)
}

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Parse an optional numeric key. Empty values count as absent.
fn parse_number<T: FromStr>(
    section: &Properties,
    section_name: &str,
    key: &str,
) -> Result<Option<T>, ConfigFileError> {
    match section.get(key).map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => v
            .parse()
            .map(Some)
            .map_err(|_| invalid(section_name, key, v, "expected a number")),
    }
}

fn parse_url(section: &Properties, section_name: &str) -> Result<Option<String>, ConfigFileError> {
    match section.get("url").map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) if v.starts_with("http://") || v.starts_with("https://") => {
            Ok(Some(v.trim_end_matches('/').to_string()))
        }
        Some(v) => Err(invalid(
            section_name,
            "url",
            v,
            "must start with http:// or https://",
        )),
    }
}
