//! INI serialization: [`ConfigFile`] → commented `config.ini` text.

use super::settings::ConfigFile;

pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let color = config.map.route_style.stroke_color.to_string();

    format!(
        r#"[sheet]
; Resting offsets of the sheet in points. collapsed must be below expanded.
collapsed = {collapsed}
expanded = {expanded}
; Duration of the open/snap animation in milliseconds
animation_ms = {animation_ms}

[geocoder]
; Nominatim-compatible geocoding service
url = {geocoder_url}

[directions]
; OSRM-compatible routing service
url = {directions_url}

[network]
; Request timeout in seconds (applies to geocoding and directions)
timeout = {timeout}
user_agent = {user_agent}

[map]
; Route polyline color as RRGGBB or RRGGBBAA hex (no leading #)
route_color = {route_color}
; Route polyline width in points
route_width = {route_width}

[cache]
; Number of geocoded addresses kept in memory (0 disables the cache)
geocode_capacity = {geocode_capacity}
"#,
        collapsed = config.sheet.extent.collapsed(),
        expanded = config.sheet.extent.expanded(),
        animation_ms = config.sheet.animation_duration.as_millis(),
        geocoder_url = config.geocoder.url,
        directions_url = config.directions.url,
        timeout = config.network.timeout_secs,
        user_agent = config.network.user_agent,
        route_color = color.trim_start_matches('#'),
        route_width = config.map.route_style.line_width,
        geocode_capacity = config.cache.geocode_capacity,
    )
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ini::Ini;

    use super::*;
    use crate::config::parser::parse_ini;
    use crate::map::Rgba;
    use crate::sheet::SheetExtent;

    fn round_trip(config: &ConfigFile) -> ConfigFile {
        let ini = Ini::load_from_str(&to_config_string(config)).unwrap();
        parse_ini(&ini).unwrap()
    }

    #[test]
    fn test_default_round_trips() {
        let config = ConfigFile::default();
        assert_eq!(round_trip(&config), config);
    }

    #[test]
    fn test_custom_values_round_trip() {
        let mut config = ConfigFile::default();
        config.sheet.extent = SheetExtent::new(24.0, 612.5).unwrap();
        config.sheet.animation_duration = Duration::from_millis(180);
        config.geocoder.url = "http://localhost:7070".to_string();
        config.network.timeout_secs = 4;
        config.map.route_style.stroke_color = Rgba {
            r: 0x12,
            g: 0x34,
            b: 0x56,
            a: 0x80,
        };
        config.map.route_style.line_width = 2.5;
        config.cache.geocode_capacity = 0;

        assert_eq!(round_trip(&config), config);
    }

    #[test]
    fn test_every_section_is_written() {
        let content = to_config_string(&ConfigFile::default());
        for section in ["[sheet]", "[geocoder]", "[directions]", "[network]", "[map]", "[cache]"] {
            assert!(content.contains(section), "missing {section}");
        }
    }
}
