//! Map surface command interface and overlay types.

use std::fmt;

use crate::coord::{BoundingRegion, Coordinate};

/// An sRGB color with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.is_ascii() || !(digits.len() == 6 || digits.len() == 8) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        let a = if digits.len() == 8 { channel(6)? } else { 255 };
        Some(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a,
        })
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

/// Stroke styling applied to the route polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolylineStyle {
    pub stroke_color: Rgba,
    pub line_width: f64,
}

impl PolylineStyle {
    pub const DEFAULT_COLOR: Rgba = Rgba::opaque(0x00, 0x7A, 0xFF);
    pub const DEFAULT_WIDTH: f64 = 5.0;
}

impl Default for PolylineStyle {
    fn default() -> Self {
        Self {
            stroke_color: Self::DEFAULT_COLOR,
            line_width: Self::DEFAULT_WIDTH,
        }
    }
}

/// Stacking level of an overlay relative to the map's own layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayLevel {
    /// Below road labels.
    AboveRoads,
    /// Above every other overlay and label.
    AboveLabels,
}

/// A drawable overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    Polyline {
        points: Vec<Coordinate>,
        style: PolylineStyle,
        level: OverlayLevel,
    },
}

/// A labelled point annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub coordinate: Coordinate,
    pub title: String,
}

/// Commands accepted by a map view.
///
/// Implementations are driven from the UI loop only.
pub trait MapSurface {
    fn add_overlay(&mut self, overlay: Overlay);

    fn clear_overlays(&mut self);

    fn add_marker(&mut self, marker: Marker);

    fn clear_markers(&mut self);

    /// Move the visible region, optionally with an animated transition.
    fn set_viewport(&mut self, region: BoundingRegion, animated: bool);
}

impl<S: MapSurface + ?Sized> MapSurface for Box<S> {
    fn add_overlay(&mut self, overlay: Overlay) {
        (**self).add_overlay(overlay)
    }

    fn clear_overlays(&mut self) {
        (**self).clear_overlays()
    }

    fn add_marker(&mut self, marker: Marker) {
        (**self).add_marker(marker)
    }

    fn clear_markers(&mut self) {
        (**self).clear_markers()
    }

    fn set_viewport(&mut self, region: BoundingRegion, animated: bool) {
        (**self).set_viewport(region, animated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_parses_six_digit_hex() {
        assert_eq!(Rgba::from_hex("#007AFF"), Some(Rgba::opaque(0, 0x7A, 0xFF)));
        assert_eq!(Rgba::from_hex("ff0000"), Some(Rgba::opaque(255, 0, 0)));
    }

    #[test]
    fn test_rgba_parses_alpha() {
        let color = Rgba::from_hex("#00000080").unwrap();
        assert_eq!(color.a, 0x80);
        assert_eq!(color.to_string(), "#00000080");
    }

    #[test]
    fn test_rgba_rejects_malformed() {
        assert_eq!(Rgba::from_hex("#12345"), None);
        assert_eq!(Rgba::from_hex("#GGGGGG"), None);
        assert_eq!(Rgba::from_hex(""), None);
        assert_eq!(Rgba::from_hex("#ééé"), None);
    }

    #[test]
    fn test_rgba_display_round_trips() {
        let color = PolylineStyle::DEFAULT_COLOR;
        assert_eq!(Rgba::from_hex(&color.to_string()), Some(color));
    }
}
