//! Sheet extent and animation configuration.

use std::time::Duration;

use thiserror::Error;

/// Default resting offset of a collapsed sheet.
pub const DEFAULT_COLLAPSED_OFFSET: f64 = 0.0;

/// Default resting offset of an expanded sheet.
pub const DEFAULT_EXPANDED_OFFSET: f64 = 560.0;

/// Default duration of the open/snap animation.
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(300);

/// Errors constructing a sheet extent.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SheetError {
    /// Bounds are not ordered `collapsed < expanded`.
    #[error("Invalid sheet extent: collapsed ({collapsed}) must be less than expanded ({expanded})")]
    InvertedExtent { collapsed: f64, expanded: f64 },

    /// A bound is NaN or infinite.
    #[error("Invalid sheet extent: bounds must be finite")]
    NonFinite,
}

/// The two resting offsets between which the sheet travels.
///
/// `collapsed` is numerically the closed position, `expanded` the open one,
/// and `collapsed < expanded` always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetExtent {
    collapsed: f64,
    expanded: f64,
}

impl SheetExtent {
    /// Create an extent, rejecting unordered or non-finite bounds.
    pub fn new(collapsed: f64, expanded: f64) -> Result<Self, SheetError> {
        if !collapsed.is_finite() || !expanded.is_finite() {
            return Err(SheetError::NonFinite);
        }
        if collapsed >= expanded {
            return Err(SheetError::InvertedExtent {
                collapsed,
                expanded,
            });
        }
        Ok(Self {
            collapsed,
            expanded,
        })
    }

    /// Closed resting offset.
    pub fn collapsed(&self) -> f64 {
        self.collapsed
    }

    /// Open resting offset.
    pub fn expanded(&self) -> f64 {
        self.expanded
    }

    /// Clamp an offset into `[collapsed, expanded]`.
    pub fn clamp(&self, offset: f64) -> f64 {
        offset.clamp(self.collapsed, self.expanded)
    }
}

impl Default for SheetExtent {
    fn default() -> Self {
        Self {
            collapsed: DEFAULT_COLLAPSED_OFFSET,
            expanded: DEFAULT_EXPANDED_OFFSET,
        }
    }
}

/// Animation settings for the sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetConfig {
    /// Fixed duration of every open/snap animation.
    pub animation_duration: Duration,
}

impl SheetConfig {
    /// Create a config with the given animation duration.
    pub fn new(animation_duration: Duration) -> Self {
        Self { animation_duration }
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            animation_duration: DEFAULT_ANIMATION_DURATION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_rejects_inverted_bounds() {
        assert_eq!(
            SheetExtent::new(500.0, 100.0),
            Err(SheetError::InvertedExtent {
                collapsed: 500.0,
                expanded: 100.0
            })
        );
        assert!(SheetExtent::new(100.0, 100.0).is_err());
    }

    #[test]
    fn test_extent_rejects_non_finite() {
        assert_eq!(SheetExtent::new(f64::NAN, 1.0), Err(SheetError::NonFinite));
        assert_eq!(
            SheetExtent::new(0.0, f64::INFINITY),
            Err(SheetError::NonFinite)
        );
    }

    #[test]
    fn test_clamp() {
        let extent = SheetExtent::new(10.0, 20.0).unwrap();
        assert_eq!(extent.clamp(5.0), 10.0);
        assert_eq!(extent.clamp(15.0), 15.0);
        assert_eq!(extent.clamp(25.0), 20.0);
    }
}
