//! Panel module specifications.

use crate::error::{Error, Result};
use crate::geometry::Orientation;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The fixed dimensions and orientation of a single panel module.
///
/// All panels placed in one run share this specification; orientation is
/// an input assumption, not computed per panel.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelSpec {
    /// Module width in roof length units.
    pub width: f64,
    /// Module height in roof length units.
    pub height: f64,
    /// Placement orientation for the run.
    pub orientation: Orientation,
}

impl PanelSpec {
    /// Creates a panel specification in portrait orientation.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            orientation: Orientation::Portrait,
        }
    }

    /// Sets the placement orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Returns the placed footprint as `(width, height)`, swapped when the
    /// orientation is landscape.
    pub fn footprint(&self) -> (f64, f64) {
        if self.orientation.is_rotated() {
            (self.height, self.width)
        } else {
            (self.width, self.height)
        }
    }

    /// Returns the module area, identical for either orientation.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Validates the specification and returns an error if its dimensions
    /// are non-finite or non-positive.
    pub fn validate(&self) -> Result<()> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(Error::InvalidPanel("dimensions must be finite".into()));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(Error::InvalidPanel("dimensions must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footprint_portrait() {
        let panel = PanelSpec::new(10.0, 20.0);
        assert_eq!(panel.footprint(), (10.0, 20.0));
        assert_eq!(panel.area(), 200.0);
    }

    #[test]
    fn test_footprint_landscape() {
        let panel = PanelSpec::new(10.0, 20.0).with_orientation(Orientation::Landscape);
        assert_eq!(panel.footprint(), (20.0, 10.0));
        assert_eq!(panel.area(), 200.0);
    }

    #[test]
    fn test_validation() {
        assert!(PanelSpec::new(10.0, 20.0).validate().is_ok());
        assert!(PanelSpec::new(0.0, 20.0).validate().is_err());
        assert!(PanelSpec::new(10.0, -5.0).validate().is_err());
        assert!(PanelSpec::new(f64::NAN, 20.0).validate().is_err());
    }
}
