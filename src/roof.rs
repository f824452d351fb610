//! Roof surfaces and obstructions.

use crate::error::{Error, Result};
use crate::geometry::Rect;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rectangular roof surface with its origin at (0, 0).
///
/// Immutable for the duration of one layout computation. Dimensions are in
/// the same length unit as the panel dimensions; no unit conversion is
/// performed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoofSurface {
    /// Extent along the x axis.
    pub width: f64,
    /// Extent along the y axis.
    pub height: f64,
}

impl RoofSurface {
    /// Creates a new roof surface.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the total roof area.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns the horizontal span remaining once `setback` is applied on
    /// both sides.
    pub fn usable_width(&self, setback: f64) -> f64 {
        (self.width - 2.0 * setback).max(0.0)
    }

    /// Returns the vertical span remaining once `setback` is applied on
    /// both sides.
    pub fn usable_height(&self, setback: f64) -> f64 {
        (self.height - 2.0 * setback).max(0.0)
    }

    /// Returns the usable area after applying `margin` on all sides.
    pub fn effective_area(&self, margin: f64) -> f64 {
        self.usable_width(margin) * self.usable_height(margin)
    }

    /// Returns the bounding corners as (min, max).
    pub fn aabb(&self) -> ([f64; 2], [f64; 2]) {
        ([0.0, 0.0], [self.width, self.height])
    }

    /// Validates the surface and returns an error if its dimensions are
    /// non-finite or non-positive.
    pub fn validate(&self) -> Result<()> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(Error::InvalidRoof("dimensions must be finite".into()));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(Error::InvalidRoof("dimensions must be positive".into()));
        }
        Ok(())
    }
}

/// The kind of rooftop feature occupying an obstruction rectangle.
///
/// Display-only: placement treats every kind identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ObstructionKind {
    /// Rooftop HVAC unit.
    Hvac,
    /// Skylight.
    Skylight,
    /// Pipe or vent penetration.
    Vent,
    /// Any other fixed feature.
    #[default]
    Other,
}

/// A fixed rectangular feature on the roof that panels must avoid.
///
/// Obstructions are inputs and are never mutated. They are assumed to lie
/// within the roof bounds and to not overlap each other; neither
/// assumption is validated.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Obstruction {
    /// What occupies this rectangle.
    pub kind: ObstructionKind,
    /// Obstruction rectangle in roof coordinates.
    pub rect: Rect,
}

impl Obstruction {
    /// Creates a new obstruction.
    pub fn new(kind: ObstructionKind, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            kind,
            rect: Rect::new(x, y, width, height),
        }
    }

    /// Creates an HVAC obstruction.
    pub fn hvac(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(ObstructionKind::Hvac, x, y, width, height)
    }

    /// Creates a skylight obstruction.
    pub fn skylight(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(ObstructionKind::Skylight, x, y, width, height)
    }

    /// Creates a pipe/vent obstruction.
    pub fn vent(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(ObstructionKind::Vent, x, y, width, height)
    }

    /// Creates an obstruction of unspecified kind.
    pub fn other(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(ObstructionKind::Other, x, y, width, height)
    }

    /// Returns the keep-out rectangle once `setback` clearance is applied
    /// on all sides.
    pub fn clearance_zone(&self, setback: f64) -> Rect {
        self.rect.expand(setback)
    }
}

/// One face of a multi-face roof together with its obstructions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoofSection {
    /// The face's surface.
    pub surface: RoofSurface,
    /// Obstructions on this face.
    pub obstructions: Vec<Obstruction>,
}

impl RoofSection {
    /// Creates a section with no obstructions.
    pub fn new(surface: RoofSurface) -> Self {
        Self {
            surface,
            obstructions: Vec::new(),
        }
    }

    /// Adds an obstruction to the section.
    pub fn with_obstruction(mut self, obstruction: Obstruction) -> Self {
        self.obstructions.push(obstruction);
        self
    }

    /// Replaces the section's obstruction list.
    pub fn with_obstructions(mut self, obstructions: Vec<Obstruction>) -> Self {
        self.obstructions = obstructions;
        self
    }
}
