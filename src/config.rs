//! Layout configuration and clearance defaults.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default clearance between panels and roof edges or obstructions, in
/// roof length units.
pub const DEFAULT_SETBACK_DISTANCE: f64 = 4.0;

/// Default clearance between panel rows that are not contiguous, in roof
/// length units.
pub const DEFAULT_WALKWAY_WIDTH: f64 = 4.0;

/// Default iteration budget for a single placement scan (0 = unguarded).
pub const DEFAULT_MAX_ITERATIONS: u64 = 1_000_000;

/// Configuration for the layout engine.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutConfig {
    /// Clearance from roof edges and around each obstruction.
    pub setback: f64,

    /// Clearance inserted between panel rows that end up non-contiguous.
    pub walkway: f64,

    /// Maximum number of scan iterations before the engine gives up
    /// (0 = unguarded).
    pub max_iterations: u64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            setback: DEFAULT_SETBACK_DISTANCE,
            walkway: DEFAULT_WALKWAY_WIDTH,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl LayoutConfig {
    /// Creates a configuration with default clearances.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the setback clearance.
    pub fn with_setback(mut self, setback: f64) -> Self {
        self.setback = setback;
        self
    }

    /// Sets the walkway clearance.
    pub fn with_walkway(mut self, walkway: f64) -> Self {
        self.walkway = walkway;
        self
    }

    /// Sets the scan iteration budget (0 = unguarded).
    pub fn with_max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Validates the configuration and returns an error if malformed.
    pub fn validate(&self) -> Result<()> {
        if !self.setback.is_finite() || self.setback < 0.0 {
            return Err(Error::InvalidConfig(
                "setback must be finite and non-negative".into(),
            ));
        }
        if !self.walkway.is_finite() || self.walkway < 0.0 {
            return Err(Error::InvalidConfig(
                "walkway must be finite and non-negative".into(),
            ));
        }
        Ok(())
    }
}
