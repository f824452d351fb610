//! Layout result representation.

use crate::placement::{PlacedPanel, PlacementStats};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of a layout computation.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutResult {
    /// Panels in placement order: top row first, left to right within a
    /// row; for multi-section layouts, sections in input order.
    pub placements: Vec<PlacedPanel>,

    /// Number of roof sections spanned by the placements: the highest
    /// occupied section index plus one, or 0 when nothing was placed.
    pub sections_used: usize,

    /// Ratio of placed panel area to total roof area (0.0 - 1.0).
    pub utilization: f64,

    /// Computation time in milliseconds.
    pub computation_time_ms: u64,
}

impl LayoutResult {
    /// Creates a new empty result.
    pub fn new() -> Self {
        Self {
            placements: Vec::new(),
            sections_used: 0,
            utilization: 0.0,
            computation_time_ms: 0,
        }
    }

    /// Returns the number of placed panels.
    pub fn placed_count(&self) -> usize {
        self.placements.len()
    }

    /// Returns true if at least one panel was placed.
    pub fn is_successful(&self) -> bool {
        !self.placements.is_empty()
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization * 100.0)
    }

    /// Computes placement statistics.
    pub fn placement_stats(&self) -> PlacementStats {
        PlacementStats::from_placements(&self.placements)
    }

    /// Merges placements from another section's result, offsetting its
    /// section indices by `section_offset`.
    ///
    /// Utilization is not recomputed here; that requires the combined roof
    /// areas, which the caller knows.
    pub fn merge(&mut self, other: LayoutResult, section_offset: usize) {
        for mut placement in other.placements {
            placement.section_index += section_offset;
            self.placements.push(placement);
        }

        if other.sections_used > 0 {
            self.sections_used = self
                .sections_used
                .max(other.sections_used + section_offset);
        }
        self.computation_time_ms += other.computation_time_ms;
    }
}

impl Default for LayoutResult {
    fn default() -> Self {
        Self::new()
    }
}
