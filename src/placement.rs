//! Placed panel entities and summary statistics.

use crate::geometry::{Orientation, Rect};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single panel placed by the layout engine.
///
/// Created once per successful placement slot and never mutated afterward.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedPanel {
    /// Generated identifier, unique within one roof section.
    pub id: String,
    /// Panel rectangle in roof coordinates.
    pub rect: Rect,
    /// Orientation used for this panel.
    pub orientation: Orientation,
    /// Index of the roof section this panel belongs to.
    pub section_index: usize,
}

impl PlacedPanel {
    /// Creates a placed panel on section 0. Identifiers are assigned in
    /// placement order, starting at `P1`.
    pub(crate) fn new(ordinal: usize, rect: Rect, orientation: Orientation) -> Self {
        Self {
            id: format!("P{}", ordinal),
            rect,
            orientation,
            section_index: 0,
        }
    }
}

/// Aggregate statistics over a set of placements.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacementStats {
    /// Number of placed panels.
    pub count: usize,
    /// Combined panel area.
    pub total_area: f64,
    /// Bounding rectangle of all placements, if any.
    pub bounds: Option<Rect>,
}

impl PlacementStats {
    /// Computes statistics from a placement list.
    pub fn from_placements(placements: &[PlacedPanel]) -> Self {
        let mut total_area = 0.0;
        let mut bounds: Option<Rect> = None;

        for panel in placements {
            total_area += panel.rect.area();
            bounds = Some(match bounds {
                None => panel.rect,
                Some(acc) => {
                    let min_x = acc.x.min(panel.rect.x);
                    let min_y = acc.y.min(panel.rect.y);
                    let max_x = acc.right().max(panel.rect.right());
                    let max_y = acc.bottom().max(panel.rect.bottom());
                    Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
                }
            });
        }

        Self {
            count: placements.len(),
            total_area,
            bounds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_empty() {
        let stats = PlacementStats::from_placements(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.total_area, 0.0);
        assert!(stats.bounds.is_none());
    }

    #[test]
    fn test_stats_from_placements() {
        let placements = vec![
            PlacedPanel::new(1, Rect::new(4.0, 4.0, 10.0, 10.0), Orientation::Portrait),
            PlacedPanel::new(2, Rect::new(18.0, 4.0, 10.0, 10.0), Orientation::Portrait),
        ];
        let stats = PlacementStats::from_placements(&placements);
        assert_eq!(stats.count, 2);
        assert_eq!(stats.total_area, 200.0);
        assert_eq!(stats.bounds, Some(Rect::new(4.0, 4.0, 24.0, 10.0)));
    }

    #[test]
    fn test_generated_ids() {
        let panel = PlacedPanel::new(3, Rect::new(0.0, 0.0, 1.0, 1.0), Orientation::Portrait);
        assert_eq!(panel.id, "P3");
        assert_eq!(panel.section_index, 0);
    }
}
