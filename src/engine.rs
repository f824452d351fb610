//! Greedy row-scan placement engine.

use crate::config::LayoutConfig;
use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::index::{ObstructionEntry, ObstructionIndex};
use crate::panel::PanelSpec;
use crate::placement::PlacedPanel;
use crate::result::LayoutResult;
use crate::roof::{Obstruction, RoofSection, RoofSurface};

use rayon::prelude::*;
use std::time::Instant;

/// Deterministic greedy layout engine.
///
/// Fills the roof top-to-bottom, left-to-right, placing a panel wherever
/// it fits without entering a clearance zone, and never reconsidering a
/// skipped cell. The scan is a single pass; it makes no attempt at a
/// globally optimal packing, and a cell blocked by an obstruction is
/// passed over in setback-sized steps rather than searched around.
///
/// The engine holds no state beyond its configuration, so one instance
/// can serve concurrent computations without synchronization.
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    /// Creates a new engine with the given configuration.
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Creates an engine with default configuration.
    pub fn default_config() -> Self {
        Self::new(LayoutConfig::default())
    }

    /// Returns the engine's configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Computes a panel layout for a single roof surface.
    ///
    /// Returns an error only for malformed configuration or non-finite /
    /// non-positive dimensions. A roof too small for even one panel, or
    /// rows fully covered by obstructions, yield `Ok` with fewer or zero
    /// placements.
    pub fn solve(
        &self,
        roof: &RoofSurface,
        panel: &PanelSpec,
        obstructions: &[Obstruction],
    ) -> Result<LayoutResult> {
        let start = Instant::now();

        self.config.validate()?;
        roof.validate()?;
        panel.validate()?;

        let placements = self.scan(roof, panel, obstructions)?;

        let mut result = LayoutResult::new();
        result.sections_used = if placements.is_empty() { 0 } else { 1 };
        result.utilization = placements.len() as f64 * panel.area() / roof.area();
        result.placements = placements;
        result.computation_time_ms = start.elapsed().as_millis() as u64;

        Ok(result)
    }

    /// Computes layouts for several roof sections and merges them.
    ///
    /// Sections are solved in parallel but merged in input order, so the
    /// combined placement sequence is deterministic. Each placement's
    /// `section_index` identifies its section; utilization is recomputed
    /// over the summed section areas. Any failing section fails the whole
    /// computation.
    pub fn solve_sections(
        &self,
        sections: &[RoofSection],
        panel: &PanelSpec,
    ) -> Result<LayoutResult> {
        let start = Instant::now();

        let per_section = sections
            .par_iter()
            .map(|section| self.solve(&section.surface, panel, &section.obstructions))
            .collect::<Result<Vec<_>>>()?;

        let mut merged = LayoutResult::new();
        let mut placed_area = 0.0;
        for (section_index, section_result) in per_section.into_iter().enumerate() {
            placed_area += section_result.placed_count() as f64 * panel.area();
            merged.merge(section_result, section_index);
        }

        let roof_area: f64 = sections.iter().map(|s| s.surface.area()).sum();
        merged.utilization = if roof_area > 0.0 {
            placed_area / roof_area
        } else {
            0.0
        };
        merged.computation_time_ms = start.elapsed().as_millis() as u64;

        Ok(merged)
    }

    /// The row scan itself. Inputs are already validated.
    fn scan(
        &self,
        roof: &RoofSurface,
        panel: &PanelSpec,
        obstructions: &[Obstruction],
    ) -> Result<Vec<PlacedPanel>> {
        let setback = self.config.setback;
        let walkway = self.config.walkway;
        let (panel_w, panel_h) = panel.footprint();

        // Obstructions are processed in ascending-y order so that "first
        // obstruction ahead of the cursor" is well-defined.
        let mut sorted: Vec<&Obstruction> = obstructions.iter().collect();
        sorted.sort_by(|a, b| a.rect.y.total_cmp(&b.rect.y));
        let index = ObstructionIndex::with_entries(
            sorted
                .iter()
                .enumerate()
                .map(|(rank, o)| ObstructionEntry::new(rank, &o.rect))
                .collect(),
        );

        let mut placements = Vec::new();
        let mut iterations: u64 = 0;
        let mut ordinal = 1usize;
        let mut prev_row_bottom: Option<f64> = None;
        let mut y = setback;

        while y < roof.height - setback {
            self.charge(&mut iterations)?;

            // Rows separated by more than a normal gap still need a
            // walkway between them.
            if let Some(bottom) = prev_row_bottom {
                if bottom + walkway < y {
                    y += walkway;
                    if y >= roof.height - setback {
                        break;
                    }
                }
            }

            // The row must fit between the setback lines.
            if y + panel_h > roof.height - setback {
                break;
            }

            let band = index.query_band(y, y + panel_h, setback);

            let mut x = setback;
            let mut available = roof.width - 2.0 * setback;
            // A row stops early at the first obstruction ahead of the
            // cursor; cells past it are only reached when the obstruction
            // starts at or before the row origin.
            if let Some(entry) = band.iter().find(|entry| entry.min_x() > x) {
                available = available.min(entry.min_x() - x);
            }

            while x < roof.width - setback && available >= panel_w {
                self.charge(&mut iterations)?;

                let blocked = band.iter().any(|entry| {
                    x < entry.max_x() + setback && x + panel_w > entry.min_x() - setback
                });

                if blocked {
                    x += setback;
                    available -= setback;
                } else {
                    placements.push(PlacedPanel::new(
                        ordinal,
                        Rect::new(x, y, panel_w, panel_h),
                        panel.orientation,
                    ));
                    ordinal += 1;
                    x += panel_w + setback;
                    available -= panel_w + setback;
                }
            }

            prev_row_bottom = Some(y + panel_h);
            y += panel_h + setback;
        }

        Ok(placements)
    }

    /// Counts one scan iteration against the configured budget.
    fn charge(&self, iterations: &mut u64) -> Result<()> {
        *iterations += 1;
        let limit = self.config.max_iterations;
        if limit > 0 && *iterations > limit {
            return Err(Error::IterationLimitExceeded { limit });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> LayoutEngine {
        LayoutEngine::new(LayoutConfig::new().with_setback(4.0).with_walkway(4.0))
    }

    #[test]
    fn test_open_roof_grid() {
        let result = engine()
            .solve(&RoofSurface::new(100.0, 100.0), &PanelSpec::new(10.0, 10.0), &[])
            .unwrap();

        assert_eq!(result.placed_count(), 36);
        assert_eq!(result.sections_used, 1);
        // First panel sits at the setback corner.
        assert_eq!(result.placements[0].rect, Rect::new(4.0, 4.0, 10.0, 10.0));
        // Row-major order: second panel is offset along x by panel + setback.
        assert_eq!(result.placements[1].rect, Rect::new(18.0, 4.0, 10.0, 10.0));
    }

    #[test]
    fn test_roof_too_small_is_empty_not_error() {
        let result = engine()
            .solve(&RoofSurface::new(10.0, 10.0), &PanelSpec::new(20.0, 20.0), &[])
            .unwrap();

        assert!(!result.is_successful());
        assert_eq!(result.sections_used, 0);
        assert_eq!(result.utilization, 0.0);
    }

    #[test]
    fn test_invalid_dimensions_fail_fast() {
        let err = engine()
            .solve(&RoofSurface::new(0.0, 100.0), &PanelSpec::new(10.0, 10.0), &[])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidRoof(_)));

        let err = engine()
            .solve(
                &RoofSurface::new(100.0, 100.0),
                &PanelSpec::new(f64::NAN, 10.0),
                &[],
            )
            .unwrap_err();
        assert!(matches!(err, Error::InvalidPanel(_)));
    }

    #[test]
    fn test_obstructed_rows_clip_and_skip() {
        let obstructions = vec![Obstruction::hvac(30.0, 30.0, 10.0, 10.0)];
        let result = engine()
            .solve(
                &RoofSurface::new(100.0, 100.0),
                &PanelSpec::new(10.0, 10.0),
                &obstructions,
            )
            .unwrap();

        // The zone around (30,30,10,10) reaches rows y=18 and y=32; each
        // of those rows stops at the obstruction after a single panel.
        assert_eq!(result.placed_count(), 4 * 6 + 2);
        for panel in &result.placements {
            assert!(!panel.rect.intersects(&obstructions[0].clearance_zone(4.0)));
        }
    }

    #[test]
    fn test_walkway_inserted_for_oversized_gaps() {
        let engine = LayoutEngine::new(LayoutConfig::new().with_setback(4.0).with_walkway(2.0));
        let result = engine
            .solve(&RoofSurface::new(100.0, 100.0), &PanelSpec::new(10.0, 10.0), &[])
            .unwrap();

        // With a walkway narrower than the setback, every row gap counts
        // as oversized and is widened by the walkway: rows land at
        // 4, 20, 36, 52, 68, 84.
        let mut rows: Vec<f64> = result.placements.iter().map(|p| p.rect.y).collect();
        rows.dedup();
        assert_eq!(rows, vec![4.0, 20.0, 36.0, 52.0, 68.0, 84.0]);
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let engine = LayoutEngine::new(LayoutConfig::new().with_setback(-1.0));
        let err = engine
            .solve(&RoofSurface::new(100.0, 100.0), &PanelSpec::new(10.0, 10.0), &[])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_iteration_guard() {
        let engine = LayoutEngine::new(LayoutConfig::new().with_max_iterations(10));
        let err = engine
            .solve(&RoofSurface::new(100.0, 100.0), &PanelSpec::new(10.0, 10.0), &[])
            .unwrap_err();
        assert_eq!(err, Error::IterationLimitExceeded { limit: 10 });
    }
}
