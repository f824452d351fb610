//! # Panel Layout
//!
//! Deterministic placement of rectangular solar panels on rectangular
//! roof surfaces.
//!
//! Given a roof, a panel module specification, and a set of rooftop
//! obstructions (HVAC units, skylights, vents), the engine computes a
//! greedy left-to-right, top-to-bottom layout that keeps a setback
//! clearance from the roof edges and from every obstruction, and inserts
//! a walkway between rows that end up non-contiguous. The computation is
//! a pure function over its inputs: no I/O, no shared state, bounded
//! time.
//!
//! ## Core Components
//!
//! - [`LayoutEngine`] - The greedy row-scan placement engine
//! - [`RoofSurface`], [`Obstruction`], [`RoofSection`] - Input geometry
//! - [`PanelSpec`], [`Orientation`] - Panel module description
//! - [`LayoutResult`], [`PlacedPanel`], [`PlacementStats`] - Outputs
//! - [`LayoutConfig`] - Setback / walkway clearances and scan budget
//! - [`ObstructionIndex`] - R*-tree broad phase used by the scan
//!
//! ## Quick Start
//!
//! ```rust
//! use panel_layout::{LayoutConfig, LayoutEngine, Obstruction, PanelSpec, RoofSurface};
//!
//! let roof = RoofSurface::new(100.0, 100.0);
//! let panel = PanelSpec::new(10.0, 10.0);
//! let obstructions = vec![Obstruction::hvac(40.0, 40.0, 12.0, 12.0)];
//!
//! let engine = LayoutEngine::new(LayoutConfig::default());
//! let result = engine.solve(&roof, &panel, &obstructions).unwrap();
//!
//! println!(
//!     "Placed {} panels, utilization: {}",
//!     result.placed_count(),
//!     result.utilization_percent()
//! );
//! ```
//!
//! ## Guarantees
//!
//! For any successful computation: placed panels never overlap each
//! other, never come closer than the setback to any obstruction, and lie
//! fully inside the setback-inset roof rectangle. Identical inputs give
//! identical placement sequences. The scan is greedy and single-pass; it
//! does not maximize panel count around obstructions.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod index;
pub mod panel;
pub mod placement;
pub mod result;
pub mod roof;

// Re-exports
pub use config::{
    LayoutConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_SETBACK_DISTANCE, DEFAULT_WALKWAY_WIDTH,
};
pub use engine::LayoutEngine;
pub use error::{Error, Result};
pub use geometry::{Orientation, Rect};
pub use index::{ObstructionEntry, ObstructionIndex};
pub use panel::PanelSpec;
pub use placement::{PlacedPanel, PlacementStats};
pub use result::LayoutResult;
pub use roof::{Obstruction, ObstructionKind, RoofSection, RoofSurface};
