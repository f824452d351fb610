//! Error types for layout computations.

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while computing a panel layout.
///
/// Degenerate but well-formed inputs (a roof too small for a single panel,
/// rows fully covered by obstructions) are not errors; they produce a
/// successful result with fewer or zero placements.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The roof surface has non-finite or non-positive dimensions.
    #[error("invalid roof: {0}")]
    InvalidRoof(String),

    /// The panel module has non-finite or non-positive dimensions.
    #[error("invalid panel: {0}")]
    InvalidPanel(String),

    /// The layout configuration is malformed.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The placement scan exceeded the configured iteration budget.
    #[error("placement scan exceeded the iteration limit of {limit}")]
    IterationLimitExceeded {
        /// The configured iteration budget.
        limit: u64,
    },
}
