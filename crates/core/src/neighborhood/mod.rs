//! Whole-grid neighbour counting
//!
//! Engines build a boolean mask from the pre-step generation (alive cells,
//! trees, burning cells) and hand it to a [`NeighborCounter`]. Two backends
//! are available and always agree:
//!
//! - [`ScanCounter`]: visits the eight Moore offsets of each cell
//! - [`ConvolutionCounter`]: separable 3×3 box sum minus the centre
//!
//! # Example
//!
//! ```rust
//! use cellfire_core::grid::BoundaryMode;
//! use cellfire_core::neighborhood::{create_counter, CountingStrategy};
//! use cellfire_core::Execution;
//!
//! let counter = create_counter(CountingStrategy::Convolution);
//! let field = counter.count(&[true; 9], 3, 3, BoundaryMode::Clamped, Execution::Serial);
//! assert_eq!(field.get(1, 1), 8);
//! ```

mod convolution;
mod fields;
mod scan;
mod summary;
#[allow(clippy::module_name_repetitions)]
mod r#trait;

// Re-exports
pub use convolution::ConvolutionCounter;
pub use fields::CountField;
pub use r#trait::NeighborCounter;
pub use scan::ScanCounter;
pub use summary::{FireNeighborhood, NeighborhoodSummary};

use serde::{Deserialize, Serialize};
use tracing::info;

/// Neighbour counting backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CountingStrategy {
    /// Direct Moore scan per cell
    Scan,
    /// Separable box-sum aggregation
    #[default]
    Convolution,
}

/// Create a neighbour counter for the requested strategy
pub fn create_counter(strategy: CountingStrategy) -> Box<dyn NeighborCounter> {
    info!("Using {:?} neighbour counter", strategy);
    match strategy {
        CountingStrategy::Scan => Box::new(ScanCounter),
        CountingStrategy::Convolution => Box::new(ConvolutionCounter),
    }
}
