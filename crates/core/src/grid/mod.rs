//! Grid state, boundary policies and initialization

pub mod boundary;
pub mod cell_grid;
pub mod config;
pub mod initializer;

// Re-export main types
pub use boundary::{BoundaryMode, MOORE_OFFSETS};
pub use cell_grid::{Grid, NeighborhoodView};
pub use config::{GridConfig, DEFAULT_GRID_SIZE};
pub use initializer::Initializer;
