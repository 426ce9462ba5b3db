//! Per-cell neighbourhood summaries handed to transition rules

use serde::{Deserialize, Serialize};

/// What a two-state rule sees of a cell's surroundings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NeighborhoodSummary {
    /// Alive neighbours
    pub alive: u8,
    /// Neighbours that exist under the boundary policy (3, 5 or 8 in 2D; 2 on a line)
    pub neighbors: u8,
}

impl NeighborhoodSummary {
    /// Summary with `alive` of `neighbors` existing neighbours alive
    pub fn new(alive: u8, neighbors: u8) -> Self {
        Self { alive, neighbors }
    }

    /// Neighbours that exist and are dead
    pub fn dead(&self) -> u8 {
        self.neighbors.saturating_sub(self.alive)
    }
}

/// Pre-step facts about a forest cell's surroundings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FireNeighborhood {
    /// Tree neighbours
    pub trees: u8,
    /// Burning neighbours
    pub burning: u8,
    /// The cell `wind_speed` columns west is Burning
    pub upwind_burning: bool,
}

impl FireNeighborhood {
    /// Tree density in eighths, the growth weight for an empty cell.
    pub fn tree_density(&self) -> f64 {
        f64::from(self.trees) / 8.0
    }
}
