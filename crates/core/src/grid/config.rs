//! Construction-time grid configuration shared by every engine

use super::BoundaryMode;
use crate::error::{SimError, SimResult};
use crate::execution::Execution;
use crate::neighborhood::CountingStrategy;
use serde::{Deserialize, Serialize};

/// Default grid side length
pub const DEFAULT_GRID_SIZE: usize = 100;

/// Grid shape plus the policies that stay fixed for an engine's lifetime.
///
/// `rows`/`cols` change only through an engine's `reset`/`resize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridConfig {
    /// Row count (> 0)
    pub rows: usize,
    /// Column count (> 0)
    pub cols: usize,
    /// Edge handling for every neighbour lookup
    pub boundary: BoundaryMode,
    /// Neighbour counting backend
    pub counting: CountingStrategy,
    /// Serial or row-parallel per-cell work
    pub execution: Execution,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_GRID_SIZE,
            cols: DEFAULT_GRID_SIZE,
            boundary: BoundaryMode::default(),
            counting: CountingStrategy::default(),
            execution: Execution::default(),
        }
    }
}

impl GridConfig {
    /// Default policies with the given shape
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Replace the boundary policy
    pub fn with_boundary(mut self, boundary: BoundaryMode) -> Self {
        self.boundary = boundary;
        self
    }

    /// Replace the neighbour counting backend
    pub fn with_counting(mut self, counting: CountingStrategy) -> Self {
        self.counting = counting;
        self
    }

    /// Replace the execution mode
    pub fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    /// # Errors
    ///
    /// Returns [`SimError::InvalidDimension`] if either dimension is zero.
    pub fn validate(&self) -> SimResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(SimError::InvalidDimension {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GridConfig::default();
        assert_eq!((config.rows, config.cols), (100, 100));
        assert_eq!(config.boundary, BoundaryMode::Clamped);
        assert_eq!(config.counting, CountingStrategy::Convolution);
        assert_eq!(config.execution, Execution::Parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = GridConfig::new(8, 9)
            .with_boundary(BoundaryMode::Wrapped)
            .with_counting(CountingStrategy::Scan)
            .with_execution(Execution::Serial);
        assert_eq!((config.rows, config.cols), (8, 9));
        assert_eq!(config.boundary, BoundaryMode::Wrapped);
        assert_eq!(config.counting, CountingStrategy::Scan);
        assert_eq!(config.execution, Execution::Serial);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert_eq!(
            GridConfig::new(0, 5).validate(),
            Err(SimError::InvalidDimension { rows: 0, cols: 5 })
        );
    }
}
