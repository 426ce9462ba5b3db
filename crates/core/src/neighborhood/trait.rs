//! Neighbour counter trait definition
//!
//! Counters turn a boolean "is interesting" mask over the pre-step
//! generation into a per-cell Moore-neighbour count. Every backend must
//! agree exactly with a direct scan under both boundary policies.

use super::{CountField, CountingStrategy};
use crate::execution::Execution;
use crate::grid::BoundaryMode;

/// Backend-agnostic whole-grid neighbour counting
pub trait NeighborCounter: Send + Sync {
    /// Count, for every cell, the Moore neighbours whose mask entry is `true`.
    ///
    /// # Arguments
    ///
    /// * `mask` - Row-major flags, `rows * cols` long
    /// * `rows` / `cols` - Grid dimensions
    /// * `boundary` - Edge policy for out-of-grid offsets
    /// * `execution` - Serial or row-parallel evaluation
    fn count(
        &self,
        mask: &[bool],
        rows: usize,
        cols: usize,
        boundary: BoundaryMode,
        execution: Execution,
    ) -> CountField;

    /// Strategy this backend implements
    fn strategy(&self) -> CountingStrategy;
}
