//! Direct Moore scan

use super::{CountField, CountingStrategy, NeighborCounter};
use crate::execution::{fill_rows, Execution};
use crate::grid::{BoundaryMode, MOORE_OFFSETS};

/// Visits the eight offsets of every cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanCounter;

impl NeighborCounter for ScanCounter {
    fn count(
        &self,
        mask: &[bool],
        rows: usize,
        cols: usize,
        boundary: BoundaryMode,
        execution: Execution,
    ) -> CountField {
        debug_assert_eq!(mask.len(), rows * cols);
        let mut field = CountField::new(rows, cols);
        fill_rows(execution, field.as_mut_slice(), cols, |row, counts| {
            for (col, count) in counts.iter_mut().enumerate() {
                *count = MOORE_OFFSETS
                    .iter()
                    .filter_map(|&offset| boundary.resolve(row, col, offset, rows, cols))
                    .map(|(r, c)| u8::from(mask[r * cols + c]))
                    .sum();
            }
        });
        field
    }

    fn strategy(&self) -> CountingStrategy {
        CountingStrategy::Scan
    }
}
