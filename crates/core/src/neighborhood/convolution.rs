//! Separable 3×3 box-sum counter
//!
//! The Moore count equals the 3×3 box sum minus the centre cell. The box
//! sum is computed as a horizontal 1×3 pass followed by a vertical 3×1 pass,
//! each resolving out-of-grid taps through the active boundary policy.

use super::{CountField, CountingStrategy, NeighborCounter};
use crate::execution::{fill_rows, Execution};
use crate::grid::BoundaryMode;

const TAPS: [isize; 3] = [-1, 0, 1];

/// Convolution-equivalent counter, two passes over the grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvolutionCounter;

impl NeighborCounter for ConvolutionCounter {
    fn count(
        &self,
        mask: &[bool],
        rows: usize,
        cols: usize,
        boundary: BoundaryMode,
        execution: Execution,
    ) -> CountField {
        debug_assert_eq!(mask.len(), rows * cols);

        // Horizontal pass: each entry holds at most 3.
        let mut horizontal = vec![0_u8; rows * cols];
        fill_rows(execution, &mut horizontal, cols, |row, sums| {
            let line = &mask[row * cols..(row + 1) * cols];
            for (col, sum) in sums.iter_mut().enumerate() {
                *sum = TAPS
                    .iter()
                    .filter_map(|&dc| boundary.resolve_axis(col, dc, cols))
                    .map(|c| u8::from(line[c]))
                    .sum();
            }
        });

        // Vertical pass, then drop the centre.
        let mut field = CountField::new(rows, cols);
        fill_rows(execution, field.as_mut_slice(), cols, |row, counts| {
            let taps: Vec<usize> = TAPS
                .iter()
                .filter_map(|&dr| boundary.resolve_axis(row, dr, rows))
                .collect();
            for (col, count) in counts.iter_mut().enumerate() {
                let boxed: u8 = taps.iter().map(|&r| horizontal[r * cols + col]).sum();
                *count = boxed - u8::from(mask[row * cols + col]);
            }
        });
        field
    }

    fn strategy(&self) -> CountingStrategy {
        CountingStrategy::Convolution
    }
}
