//! Serial / row-parallel execution of per-cell kernels
//!
//! Kernels only ever read a frozen snapshot and write disjoint rows of a
//! fresh buffer, so the two modes produce identical output.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// How per-cell kernels are scheduled within a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Execution {
    /// Single thread, row-major
    Serial,
    /// Rows distributed over the Rayon thread pool
    #[default]
    Parallel,
}

/// Fill a row-major buffer one row at a time.
///
/// `fill` receives the row index and that row's slice of `buffer`.
pub(crate) fn fill_rows<T, F>(execution: Execution, buffer: &mut [T], cols: usize, fill: F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Sync,
{
    match execution {
        Execution::Serial => {
            for (row, cells) in buffer.chunks_mut(cols).enumerate() {
                fill(row, cells);
            }
        }
        Execution::Parallel => {
            buffer
                .par_chunks_mut(cols)
                .enumerate()
                .for_each(|(row, cells)| fill(row, cells));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rows_modes_agree() {
        let cols = 7;
        let mut serial = vec![0_usize; cols * 5];
        let mut parallel = vec![0_usize; cols * 5];
        let kernel = |row: usize, cells: &mut [usize]| {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = row * 100 + col;
            }
        };

        fill_rows(Execution::Serial, &mut serial, cols, kernel);
        fill_rows(Execution::Parallel, &mut parallel, cols, kernel);

        assert_eq!(serial, parallel);
        assert_eq!(serial[cols * 3 + 2], 302);
    }
}
