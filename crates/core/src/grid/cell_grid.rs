//! Row-major 2D grid of cell states with bounds-checked and policy-aware neighbour access

use super::boundary::{BoundaryMode, MOORE_OFFSETS};
use super::initializer::Initializer;
use crate::core_types::{CellState, RandomSource};
use crate::error::{SimError, SimResult};
use serde::{Deserialize, Serialize};

/// A `rows × cols` grid holding exactly one state per cell.
///
/// Dimensions only change through [`Grid::resize`], which reallocates and
/// reinitializes the whole grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "GridRepr<S>",
    bound(deserialize = "S: CellState + Deserialize<'de>")
)]
pub struct Grid<S> {
    /// Cell states in row-major order (`row * cols + col`)
    cells: Vec<S>,
    rows: usize,
    cols: usize,
}

/// Wire form of a [`Grid`], shape-checked before it becomes one.
#[derive(Deserialize)]
struct GridRepr<S> {
    cells: Vec<S>,
    rows: usize,
    cols: usize,
}

impl<S: CellState> TryFrom<GridRepr<S>> for Grid<S> {
    type Error = SimError;

    fn try_from(repr: GridRepr<S>) -> SimResult<Self> {
        let GridRepr { cells, rows, cols } = repr;
        if rows == 0 || cols == 0 {
            return Err(SimError::InvalidDimension { rows, cols });
        }
        if rows.checked_mul(cols) != Some(cells.len()) {
            // A flat cell list is reported as a single row.
            return Err(SimError::DimensionMismatch {
                expected_rows: rows,
                expected_cols: cols,
                found_rows: 1,
                found_cols: cells.len(),
            });
        }
        Ok(Self::from_cells(rows, cols, cells))
    }
}

/// The up-to-8 Moore neighbours of a cell, in row-major offset order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborhoodView<S> {
    states: [S; 8],
    len: usize,
}

impl<S: CellState> NeighborhoodView<S> {
    /// Neighbour states that exist under the active boundary policy
    pub fn states(&self) -> &[S] {
        &self.states[..self.len]
    }

    /// Number of neighbours (3, 5 or 8 on clamped grids of at least 2×2; always 8 wrapped)
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if the cell has no neighbours (a clamped 1×1 grid)
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of neighbours in `state`
    pub fn count(&self, state: S) -> u8 {
        self.states().iter().filter(|&&s| s == state).count() as u8
    }

    /// `true` if any neighbour is in `state`
    pub fn any(&self, state: S) -> bool {
        self.states().contains(&state)
    }
}

impl<S: CellState> Grid<S> {
    /// Create a grid populated by `initializer`.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`Initializer::validate`]; no draw is taken on failure.
    pub fn new(
        rows: usize,
        cols: usize,
        initializer: &Initializer<S>,
        rng: &mut impl RandomSource,
    ) -> SimResult<Self> {
        initializer.build(rows, cols, rng)
    }

    /// Create a grid with every cell in `state`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidDimension`] if either dimension is zero.
    pub fn filled(rows: usize, cols: usize, state: S) -> SimResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(SimError::InvalidDimension { rows, cols });
        }
        Ok(Self::from_cells(rows, cols, vec![state; rows * cols]))
    }

    /// Create a grid from explicit rows, inferring the dimensions.
    ///
    /// # Errors
    ///
    /// - [`SimError::InvalidDimension`] if there are no rows or the first row is empty
    /// - [`SimError::DimensionMismatch`] if the rows are ragged
    pub fn from_rows(state: Vec<Vec<S>>) -> SimResult<Self> {
        let rows = state.len();
        let cols = state.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(SimError::InvalidDimension { rows, cols });
        }
        if let Some(ragged) = state.iter().find(|row| row.len() != cols) {
            return Err(SimError::DimensionMismatch {
                expected_rows: rows,
                expected_cols: cols,
                found_rows: rows,
                found_cols: ragged.len(),
            });
        }
        Ok(Self::from_cells(
            rows,
            cols,
            state.into_iter().flatten().collect(),
        ))
    }

    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<S>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { cells, rows, cols }
    }

    /// Row count
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column count
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[S] {
        &self.cells
    }

    /// One row of cells
    pub fn row(&self, row: usize) -> Option<&[S]> {
        (row < self.rows).then(|| &self.cells[row * self.cols..(row + 1) * self.cols])
    }

    /// Rows as owned vectors, top to bottom
    pub fn to_rows(&self) -> Vec<Vec<S>> {
        self.cells.chunks(self.cols).map(<[S]>::to_vec).collect()
    }

    /// State at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::OutOfRange`] if the index is outside the grid.
    pub fn get(&self, row: usize, col: usize) -> SimResult<S> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Overwrite the state at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::OutOfRange`] if the index is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, state: S) -> SimResult<()> {
        let idx = self.index(row, col)?;
        self.cells[idx] = state;
        Ok(())
    }

    /// Moore neighbours of `(row, col)` under `boundary`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::OutOfRange`] if the index is outside the grid.
    pub fn neighbors(
        &self,
        row: usize,
        col: usize,
        boundary: BoundaryMode,
    ) -> SimResult<NeighborhoodView<S>> {
        self.index(row, col)?;
        let mut view = NeighborhoodView {
            states: [S::default(); 8],
            len: 0,
        };
        for &offset in &MOORE_OFFSETS {
            if let Some((r, c)) = boundary.resolve(row, col, offset, self.rows, self.cols) {
                view.states[view.len] = self.cells[r * self.cols + c];
                view.len += 1;
            }
        }
        Ok(view)
    }

    /// Reallocate to `rows × cols` and reinitialize every cell.
    ///
    /// The grid is left untouched if the new shape or initializer is invalid.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`Initializer::validate`].
    pub fn resize(
        &mut self,
        rows: usize,
        cols: usize,
        initializer: &Initializer<S>,
        rng: &mut impl RandomSource,
    ) -> SimResult<()> {
        *self = initializer.build(rows, cols, rng)?;
        Ok(())
    }

    /// Number of cells in `state`
    pub fn count(&self, state: S) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// Row-major boolean mask of cells matching `predicate`
    pub fn mask(&self, predicate: impl Fn(S) -> bool) -> Vec<bool> {
        self.cells.iter().map(|&s| predicate(s)).collect()
    }

    /// Replace every cell with a freshly computed generation of the same shape
    pub(crate) fn replace_cells(&mut self, cells: Vec<S>) {
        debug_assert_eq!(cells.len(), self.cells.len());
        self.cells = cells;
    }

    fn index(&self, row: usize, col: usize) -> SimResult<usize> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(SimError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }
}
