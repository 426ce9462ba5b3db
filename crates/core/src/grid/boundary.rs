//! Boundary policies and Moore-neighbourhood offsets

use serde::{Deserialize, Serialize};

/// Row/column offsets of the Moore neighbourhood (3×3 minus centre), row-major.
pub const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// How neighbour lookups treat the grid edge.
///
/// The policy is always chosen explicitly at construction; it is never inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BoundaryMode {
    /// Cells beyond the edge do not exist: corners have 3 neighbours, edges 5.
    #[default]
    Clamped,
    /// Indices wrap modulo the grid size (torus): every cell has 8 neighbours.
    Wrapped,
}

impl BoundaryMode {
    /// Resolve `index + delta` along an axis of length `len`.
    ///
    /// Returns `None` when a clamped lookup falls off the grid.
    #[inline]
    pub fn resolve_axis(self, index: usize, delta: isize, len: usize) -> Option<usize> {
        match self {
            Self::Clamped => index.checked_add_signed(delta).filter(|&i| i < len),
            Self::Wrapped => Some((index as isize + delta).rem_euclid(len as isize) as usize),
        }
    }

    /// Resolve a 2D offset from `(row, col)` on a `rows × cols` grid.
    #[inline]
    pub fn resolve(
        self,
        row: usize,
        col: usize,
        offset: (isize, isize),
        rows: usize,
        cols: usize,
    ) -> Option<(usize, usize)> {
        let r = self.resolve_axis(row, offset.0, rows)?;
        let c = self.resolve_axis(col, offset.1, cols)?;
        Some((r, c))
    }

    /// Number of Moore neighbours `(row, col)` has under this policy.
    ///
    /// Wrapped grids always report 8, counting a cell reached twice on a
    /// grid narrower than 3 once per offset.
    pub fn neighbor_count(self, row: usize, col: usize, rows: usize, cols: usize) -> u8 {
        match self {
            Self::Wrapped => 8,
            Self::Clamped => MOORE_OFFSETS
                .iter()
                .filter(|&&offset| self.resolve(row, col, offset, rows, cols).is_some())
                .count() as u8,
        }
    }

    /// Column `distance` cells west of `col`, the cell an eastward wind blows from.
    pub fn upwind_column(self, col: usize, distance: usize, cols: usize) -> Option<usize> {
        match self {
            Self::Clamped => col.checked_sub(distance),
            Self::Wrapped => Some((col + cols - distance % cols) % cols),
        }
    }
}
