//! Per-cell neighbour count storage

/// Neighbour counts for a whole grid
///
/// Stores one count per cell as a flat `Vec<u8>` in row-major order
/// (`row * cols + col`). A Moore count never exceeds 8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountField {
    /// Counts in row-major order
    pub data: Vec<u8>,
    /// Grid height in cells
    pub rows: usize,
    /// Grid width in cells
    pub cols: usize,
}

impl CountField {
    /// Create a zeroed field
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0; rows * cols],
            rows,
            cols,
        }
    }

    /// Get reference to the counts
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Get mutable reference to the counts
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Count at a grid position
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` lies outside the field.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        assert!(row < self.rows && col < self.cols);
        self.data[row * self.cols + col]
    }

    /// Counts of a single row
    pub fn row(&self, row: usize) -> &[u8] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }
}
