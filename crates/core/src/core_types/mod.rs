//! Core types: cell states and random sources

pub mod cell;
pub mod random;

pub use cell::{CellState, ForestState, LifeState};
pub use random::{RandomSource, RngSource, SeededSource, SequenceSource};
