//! Cell state types for the automaton and forest-fire engines

use serde::{Deserialize, Serialize};

/// A discrete per-cell state stored in a [`crate::grid::Grid`].
///
/// `Default` is the background state (dead / empty) used for cleared cells and
/// for the outer ring of [`crate::grid::Initializer::RandomInterior`].
/// [`CellState::populated`] is the state a Bernoulli success produces.
pub trait CellState: Copy + Eq + Default + Send + Sync + std::fmt::Debug {
    /// State produced by a successful Bernoulli draw during random initialization.
    fn populated() -> Self;
}

/// Binary state of a Life-like automaton cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LifeState {
    /// Dead cell (0)
    #[default]
    Dead = 0,
    /// Alive cell (1)
    Alive = 1,
}

impl LifeState {
    /// `true` for [`LifeState::Alive`]
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Self::Alive
    }

    /// The opposite state
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Self::Alive => Self::Dead,
            Self::Dead => Self::Alive,
        }
    }
}

impl From<bool> for LifeState {
    fn from(alive: bool) -> Self {
        if alive {
            Self::Alive
        } else {
            Self::Dead
        }
    }
}

impl CellState for LifeState {
    fn populated() -> Self {
        Self::Alive
    }
}

/// State of a forest-fire cell.
///
/// Burning cells carry an engine-internal burn timer; the timer is never part
/// of the public state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ForestState {
    /// Bare ground, may regrow a tree
    #[default]
    Empty = 0,
    /// Unburned tree
    Tree = 1,
    /// Tree on fire
    Burning = 2,
}

impl ForestState {
    /// `true` for [`ForestState::Tree`]
    #[inline]
    pub fn is_tree(self) -> bool {
        self == Self::Tree
    }

    /// `true` for [`ForestState::Burning`]
    #[inline]
    pub fn is_burning(self) -> bool {
        self == Self::Burning
    }
}

impl CellState for ForestState {
    fn populated() -> Self {
        Self::Tree
    }
}
