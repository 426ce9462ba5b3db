//! Simulation engines
//!
//! - [`AutomatonEngine`]: any [`crate::rules::CellRule`] over a 2D grid
//! - [`LineAutomaton`]: the same rules over a single row with fixed ends
//! - [`ForestFireEngine`]: Empty / Tree / Burning with stochastic growth,
//!   ignition, wind and burn timers
//!
//! All engines share the [`Simulation`] interface a renderer or controller
//! drives: step, read the current generation, reset between steps.

mod automaton;
mod forest_fire;
mod line;
mod params;

pub use automaton::AutomatonEngine;
pub use forest_fire::{ForestCensus, ForestFireEngine};
pub use line::LineAutomaton;
pub use params::{GrowthStrategy, SimulationParameters};

use crate::core_types::CellState;
use crate::error::SimResult;
use crate::grid::{Grid, Initializer};

/// Stepping interface shared by every engine.
///
/// `step` is not reentrant: it computes and commits a whole generation before
/// returning, so readers only ever see completed generations.
pub trait Simulation {
    /// Per-cell state exposed to readers
    type Cell: CellState;

    /// Advance one generation
    fn step(&mut self);

    /// The most recently completed generation
    fn current_state(&self) -> &Grid<Self::Cell>;

    /// Reinitialize at `rows × cols` with `initializer`, restarting the
    /// generation counter.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SimError::InvalidDimension`] or
    /// [`crate::SimError::DimensionMismatch`] (or the initializer's parameter
    /// error). On failure the engine keeps its previous state.
    fn reset(&mut self, rows: usize, cols: usize, initializer: Initializer<Self::Cell>)
        -> SimResult<()>;

    /// Steps completed since construction or the last reset
    fn generation(&self) -> u64;

    /// Advance `steps` generations
    fn run(&mut self, steps: usize) {
        for _ in 0..steps {
            self.step();
        }
    }
}
