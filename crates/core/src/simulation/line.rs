//! One-dimensional automaton with fixed end cells

use super::Simulation;
use crate::core_types::{LifeState, RandomSource, SeededSource};
use crate::error::{SimError, SimResult};
use crate::grid::{Grid, Initializer};
use crate::neighborhood::NeighborhoodSummary;
use crate::rules::CellRule;
use tracing::{debug, info};

/// Left and right neighbour of an interior cell
const LINE_NEIGHBORS: u8 = 2;

/// Automaton over a single row.
///
/// The first and last cells never change; every interior cell sees its left
/// and right neighbour. The line is stored as a `1 × width` [`Grid`] so it can
/// be rendered like any other generation.
pub struct LineAutomaton<R, G = SeededSource> {
    line: Grid<LifeState>,
    rule: R,
    initializer: Initializer<LifeState>,
    rng: G,
    generation: u64,
}

impl<R: CellRule, G: RandomSource> LineAutomaton<R, G> {
    /// # Errors
    ///
    /// Returns [`SimError::InvalidDimension`] for `width == 0`, or the
    /// initializer's validation error (an explicit state must be one row).
    pub fn new(
        width: usize,
        rule: R,
        initializer: Initializer<LifeState>,
        mut rng: G,
    ) -> SimResult<Self> {
        let line = Grid::new(1, width, &initializer, &mut rng)?;
        info!("Line automaton initialized: width={}", width);
        Ok(Self {
            line,
            rule,
            initializer,
            rng,
            generation: 0,
        })
    }

    /// Current cells, left to right
    pub fn cells(&self) -> &[LifeState] {
        self.line.cells()
    }

    /// Number of cells in the line
    pub fn width(&self) -> usize {
        self.line.cols()
    }

    /// Reinitialize at a new width with the most recent initializer
    ///
    /// # Errors
    ///
    /// Same as [`Simulation::reset`].
    pub fn resize(&mut self, width: usize) -> SimResult<()> {
        self.reset(1, width, self.initializer.clone())
    }

    /// Space-time diagram: the current line followed by the next `generations`.
    ///
    /// Advances the automaton by `generations` steps and returns
    /// `generations + 1` rows.
    pub fn history(&mut self, generations: usize) -> Vec<Vec<LifeState>> {
        let mut rows = Vec::with_capacity(generations + 1);
        rows.push(self.cells().to_vec());
        for _ in 0..generations {
            self.step();
            rows.push(self.cells().to_vec());
        }
        rows
    }
}

impl<R: CellRule, G: RandomSource> Simulation for LineAutomaton<R, G> {
    type Cell = LifeState;

    fn step(&mut self) {
        let cells = self.line.cells();
        let mut next = cells.to_vec();
        for (i, window) in cells.windows(3).enumerate() {
            let alive = u8::from(window[0].is_alive()) + u8::from(window[2].is_alive());
            next[i + 1] = self
                .rule
                .apply(window[1], NeighborhoodSummary::new(alive, LINE_NEIGHBORS));
        }
        self.line.replace_cells(next);
        self.generation += 1;
        debug!(
            "Line generation {}: population={}",
            self.generation,
            self.line.count(LifeState::Alive)
        );
    }

    fn current_state(&self) -> &Grid<LifeState> {
        &self.line
    }

    /// `rows` must be 1.
    fn reset(
        &mut self,
        rows: usize,
        cols: usize,
        initializer: Initializer<LifeState>,
    ) -> SimResult<()> {
        if rows != 1 {
            return Err(SimError::InvalidDimension { rows, cols });
        }
        self.line.resize(1, cols, &initializer, &mut self.rng)?;
        self.initializer = initializer;
        self.generation = 0;
        info!("Line automaton reset: width={}", cols);
        Ok(())
    }

    fn generation(&self) -> u64 {
        self.generation
    }
}
