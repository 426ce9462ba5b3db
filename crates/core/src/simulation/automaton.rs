//! Two-state automaton engine over a 2D grid

use super::Simulation;
use crate::core_types::{LifeState, RandomSource, SeededSource};
use crate::error::SimResult;
use crate::execution::fill_rows;
use crate::grid::{Grid, GridConfig, Initializer};
use crate::neighborhood::{create_counter, NeighborCounter, NeighborhoodSummary};
use crate::rules::CellRule;
use tracing::{debug, info};

/// Applies a [`CellRule`] to every cell of a [`Grid<LifeState>`] once per step.
///
/// Every cell is evaluated against the same pre-step generation; the new
/// generation is written to a separate buffer and swapped in whole.
/// Stepping consumes no random draws; `rng` only feeds random initializers.
pub struct AutomatonEngine<R, G = SeededSource> {
    grid: Grid<LifeState>,
    rule: R,
    config: GridConfig,
    counter: Box<dyn NeighborCounter>,
    initializer: Initializer<LifeState>,
    rng: G,
    generation: u64,
}

impl<R: CellRule> AutomatonEngine<R, SeededSource> {
    /// Engine with a [`SeededSource`] built from `seed`
    ///
    /// # Errors
    ///
    /// See [`AutomatonEngine::new`].
    pub fn seeded(
        config: GridConfig,
        rule: R,
        initializer: Initializer<LifeState>,
        seed: u64,
    ) -> SimResult<Self> {
        Self::new(config, rule, initializer, SeededSource::seeded(seed))
    }
}

impl<R: CellRule, G: RandomSource> AutomatonEngine<R, G> {
    /// Create an engine and its first generation
    ///
    /// # Arguments
    ///
    /// * `config` - Grid shape, boundary, counting backend and execution mode
    /// * `rule` - Transition applied to every cell
    /// * `initializer` - Fills generation 0; reused by [`AutomatonEngine::resize`]
    /// * `rng` - Random stream for random initializers
    ///
    /// # Errors
    ///
    /// Returns [`crate::SimError::InvalidDimension`] for an empty grid, or the
    /// initializer's own validation error.
    pub fn new(
        config: GridConfig,
        rule: R,
        initializer: Initializer<LifeState>,
        mut rng: G,
    ) -> SimResult<Self> {
        config.validate()?;
        let grid = Grid::new(config.rows, config.cols, &initializer, &mut rng)?;
        let counter = create_counter(config.counting);

        info!(
            "Automaton initialized: {}x{} grid, boundary={:?}, execution={:?}, population={}",
            config.rows,
            config.cols,
            config.boundary,
            config.execution,
            grid.count(LifeState::Alive)
        );

        Ok(Self {
            grid,
            rule,
            config,
            counter,
            initializer,
            rng,
            generation: 0,
        })
    }

    /// Reinitialize at a new size with the most recent initializer
    ///
    /// # Errors
    ///
    /// Same as [`Simulation::reset`]; the grid is untouched on failure.
    pub fn resize(&mut self, rows: usize, cols: usize) -> SimResult<()> {
        self.reset(rows, cols, self.initializer.clone())
    }

    /// Overwrite one cell between steps
    ///
    /// # Errors
    ///
    /// Returns [`crate::SimError::OutOfRange`] outside the grid.
    pub fn set_cell(&mut self, row: usize, col: usize, state: LifeState) -> SimResult<()> {
        self.grid.set(row, col, state)
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.grid.count(LifeState::Alive)
    }

    /// Transition rule applied each step
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Grid configuration, with the current dimensions
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Initializer used by the last construction or reset
    pub fn initializer(&self) -> &Initializer<LifeState> {
        &self.initializer
    }
}

impl<R: CellRule, G: RandomSource> Simulation for AutomatonEngine<R, G> {
    type Cell = LifeState;

    fn step(&mut self) {
        let (rows, cols) = self.grid.dimensions();
        let GridConfig {
            boundary,
            execution,
            ..
        } = self.config;

        let alive = self.grid.mask(LifeState::is_alive);
        let counts = self.counter.count(&alive, rows, cols, boundary, execution);

        let current = self.grid.cells();
        let rule = &self.rule;
        let mut next = vec![LifeState::Dead; rows * cols];
        fill_rows(execution, &mut next, cols, |row, cells| {
            for (col, cell) in cells.iter_mut().enumerate() {
                let summary = NeighborhoodSummary::new(
                    counts.get(row, col),
                    boundary.neighbor_count(row, col, rows, cols),
                );
                *cell = rule.apply(current[row * cols + col], summary);
            }
        });

        self.grid.replace_cells(next);
        self.generation += 1;
        debug!(
            "Automaton generation {}: population={}",
            self.generation,
            self.population()
        );
    }

    fn current_state(&self) -> &Grid<LifeState> {
        &self.grid
    }

    fn reset(
        &mut self,
        rows: usize,
        cols: usize,
        initializer: Initializer<LifeState>,
    ) -> SimResult<()> {
        self.grid.resize(rows, cols, &initializer, &mut self.rng)?;
        self.config.rows = rows;
        self.config.cols = cols;
        self.initializer = initializer;
        self.generation = 0;
        info!(
            "Automaton reset: {}x{} grid, population={}",
            rows,
            cols,
            self.population()
        );
        Ok(())
    }

    fn generation(&self) -> u64 {
        self.generation
    }
}
