//! Stochastic forest-fire engine
//!
//! Each step reads only the pre-step generation:
//!
//! 1. Tree and burning neighbour counts are computed once for the whole grid
//! 2. Random draws are taken serially in row-major order:
//!    empty cells take one (growth), trees take two (jump, then spontaneous),
//!    burning cells take none
//! 3. Every cell's transition is evaluated (serially or row-parallel) into a
//!    fresh buffer, which then replaces the grid and the burn timers
//!
//! Ignition sources compose additively. A tree ignites when any neighbour is
//! burning, when the cell `wind_speed` columns west is burning, when its jump
//! draw succeeds and it has a tree neighbour, or when its spontaneous draw
//! succeeds. Ignition is idempotent: the timer is set to `burn_duration` once.

use super::{Simulation, SimulationParameters};
use crate::core_types::{ForestState, RandomSource, SeededSource};
use crate::error::SimResult;
use crate::execution::fill_rows;
use crate::grid::{Grid, GridConfig, Initializer};
use crate::neighborhood::{create_counter, FireNeighborhood, NeighborCounter};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// Cell counts per state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ForestCensus {
    /// Bare cells
    pub empty: usize,
    /// Unburned trees
    pub trees: usize,
    /// Cells on fire
    pub burning: usize,
}

impl ForestCensus {
    /// Count the states of `grid`
    pub fn of(grid: &Grid<ForestState>) -> Self {
        grid.cells()
            .iter()
            .fold(Self::default(), |mut census, state| {
                match state {
                    ForestState::Empty => census.empty += 1,
                    ForestState::Tree => census.trees += 1,
                    ForestState::Burning => census.burning += 1,
                }
                census
            })
    }

    /// Total cell count
    pub fn total(&self) -> usize {
        self.empty + self.trees + self.burning
    }
}

impl fmt::Display for ForestCensus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "empty={} trees={} burning={}",
            self.empty, self.trees, self.burning
        )
    }
}

/// Uniform draws reserved for one cell before the transition pass
#[derive(Debug, Clone, Copy, Default)]
struct CellDraws {
    growth: f64,
    jump: f64,
    spontaneous: f64,
}

/// Forest-fire automaton with Empty / Tree / Burning cells and burn timers.
///
/// Burn timers are internal: `burn_timer[i] > 0` exactly when cell `i` is
/// burning, and a burning cell becomes empty on the step its timer runs out.
pub struct ForestFireEngine<G = SeededSource> {
    grid: Grid<ForestState>,
    burn_timer: Vec<u32>,
    params: SimulationParameters,
    config: GridConfig,
    counter: Box<dyn NeighborCounter>,
    initializer: Initializer<ForestState>,
    rng: G,
    generation: u64,
}

impl ForestFireEngine<SeededSource> {
    /// Engine with a [`SeededSource`] built from `seed`
    ///
    /// # Errors
    ///
    /// See [`ForestFireEngine::new`].
    pub fn seeded(
        config: GridConfig,
        params: SimulationParameters,
        initializer: Initializer<ForestState>,
        seed: u64,
    ) -> SimResult<Self> {
        Self::new(config, params, initializer, SeededSource::seeded(seed))
    }
}

impl<G: RandomSource> ForestFireEngine<G> {
    /// Create a forest-fire engine and its first generation
    ///
    /// Cells that start out burning get a full `burn_duration` timer.
    ///
    /// # Arguments
    ///
    /// * `config` - Grid shape, boundary, counting backend and execution mode
    /// * `params` - Growth, ignition, wind and burn settings
    /// * `initializer` - Fills generation 0; reused by [`ForestFireEngine::resize`]
    /// * `rng` - Random stream for initialization and every stochastic decision
    ///
    /// # Errors
    ///
    /// Returns [`crate::SimError::InvalidParameter`] for invalid `params` and
    /// [`crate::SimError::InvalidDimension`] / the initializer's validation
    /// error for an invalid grid. Parameters are checked before any draw.
    pub fn new(
        config: GridConfig,
        params: SimulationParameters,
        initializer: Initializer<ForestState>,
        mut rng: G,
    ) -> SimResult<Self> {
        config.validate()?;
        params.validate()?;
        let grid = Grid::new(config.rows, config.cols, &initializer, &mut rng)?;
        let burn_timer = initial_timers(&grid, params.burn_duration);
        let counter = create_counter(config.counting);

        info!(
            "Forest fire initialized: {}x{} grid, boundary={:?}, execution={:?}, {}",
            config.rows,
            config.cols,
            config.boundary,
            config.execution,
            ForestCensus::of(&grid)
        );

        Ok(Self {
            grid,
            burn_timer,
            params,
            config,
            counter,
            initializer,
            rng,
            generation: 0,
        })
    }

    /// Replace the tunable parameters, effective from the next step.
    ///
    /// Cells already burning keep their remaining time.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SimError::InvalidParameter`] and keeps the previous
    /// parameters if `params` is invalid.
    pub fn configure(&mut self, params: SimulationParameters) -> SimResult<()> {
        params.validate()?;
        info!(
            "Forest fire reconfigured: growth={} fire={} jump={} wind={} burn={} {:?}",
            params.growth_prob,
            params.fire_prob,
            params.fire_jump_prob,
            params.wind_speed,
            params.burn_duration,
            params.growth
        );
        self.params = params;
        Ok(())
    }

    /// Active model parameters
    pub fn parameters(&self) -> &SimulationParameters {
        &self.params
    }

    /// Grid configuration, with the current dimensions
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Initializer used by the last construction or reset
    pub fn initializer(&self) -> &Initializer<ForestState> {
        &self.initializer
    }

    /// Reinitialize at a new size with the most recent initializer
    ///
    /// # Errors
    ///
    /// Same as [`Simulation::reset`]; nothing changes on failure.
    pub fn resize(&mut self, rows: usize, cols: usize) -> SimResult<()> {
        self.reset(rows, cols, self.initializer.clone())
    }

    /// Overwrite one cell between steps.
    ///
    /// Setting [`ForestState::Burning`] starts a full burn timer; any other
    /// state clears it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SimError::OutOfRange`] outside the grid.
    pub fn set_cell(&mut self, row: usize, col: usize, state: ForestState) -> SimResult<()> {
        self.grid.set(row, col, state)?;
        let index = row * self.grid.cols() + col;
        self.burn_timer[index] = if state.is_burning() {
            self.params.burn_duration
        } else {
            0
        };
        Ok(())
    }

    /// Set a cell on fire. A cell that is already burning is left as is.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SimError::OutOfRange`] outside the grid.
    pub fn ignite(&mut self, row: usize, col: usize) -> SimResult<()> {
        if self.grid.get(row, col)?.is_burning() {
            return Ok(());
        }
        self.set_cell(row, col, ForestState::Burning)
    }

    /// Cell counts per state
    pub fn census(&self) -> ForestCensus {
        ForestCensus::of(&self.grid)
    }

    #[cfg(test)]
    pub(crate) fn burn_timers(&self) -> &[u32] {
        &self.burn_timer
    }

    /// Take this step's draws in row-major order.
    fn take_draws(&mut self) -> Vec<CellDraws> {
        let rng = &mut self.rng;
        self.grid
            .cells()
            .iter()
            .map(|state| match state {
                ForestState::Empty => CellDraws {
                    growth: rng.next_unit(),
                    ..CellDraws::default()
                },
                ForestState::Tree => {
                    let jump = rng.next_unit();
                    let spontaneous = rng.next_unit();
                    CellDraws {
                        jump,
                        spontaneous,
                        ..CellDraws::default()
                    }
                }
                ForestState::Burning => CellDraws::default(),
            })
            .collect()
    }
}

fn initial_timers(grid: &Grid<ForestState>, burn_duration: u32) -> Vec<u32> {
    grid.cells()
        .iter()
        .map(|state| if state.is_burning() { burn_duration } else { 0 })
        .collect()
}

/// Next state and timer of one cell
fn transition(
    state: ForestState,
    timer: u32,
    hood: &FireNeighborhood,
    draws: CellDraws,
    params: &SimulationParameters,
) -> (ForestState, u32) {
    match state {
        ForestState::Empty => {
            if draws.growth < params.growth_chance(hood) {
                (ForestState::Tree, 0)
            } else {
                (ForestState::Empty, 0)
            }
        }
        ForestState::Tree => {
            let spread = hood.burning > 0 || hood.upwind_burning;
            let jump = hood.trees > 0 && draws.jump < params.fire_jump_prob;
            let lightning = draws.spontaneous < params.fire_prob;
            if spread || jump || lightning {
                (ForestState::Burning, params.burn_duration)
            } else {
                (ForestState::Tree, 0)
            }
        }
        ForestState::Burning => match timer.saturating_sub(1) {
            0 => (ForestState::Empty, 0),
            remaining => (ForestState::Burning, remaining),
        },
    }
}

impl<G: RandomSource> Simulation for ForestFireEngine<G> {
    type Cell = ForestState;

    fn step(&mut self) {
        let (rows, cols) = self.grid.dimensions();
        let GridConfig {
            boundary,
            execution,
            ..
        } = self.config;

        let trees = self.counter.count(
            &self.grid.mask(ForestState::is_tree),
            rows,
            cols,
            boundary,
            execution,
        );
        let burning = self.counter.count(
            &self.grid.mask(ForestState::is_burning),
            rows,
            cols,
            boundary,
            execution,
        );
        let draws = self.take_draws();

        let params = self.params;
        let current = self.grid.cells();
        let timers = &self.burn_timer;
        let mut next = vec![(ForestState::Empty, 0_u32); rows * cols];
        fill_rows(execution, &mut next, cols, |row, cells| {
            for (col, cell) in cells.iter_mut().enumerate() {
                let index = row * cols + col;
                let upwind_burning = params.wind_speed > 0
                    && boundary
                        .upwind_column(col, params.wind_speed, cols)
                        .is_some_and(|c| current[row * cols + c].is_burning());
                let hood = FireNeighborhood {
                    trees: trees.get(row, col),
                    burning: burning.get(row, col),
                    upwind_burning,
                };
                *cell = transition(current[index], timers[index], &hood, draws[index], &params);
            }
        });

        let (cells, timers): (Vec<ForestState>, Vec<u32>) = next.into_iter().unzip();
        self.grid.replace_cells(cells);
        self.burn_timer = timers;
        self.generation += 1;
        debug!(
            "Forest generation {}: {}",
            self.generation,
            self.census()
        );
    }

    fn current_state(&self) -> &Grid<ForestState> {
        &self.grid
    }

    fn reset(
        &mut self,
        rows: usize,
        cols: usize,
        initializer: Initializer<ForestState>,
    ) -> SimResult<()> {
        self.grid.resize(rows, cols, &initializer, &mut self.rng)?;
        self.burn_timer = initial_timers(&self.grid, self.params.burn_duration);
        self.config.rows = rows;
        self.config.cols = cols;
        self.initializer = initializer;
        self.generation = 0;
        info!("Forest fire reset: {}x{} grid, {}", rows, cols, self.census());
        Ok(())
    }

    fn generation(&self) -> u64 {
        self.generation
    }
}
