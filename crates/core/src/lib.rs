//! Cellular automaton and forest-fire simulation core
//!
//! Discrete-time, discrete-state simulations on a 2D grid:
//!
//! - A generalized Life-like automaton whose transition rule is pluggable
//! - A stochastic forest-fire model with regrowth, spontaneous and ember-jump
//!   ignition, eastward wind bias and multi-step burning
//!
//! Engines own their grid and random stream, advance one generation per
//! [`Simulation::step`], and expose the completed generation for rendering.
//! A fixed seed reproduces a run exactly, whether cells are evaluated
//! serially or across the Rayon thread pool.
//!
//! ```rust
//! use cellfire_core::{
//!     ForestFireEngine, GridConfig, Initializer, Simulation, SimulationParameters,
//! };
//!
//! let mut engine = ForestFireEngine::seeded(
//!     GridConfig::new(32, 32),
//!     SimulationParameters::windy(2),
//!     Initializer::Random { probability: 0.55 },
//!     7,
//! )?;
//! engine.ignite(16, 0)?;
//! engine.run(10);
//! assert_eq!(engine.census().total(), 32 * 32);
//! assert_eq!(engine.current_state().dimensions(), (32, 32));
//! # Ok::<(), cellfire_core::SimError>(())
//! ```

pub mod core_types;
pub mod error;
pub mod execution;
pub mod grid;
pub mod neighborhood;
pub mod rules;
pub mod simulation;

// Re-export core types
pub use core_types::{
    CellState, ForestState, LifeState, RandomSource, RngSource, SeededSource, SequenceSource,
};
pub use error::{SimError, SimResult};
pub use execution::Execution;

// Re-export grid and counting types
pub use grid::{BoundaryMode, Grid, GridConfig, Initializer, NeighborhoodView};
pub use neighborhood::{
    create_counter, CountingStrategy, FireNeighborhood, NeighborCounter, NeighborhoodSummary,
};

// Re-export rules and engines
pub use rules::{CellRule, DensityRule, ExactlyOneRule, LifeLikeRule, LifeRule, ToggleRule};
pub use simulation::{
    AutomatonEngine, ForestCensus, ForestFireEngine, GrowthStrategy, LineAutomaton, Simulation,
    SimulationParameters,
};
