//! Two-state transition rules
//!
//! A rule maps a cell's current state and its [`NeighborhoodSummary`] to the
//! next state. Rules are pure: the engine evaluates every cell against the
//! same pre-step generation, possibly from several threads at once.
//!
//! Any `Fn(LifeState, NeighborhoodSummary) -> LifeState + Send + Sync`
//! closure is a rule, so ad-hoc automata need no new type.

mod life;
mod variants;

pub use life::{LifeLikeRule, LifeRule};
pub use variants::{DensityRule, ExactlyOneRule, ToggleRule};

use crate::core_types::LifeState;
use crate::neighborhood::NeighborhoodSummary;

/// Pure per-cell transition function
pub trait CellRule: Send + Sync {
    /// Next state of a cell given its pre-step neighbourhood
    fn apply(&self, state: LifeState, summary: NeighborhoodSummary) -> LifeState;
}

impl<F> CellRule for F
where
    F: Fn(LifeState, NeighborhoodSummary) -> LifeState + Send + Sync,
{
    #[inline]
    fn apply(&self, state: LifeState, summary: NeighborhoodSummary) -> LifeState {
        self(state, summary)
    }
}
