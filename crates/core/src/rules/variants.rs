//! Alternate automata driven by a single active-neighbour count

use super::CellRule;
use crate::core_types::LifeState;
use crate::neighborhood::NeighborhoodSummary;

/// Alive iff exactly one neighbour is alive, regardless of the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExactlyOneRule;

impl CellRule for ExactlyOneRule {
    fn apply(&self, _state: LifeState, summary: NeighborhoodSummary) -> LifeState {
        LifeState::from(summary.alive == 1)
    }
}

/// Flip the cell iff exactly one neighbour is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToggleRule;

impl CellRule for ToggleRule {
    fn apply(&self, state: LifeState, summary: NeighborhoodSummary) -> LifeState {
        if summary.alive == 1 {
            state.toggled()
        } else {
            state
        }
    }
}

/// Sparse-growth rule: alive survives with 1 or 2 alive neighbours, dead is
/// born with exactly 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DensityRule;

impl CellRule for DensityRule {
    fn apply(&self, state: LifeState, summary: NeighborhoodSummary) -> LifeState {
        let alive = match state {
            LifeState::Alive => matches!(summary.alive, 1 | 2),
            LifeState::Dead => summary.alive == 2,
        };
        LifeState::from(alive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LifeState::{Alive, Dead};

    fn run<R: CellRule>(rule: &R, state: LifeState) -> Vec<LifeState> {
        (0..=3)
            .map(|alive| rule.apply(state, NeighborhoodSummary::new(alive, 8)))
            .collect()
    }

    #[test]
    fn test_exactly_one() {
        assert_eq!(run(&ExactlyOneRule, Dead), vec![Dead, Alive, Dead, Dead]);
        assert_eq!(run(&ExactlyOneRule, Alive), vec![Dead, Alive, Dead, Dead]);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(run(&ToggleRule, Dead), vec![Dead, Alive, Dead, Dead]);
        assert_eq!(run(&ToggleRule, Alive), vec![Alive, Dead, Alive, Alive]);
    }

    #[test]
    fn test_density() {
        assert_eq!(run(&DensityRule, Dead), vec![Dead, Dead, Alive, Dead]);
        assert_eq!(run(&DensityRule, Alive), vec![Dead, Alive, Alive, Dead]);
    }
}
