//! Grid initialization policies

use super::Grid;
use crate::core_types::{CellState, RandomSource};
use crate::error::{check_probability, SimError, SimResult};
use serde::{Deserialize, Serialize};

/// How a freshly (re)allocated grid is populated.
///
/// Random policies consume one draw per cell in row-major order
/// ([`Initializer::RandomInterior`] only draws for interior cells).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Initializer<S> {
    /// Each cell is [`CellState::populated`] with `probability`, otherwise default.
    Random {
        /// Bernoulli success probability in `[0, 1]`
        probability: f64,
    },
    /// Like `Random`, but the outer ring of cells is always left in the default state.
    RandomInterior {
        /// Bernoulli success probability in `[0, 1]`
        probability: f64,
    },
    /// Each cell picks one of the given states with probability proportional to its weight.
    Weighted(Vec<(S, f64)>),
    /// Every cell takes the same state.
    Filled(S),
    /// Explicit row-major state; must match the declared dimensions exactly.
    Explicit(Vec<Vec<S>>),
}

impl<S: CellState> Initializer<S> {
    /// Check that this initializer can produce a `rows × cols` grid.
    ///
    /// # Errors
    ///
    /// - [`SimError::InvalidDimension`] if either dimension is zero
    /// - [`SimError::InvalidParameter`] for a probability outside `[0, 1]` or unusable weights
    /// - [`SimError::DimensionMismatch`] if an explicit state has the wrong shape
    pub fn validate(&self, rows: usize, cols: usize) -> SimResult<()> {
        if rows == 0 || cols == 0 {
            return Err(SimError::InvalidDimension { rows, cols });
        }
        match self {
            Self::Random { probability } | Self::RandomInterior { probability } => {
                check_probability("probability", *probability)?;
            }
            Self::Weighted(choices) => validate_weights(choices)?,
            Self::Filled(_) => {}
            Self::Explicit(state) => {
                let bad_row = state.iter().find(|row| row.len() != cols);
                if state.len() != rows || bad_row.is_some() {
                    let found_cols = bad_row.or_else(|| state.first()).map_or(0, Vec::len);
                    return Err(SimError::DimensionMismatch {
                        expected_rows: rows,
                        expected_cols: cols,
                        found_rows: state.len(),
                        found_cols,
                    });
                }
            }
        }
        Ok(())
    }

    /// Build a `rows × cols` grid, validating before any draw is taken.
    pub(crate) fn build(
        &self,
        rows: usize,
        cols: usize,
        rng: &mut impl RandomSource,
    ) -> SimResult<Grid<S>> {
        self.validate(rows, cols)?;
        let cell_count = rows * cols;
        let cells = match self {
            Self::Random { probability } => (0..cell_count)
                .map(|_| bernoulli_state(&mut *rng, *probability))
                .collect(),
            Self::RandomInterior { probability } => {
                let mut cells = Vec::with_capacity(cell_count);
                for row in 0..rows {
                    for col in 0..cols {
                        let interior = row > 0 && row + 1 < rows && col > 0 && col + 1 < cols;
                        cells.push(if interior {
                            bernoulli_state(&mut *rng, *probability)
                        } else {
                            S::default()
                        });
                    }
                }
                cells
            }
            Self::Weighted(choices) => {
                let weights: Vec<f64> = choices.iter().map(|&(_, weight)| weight).collect();
                (0..cell_count)
                    .map(|_| choices[rng.weighted_index(&weights)].0)
                    .collect()
            }
            Self::Filled(state) => vec![*state; cell_count],
            Self::Explicit(state) => state.concat(),
        };
        Ok(Grid::from_cells(rows, cols, cells))
    }
}

fn bernoulli_state<S: CellState>(rng: &mut impl RandomSource, probability: f64) -> S {
    if rng.chance(probability) {
        S::populated()
    } else {
        S::default()
    }
}

fn validate_weights<S>(choices: &[(S, f64)]) -> SimResult<()> {
    if choices.is_empty() {
        return Err(SimError::InvalidParameter {
            name: "weights",
            value: "[]".to_string(),
            reason: "weighted initialization needs at least one state",
        });
    }
    if let Some(&(_, weight)) = choices
        .iter()
        .find(|(_, weight)| !weight.is_finite() || *weight < 0.0)
    {
        return Err(SimError::InvalidParameter {
            name: "weights",
            value: weight.to_string(),
            reason: "weights must be finite and non-negative",
        });
    }
    let total: f64 = choices.iter().map(|(_, weight)| weight).sum();
    if total <= 0.0 {
        return Err(SimError::InvalidParameter {
            name: "weights",
            value: total.to_string(),
            reason: "weights must have a positive sum",
        });
    }
    Ok(())
}
