//! Tunable forest-fire parameters
//!
//! The engine holds its own copy; a controller replaces it wholesale through
//! `configure`, which validates before touching anything.

use crate::error::{check_probability, SimError, SimResult};
use crate::neighborhood::FireNeighborhood;
use serde::{Deserialize, Serialize};

/// Regrowth policy for empty cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GrowthStrategy {
    /// `growth_prob × trees / 8`: forests spread from their edges
    #[default]
    NeighborDensity,
    /// Flat `growth_prob` regardless of neighbours
    Constant,
}

/// Forest-fire model parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Regrowth probability for an empty cell (scaled by the growth strategy)
    pub growth_prob: f64,
    /// Spontaneous (lightning) ignition probability per tree
    pub fire_prob: f64,
    /// Ember-jump ignition probability for a tree with any tree neighbour
    pub fire_jump_prob: f64,
    /// Eastward wind reach in columns; 0 disables wind ignition
    pub wind_speed: usize,
    /// Steps a cell stays burning once ignited (≥ 1)
    pub burn_duration: u32,
    /// Regrowth policy
    pub growth: GrowthStrategy,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            growth_prob: 0.05,
            fire_prob: 0.0001,
            fire_jump_prob: 0.0005,
            wind_speed: 0,
            burn_duration: 3,
            growth: GrowthStrategy::NeighborDensity,
        }
    }
}

impl SimulationParameters {
    /// Single-step burns, flat regrowth and no ember jumps
    pub fn classic() -> Self {
        Self {
            fire_jump_prob: 0.0,
            burn_duration: 1,
            growth: GrowthStrategy::Constant,
            ..Self::default()
        }
    }

    /// No ignition sources at all; fire only spreads from cells set burning by hand
    pub fn calm() -> Self {
        Self {
            fire_prob: 0.0,
            fire_jump_prob: 0.0,
            ..Self::default()
        }
    }

    /// Defaults with an eastward wind of `speed` columns
    pub fn windy(speed: usize) -> Self {
        Self {
            wind_speed: speed,
            ..Self::default()
        }
    }

    /// # Errors
    ///
    /// Returns [`SimError::InvalidParameter`] if a probability is NaN or
    /// outside `[0, 1]`, or if `burn_duration` is 0.
    pub fn validate(&self) -> SimResult<()> {
        check_probability("growth_prob", self.growth_prob)?;
        check_probability("fire_prob", self.fire_prob)?;
        check_probability("fire_jump_prob", self.fire_jump_prob)?;
        if self.burn_duration < 1 {
            return Err(SimError::InvalidParameter {
                name: "burn_duration",
                value: self.burn_duration.to_string(),
                reason: "a burning cell must burn for at least one step",
            });
        }
        Ok(())
    }

    /// Probability that an empty cell with this neighbourhood grows a tree
    pub fn growth_chance(&self, hood: &FireNeighborhood) -> f64 {
        match self.growth {
            GrowthStrategy::NeighborDensity => self.growth_prob * hood.tree_density(),
            GrowthStrategy::Constant => self.growth_prob,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for params in [
            SimulationParameters::default(),
            SimulationParameters::classic(),
            SimulationParameters::calm(),
            SimulationParameters::windy(4),
        ] {
            assert!(params.validate().is_ok(), "{:?}", params);
        }
        assert_eq!(SimulationParameters::windy(4).wind_speed, 4);
        assert_eq!(SimulationParameters::classic().burn_duration, 1);
    }

    #[test]
    fn test_validation_errors() {
        let cases = [
            (
                SimulationParameters {
                    growth_prob: -0.1,
                    ..SimulationParameters::default()
                },
                "growth_prob",
            ),
            (
                SimulationParameters {
                    fire_prob: 1.5,
                    ..SimulationParameters::default()
                },
                "fire_prob",
            ),
            (
                SimulationParameters {
                    fire_jump_prob: f64::NAN,
                    ..SimulationParameters::default()
                },
                "fire_jump_prob",
            ),
            (
                SimulationParameters {
                    burn_duration: 0,
                    ..SimulationParameters::default()
                },
                "burn_duration",
            ),
        ];
        for (params, expected) in cases {
            match params.validate() {
                Err(SimError::InvalidParameter { name, .. }) => assert_eq!(name, expected),
                other => panic!("expected InvalidParameter for {}, got {:?}", expected, other),
            }
        }
    }

    #[test]
    fn test_growth_chance() {
        let hood = FireNeighborhood {
            trees: 2,
            ..FireNeighborhood::default()
        };
        let density = SimulationParameters {
            growth_prob: 0.4,
            ..SimulationParameters::default()
        };
        assert!((density.growth_chance(&hood) - 0.1).abs() < 1e-12);
        let constant = SimulationParameters {
            growth: GrowthStrategy::Constant,
            ..density
        };
        assert_eq!(constant.growth_chance(&hood), 0.4);
    }
}
