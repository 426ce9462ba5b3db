//! Conway's rule and its B/S generalisation

use super::CellRule;
use crate::core_types::LifeState;
use crate::error::{SimError, SimResult};
use crate::neighborhood::NeighborhoodSummary;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Conway's Game of Life (B3/S23)
///
/// - Alive with fewer than 2 alive neighbours dies
/// - Alive with more than 3 alive neighbours dies
/// - Dead with exactly 3 alive neighbours is born
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LifeRule;

impl CellRule for LifeRule {
    #[inline]
    fn apply(&self, state: LifeState, summary: NeighborhoodSummary) -> LifeState {
        match (state, summary.alive) {
            (LifeState::Alive, 2 | 3) | (LifeState::Dead, 3) => LifeState::Alive,
            _ => LifeState::Dead,
        }
    }
}

/// Outer-totalistic rule given as birth and survival neighbour counts.
///
/// Bit `n` of each mask is set when `n` alive neighbours trigger the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LifeLikeRule {
    birth: u16,
    survive: u16,
}

const MAX_NEIGHBORS: u8 = 8;

fn bitmask(name: &'static str, counts: &[u8]) -> SimResult<u16> {
    counts.iter().try_fold(0_u16, |mask, &n| {
        if n > MAX_NEIGHBORS {
            return Err(SimError::InvalidParameter {
                name,
                value: n.to_string(),
                reason: "neighbour counts range over 0..=8",
            });
        }
        Ok(mask | (1 << n))
    })
}

impl LifeLikeRule {
    /// # Errors
    ///
    /// Returns [`SimError::InvalidParameter`] if any count exceeds 8.
    pub fn new(birth: &[u8], survive: &[u8]) -> SimResult<Self> {
        Ok(Self {
            birth: bitmask("birth", birth)?,
            survive: bitmask("survive", survive)?,
        })
    }

    /// Parse `B<digits>/S<digits>` notation, e.g. `"B36/S23"`.
    ///
    /// The two parts may come in either order and either case.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidParameter`] for anything else.
    pub fn parse(notation: &str) -> SimResult<Self> {
        let invalid = || SimError::InvalidParameter {
            name: "rule",
            value: notation.to_string(),
            reason: "expected B/S notation such as B3/S23",
        };

        let mut birth = None;
        let mut survive = None;
        for part in notation.trim().split('/') {
            let mut chars = part.chars();
            let slot = match chars.next().map(|c| c.to_ascii_uppercase()) {
                Some('B') => &mut birth,
                Some('S') => &mut survive,
                _ => return Err(invalid()),
            };
            if slot.is_some() {
                return Err(invalid());
            }
            let counts = chars
                .map(|c| match c.to_digit(10) {
                    Some(d) if d <= u32::from(MAX_NEIGHBORS) => Ok(d as u8),
                    _ => Err(invalid()),
                })
                .collect::<SimResult<Vec<u8>>>()?;
            *slot = Some(counts);
        }

        match (birth, survive) {
            (Some(birth), Some(survive)) => Self::new(&birth, &survive),
            _ => Err(invalid()),
        }
    }

    /// B3/S23
    pub fn conway() -> Self {
        Self {
            birth: 1 << 3,
            survive: (1 << 2) | (1 << 3),
        }
    }

    /// B36/S23
    pub fn highlife() -> Self {
        Self {
            birth: (1 << 3) | (1 << 6),
            ..Self::conway()
        }
    }

    /// B2/S
    pub fn seeds() -> Self {
        Self {
            birth: 1 << 2,
            survive: 0,
        }
    }

    /// B3678/S34678
    pub fn day_and_night() -> Self {
        Self {
            birth: (1 << 3) | (1 << 6) | (1 << 7) | (1 << 8),
            survive: (1 << 3) | (1 << 4) | (1 << 6) | (1 << 7) | (1 << 8),
        }
    }

    /// Whether a dead cell with `alive` neighbours is born
    pub fn births_on(&self, alive: u8) -> bool {
        alive <= MAX_NEIGHBORS && (self.birth & (1 << alive)) != 0
    }

    /// Whether an alive cell with `alive` neighbours survives
    pub fn survives_on(&self, alive: u8) -> bool {
        alive <= MAX_NEIGHBORS && (self.survive & (1 << alive)) != 0
    }

    /// Canonical `B…/S…` notation
    pub fn notation(&self) -> String {
        let digits = |mask: u16| -> String {
            (0..=MAX_NEIGHBORS)
                .filter(|&n| (mask & (1 << n)) != 0)
                .map(|n| char::from(b'0' + n))
                .collect()
        };
        format!("B{}/S{}", digits(self.birth), digits(self.survive))
    }
}

impl Default for LifeLikeRule {
    fn default() -> Self {
        Self::conway()
    }
}

impl fmt::Display for LifeLikeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation())
    }
}

impl CellRule for LifeLikeRule {
    #[inline]
    fn apply(&self, state: LifeState, summary: NeighborhoodSummary) -> LifeState {
        let next = match state {
            LifeState::Alive => self.survives_on(summary.alive),
            LifeState::Dead => self.births_on(summary.alive),
        };
        LifeState::from(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(alive: u8) -> NeighborhoodSummary {
        NeighborhoodSummary::new(alive, 8)
    }

    #[test]
    fn test_life_rule_table() {
        let rule = LifeRule;
        for alive in 0..=8 {
            let survives = rule.apply(LifeState::Alive, summary(alive));
            let born = rule.apply(LifeState::Dead, summary(alive));
            assert_eq!(
                survives.is_alive(),
                alive == 2 || alive == 3,
                "survive {}",
                alive
            );
            assert_eq!(born.is_alive(), alive == 3, "birth {}", alive);
        }
    }

    #[test]
    fn test_conway_preset_matches_life_rule() {
        let preset = LifeLikeRule::conway();
        for alive in 0..=8 {
            for state in [LifeState::Alive, LifeState::Dead] {
                assert_eq!(
                    preset.apply(state, summary(alive)),
                    LifeRule.apply(state, summary(alive))
                );
            }
        }
    }

    #[test]
    fn test_parse_and_notation() {
        assert_eq!(LifeLikeRule::parse("B3/S23"), Ok(LifeLikeRule::conway()));
        assert_eq!(LifeLikeRule::parse("s23/b36"), Ok(LifeLikeRule::highlife()));
        assert_eq!(LifeLikeRule::parse("B2/S"), Ok(LifeLikeRule::seeds()));
        assert_eq!(LifeLikeRule::day_and_night().notation(), "B3678/S34678");
        assert_eq!(LifeLikeRule::seeds().to_string(), "B2/S");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "B3", "B3/S23/S1", "B9/S23", "X3/S23", "B3/B4", "B3a/S2"] {
            assert!(
                matches!(
                    LifeLikeRule::parse(bad),
                    Err(SimError::InvalidParameter { name: "rule", .. })
                ),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_new_rejects_large_counts() {
        assert!(LifeLikeRule::new(&[3], &[2, 9]).is_err());
        assert_eq!(LifeLikeRule::new(&[3], &[2, 3]), Ok(LifeLikeRule::conway()));
    }
}
