//! The three-attribute stat model and point-buy character creation.
//!
//! Every character is described by exactly three stats — Mind, Body, and
//! Spirit — each an integer from 1 to 5, bought from a budget of 9 points.
//! Stats are fixed at creation; there is no leveling.

use serde::{Deserialize, Serialize};

use crate::error::{CreationError, CreationResult};

/// Lowest legal value for any stat.
pub const STAT_MIN: u8 = 1;

/// Highest legal value for any stat.
pub const STAT_MAX: u8 = 5;

/// Total points distributed across the three stats at creation.
pub const POINT_BUDGET: u8 = 9;

/// One of the three character attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    /// Intelligence, perception, knowledge, cunning.
    Mind,
    /// Strength, agility, endurance, combat.
    Body,
    /// Willpower, charisma, luck, social influence.
    Spirit,
}

impl Stat {
    /// Parse a stat name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "mind" => Some(Self::Mind),
            "body" => Some(Self::Body),
            "spirit" => Some(Self::Spirit),
            _ => None,
        }
    }

    /// All three stats, in canonical order.
    pub fn all() -> [Self; 3] {
        [Self::Mind, Self::Body, Self::Spirit]
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mind => write!(f, "mind"),
            Self::Body => write!(f, "body"),
            Self::Spirit => write!(f, "spirit"),
        }
    }
}

/// A character's three stats, validated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    mind: u8,
    body: u8,
    spirit: u8,
}

impl Character {
    /// Create a character from a point-buy spread.
    ///
    /// Each stat must lie in [`STAT_MIN`]..=[`STAT_MAX`] and the three must
    /// sum to exactly [`POINT_BUDGET`]. Range is checked before the budget,
    /// so a spread like 0/5/4 reports the out-of-range stat rather than a
    /// budget problem.
    pub fn new(mind: u8, body: u8, spirit: u8) -> CreationResult<Self> {
        for (stat, value) in [(Stat::Mind, mind), (Stat::Body, body), (Stat::Spirit, spirit)] {
            if !(STAT_MIN..=STAT_MAX).contains(&value) {
                return Err(CreationError::OutOfRange { stat, value });
            }
        }

        let total = mind + body + spirit;
        if total != POINT_BUDGET {
            return Err(CreationError::BudgetViolation { total });
        }

        Ok(Self { mind, body, spirit })
    }

    /// The value of a single stat.
    pub fn value(&self, stat: Stat) -> u8 {
        match stat {
            Stat::Mind => self.mind,
            Stat::Body => self.body,
            Stat::Spirit => self.spirit,
        }
    }

    /// Mind score.
    pub fn mind(&self) -> u8 {
        self.mind
    }

    /// Body score.
    pub fn body(&self) -> u8 {
        self.body
    }

    /// Spirit score.
    pub fn spirit(&self) -> u8 {
        self.spirit
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Mind {} | Body {} | Spirit {}",
            self.mind, self.body, self.spirit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_parse_case_insensitive() {
        assert_eq!(Stat::parse("mind"), Some(Stat::Mind));
        assert_eq!(Stat::parse("BODY"), Some(Stat::Body));
        assert_eq!(Stat::parse("  Spirit "), Some(Stat::Spirit));
        assert_eq!(Stat::parse("luck"), None);
        assert_eq!(Stat::parse(""), None);
    }

    #[test]
    fn stat_display() {
        assert_eq!(Stat::Mind.to_string(), "mind");
        assert_eq!(Stat::Body.to_string(), "body");
        assert_eq!(Stat::Spirit.to_string(), "spirit");
    }

    #[test]
    fn all_in_canonical_order() {
        assert_eq!(Stat::all(), [Stat::Mind, Stat::Body, Stat::Spirit]);
    }

    #[test]
    fn stat_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Stat::Spirit).unwrap(), "\"spirit\"");
        let s: Stat = serde_json::from_str("\"body\"").unwrap();
        assert_eq!(s, Stat::Body);
    }

    #[test]
    fn create_valid_character() {
        let c = Character::new(3, 2, 4).unwrap();
        assert_eq!(c.mind(), 3);
        assert_eq!(c.body(), 2);
        assert_eq!(c.spirit(), 4);
        assert_eq!(c.value(Stat::Spirit), 4);
    }

    #[test]
    fn budget_violation() {
        let err = Character::new(4, 4, 4).unwrap_err();
        assert_eq!(err, CreationError::BudgetViolation { total: 12 });
    }

    #[test]
    fn out_of_range_low() {
        let err = Character::new(0, 5, 4).unwrap_err();
        assert_eq!(
            err,
            CreationError::OutOfRange {
                stat: Stat::Mind,
                value: 0
            }
        );
    }

    #[test]
    fn out_of_range_high() {
        let err = Character::new(1, 6, 2).unwrap_err();
        assert_eq!(
            err,
            CreationError::OutOfRange {
                stat: Stat::Body,
                value: 6
            }
        );
    }

    #[test]
    fn range_checked_before_budget() {
        // 0 + 5 + 4 sums to 9 but still fails on range
        let err = Character::new(0, 5, 4).unwrap_err();
        assert!(matches!(err, CreationError::OutOfRange { .. }));
    }

    #[test]
    fn all_legal_spreads_succeed() {
        let mut valid = 0;
        for mind in 0..=6u8 {
            for body in 0..=6u8 {
                for spirit in 0..=6u8 {
                    let in_range = [mind, body, spirit]
                        .iter()
                        .all(|v| (STAT_MIN..=STAT_MAX).contains(v));
                    let on_budget = mind + body + spirit == POINT_BUDGET;
                    let result = Character::new(mind, body, spirit);
                    if in_range && on_budget {
                        assert!(result.is_ok(), "{mind}/{body}/{spirit} should be legal");
                        valid += 1;
                    } else if !in_range {
                        assert!(matches!(result, Err(CreationError::OutOfRange { .. })));
                    } else {
                        assert!(matches!(
                            result,
                            Err(CreationError::BudgetViolation { .. })
                        ));
                    }
                }
            }
        }
        // Spreads of 9 points over three 1-5 stats
        assert_eq!(valid, 19);
    }

    #[test]
    fn character_display() {
        let c = Character::new(3, 2, 4).unwrap();
        assert_eq!(c.to_string(), "Mind 3 | Body 2 | Spirit 4");
    }
}
