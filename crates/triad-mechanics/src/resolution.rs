//! The d10 margin resolution law.
//!
//! A check rolls one d10 and succeeds when `die + stat - difficulty > 5`.
//! The strict inequality matters: a margin of exactly 5 is a failure,
//! which reproduces the published probability table (stat equal to
//! difficulty needs a 6 or higher). Two structural consequences follow:
//! even the worst spread (stat 1 vs difficulty 5) succeeds on a 10, and
//! even the best (stat 5 vs difficulty 1) fails on a 1. No action is
//! guaranteed, no action is impossible.

use serde::{Deserialize, Serialize};

use crate::dice::D10_SIDES;
use crate::judgment::Judgment;
use crate::stat::Character;

/// A check succeeds when its margin strictly exceeds this.
pub const SUCCESS_THRESHOLD: i32 = 5;

/// The fully-expanded result of one resolved check.
///
/// Ephemeral: created and consumed within a single turn, then archived
/// inside the turn's outcome record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    /// The raw d10 face, 1-10.
    pub die: u8,
    /// The character's value for the tested stat.
    pub stat_value: u8,
    /// The judged difficulty, 1-5.
    pub difficulty: u8,
    /// `die + stat_value - difficulty`.
    pub margin: i32,
    /// Whether the margin beat [`SUCCESS_THRESHOLD`].
    pub success: bool,
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "rolled {} + {} - {} = {} -> {}",
            self.die,
            self.stat_value,
            self.difficulty,
            self.margin,
            if self.success { "success" } else { "failure" }
        )
    }
}

/// Resolve a validated judgment against a character, given the rolled die.
///
/// Pure and deterministic: same inputs, same result. Assumes the judgment
/// already passed [`crate::judgment::validate`] and performs no defensive
/// checks of its own.
pub fn resolve(character: &Character, judgment: &Judgment, die: u8) -> RollResult {
    let stat_value = character.value(judgment.stat);
    let margin = i32::from(die) + i32::from(stat_value) - i32::from(judgment.difficulty);

    RollResult {
        die,
        stat_value,
        difficulty: judgment.difficulty,
        margin,
        success: margin > SUCCESS_THRESHOLD,
    }
}

/// Percent chance of success for a stat value against a difficulty.
///
/// Counts the d10 faces whose margin beats the threshold; each face is
/// worth 10%. Clamped to 10-90 by the law itself, never by this function.
pub fn success_chance(stat_value: u8, difficulty: u8) -> u32 {
    let winning_faces = (1..=D10_SIDES)
        .filter(|&die| {
            i32::from(die) + i32::from(stat_value) - i32::from(difficulty) > SUCCESS_THRESHOLD
        })
        .count() as u32;
    winning_faces * 10
}
