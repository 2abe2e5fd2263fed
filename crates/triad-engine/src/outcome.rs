//! Turn outcome records.
//!
//! A [`TurnOutcome`] is the structured result of one resolved action. It
//! is handed to the narrator collaborator for prose and then archived into
//! the session history, read-only from the moment it is built. The
//! presentation layer serializes it into whatever prompt format the
//! narrator model expects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use triad_mechanics::{Judgment, RollResult};

/// How a turn was entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnMode {
    /// A regular interpreted action.
    #[default]
    Normal,
    /// The player overrode an interpreter refusal: spirit check at
    /// difficulty 5, non-lethal.
    Forced,
    /// God mode: spirit check at difficulty 1 with the die pinned to 10.
    Fiat,
}

/// The structured result of one resolved turn.
///
/// Invariants, guaranteed at construction: `success == roll.success`,
/// `lethal == judgment.lethal`, `fatal == (lethal && !success)`, and
/// `miraculous` only on a successful forced or fiat turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// The validated judgment this turn resolved.
    pub judgment: Judgment,
    /// The full roll breakdown.
    pub roll: RollResult,
    /// Whether the check succeeded.
    pub success: bool,
    /// Whether failure would have killed the character.
    pub lethal: bool,
    /// Whether this turn killed the character.
    pub fatal: bool,
    /// Whether an impossible action succeeded anyway (forced or fiat).
    pub miraculous: bool,
    /// How this turn was entered.
    pub mode: TurnMode,
    /// 1-based position of this turn in the session.
    pub turn_number: u32,
    /// When the turn was resolved.
    pub timestamp: DateTime<Utc>,
}

impl TurnOutcome {
    /// Build an outcome from a resolved roll.
    pub fn new(judgment: Judgment, roll: RollResult, mode: TurnMode, turn_number: u32) -> Self {
        let success = roll.success;
        let lethal = judgment.lethal;
        Self {
            judgment,
            roll,
            success,
            lethal,
            fatal: lethal && !success,
            miraculous: mode != TurnMode::Normal && success,
            mode,
            turn_number,
            timestamp: Utc::now(),
        }
    }
}
