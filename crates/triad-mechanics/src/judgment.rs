//! Interpreter judgments and the validation gate.
//!
//! The interpreter collaborator decides which stat an action tests, how
//! hard it is, and whether failure kills. Its output arrives as a decoded
//! JSON payload of unknown quality ([`RawJudgment`]) and must pass through
//! [`validate`] before anything downstream touches it. Validation is the
//! sole defense against malformed or adversarial interpreter output; the
//! resolution law performs no further checks.

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};
use crate::stat::Stat;

/// Lowest legal difficulty.
pub const DIFFICULTY_MIN: u8 = 1;

/// Highest legal difficulty.
pub const DIFFICULTY_MAX: u8 = 5;

/// Refusal reason used when the interpreter marks an action invalid
/// without saying why.
pub const DEFAULT_REFUSAL: &str = "That's not possible.";

/// Untrusted interpreter output, as decoded from a model response.
///
/// A minimal payload like `{"stat":"body","difficulty":3}` decodes with
/// `valid` true and `lethal` false. The interpreter's documented policy is
/// "when in doubt, mark non-lethal", so a missing lethal flag is an
/// explicit non-lethal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawJudgment {
    /// Whether the interpreter considers the action attemptable at all.
    #[serde(default = "default_valid")]
    pub valid: bool,
    /// Name of the stat the action tests.
    #[serde(default)]
    pub stat: String,
    /// Difficulty rating, nominally 1-5.
    #[serde(default)]
    pub difficulty: i32,
    /// Whether failure kills the character.
    #[serde(default)]
    pub lethal: bool,
    /// Refusal reason, present when `valid` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

fn default_valid() -> bool {
    true
}

impl RawJudgment {
    /// A well-formed judgment, as the interpreter would produce for a
    /// routine action.
    pub fn new(stat: &str, difficulty: i32, lethal: bool) -> Self {
        Self {
            valid: true,
            stat: stat.to_string(),
            difficulty,
            lethal,
            reason: None,
        }
    }

    /// A refusal, as the interpreter produces for impossible actions.
    pub fn refused(reason: &str) -> Self {
        Self {
            valid: false,
            stat: String::new(),
            difficulty: 0,
            lethal: false,
            reason: Some(reason.to_string()),
        }
    }
}

/// A validated, canonicalized judgment. Everything downstream trusts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Judgment {
    /// The stat the action tests.
    pub stat: Stat,
    /// Difficulty in 1-5.
    pub difficulty: u8,
    /// Whether failure kills the character.
    pub lethal: bool,
}

impl Judgment {
    /// Build a judgment from already-trusted parts.
    pub fn new(stat: Stat, difficulty: u8, lethal: bool) -> Self {
        Self {
            stat,
            difficulty,
            lethal,
        }
    }
}

/// Validate a raw interpreter judgment.
///
/// Checks refusal first, then the stat name (case-insensitive, canonical
/// enum on output), then the difficulty range. An invalid judgment must
/// never resolve as if valid.
pub fn validate(raw: &RawJudgment) -> ValidationResult<Judgment> {
    if !raw.valid {
        let reason = raw
            .reason
            .clone()
            .unwrap_or_else(|| DEFAULT_REFUSAL.to_string());
        return Err(ValidationError::ActionRefused { reason });
    }

    let stat =
        Stat::parse(&raw.stat).ok_or_else(|| ValidationError::UnknownStat(raw.stat.clone()))?;

    if raw.difficulty < i32::from(DIFFICULTY_MIN) || raw.difficulty > i32::from(DIFFICULTY_MAX) {
        return Err(ValidationError::DifficultyOutOfRange(raw.difficulty));
    }

    Ok(Judgment {
        stat,
        difficulty: raw.difficulty as u8,
        lethal: raw.lethal,
    })
}
