//! Error types for the mechanics crate.

use crate::stat::{POINT_BUDGET, STAT_MAX, STAT_MIN, Stat};

/// Result type for character creation.
pub type CreationResult<T> = Result<T, CreationError>;

/// Result type for judgment validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Errors raised by point-buy character creation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreationError {
    /// A stat was assigned a value outside the legal range.
    #[error("{stat} is {value}, must be between {STAT_MIN} and {STAT_MAX}")]
    OutOfRange {
        /// The offending stat.
        stat: Stat,
        /// The value it was given.
        value: u8,
    },

    /// The three stats do not sum to the point budget.
    #[error("stats total {total}, must total exactly {POINT_BUDGET}")]
    BudgetViolation {
        /// The sum the player actually spent.
        total: u8,
    },
}

/// Errors raised when an interpreter judgment fails validation.
///
/// These are recoverable at the application level: the caller can re-query
/// the interpreter with corrective context. The engine never retries on
/// its own.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The interpreter refused the action as impossible or out of character.
    #[error("action refused: {reason}")]
    ActionRefused {
        /// The interpreter's stated reason.
        reason: String,
    },

    /// The judgment names a stat that is not mind, body, or spirit.
    #[error("unknown stat: {0}")]
    UnknownStat(String),

    /// The judgment's difficulty is outside 1-5.
    #[error("difficulty {0} out of range 1-5")]
    DifficultyOutOfRange(i32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation_error_display() {
        let err = CreationError::OutOfRange {
            stat: Stat::Mind,
            value: 0,
        };
        assert_eq!(err.to_string(), "mind is 0, must be between 1 and 5");

        let err = CreationError::BudgetViolation { total: 12 };
        assert_eq!(err.to_string(), "stats total 12, must total exactly 9");
    }

    #[test]
    fn validation_error_display() {
        let err = ValidationError::UnknownStat("luck".to_string());
        assert_eq!(err.to_string(), "unknown stat: luck");

        let err = ValidationError::DifficultyOutOfRange(7);
        assert_eq!(err.to_string(), "difficulty 7 out of range 1-5");

        let err = ValidationError::ActionRefused {
            reason: "That's not possible.".to_string(),
        };
        assert_eq!(err.to_string(), "action refused: That's not possible.");
    }
}
