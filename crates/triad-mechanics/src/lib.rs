//! Core mechanics for the Triad narrative RPG engine.
//!
//! Provides the three-stat character model (Mind/Body/Spirit, point-buy),
//! the validation gate for interpreter judgments, the d10, and the pure
//! margin resolution law (`die + stat - difficulty > 5`).

pub mod dice;
pub mod error;
pub mod judgment;
pub mod resolution;
pub mod stat;

pub use dice::{D10_SIDES, roll_d10};
pub use error::{CreationError, CreationResult, ValidationError, ValidationResult};
pub use judgment::{DIFFICULTY_MAX, DIFFICULTY_MIN, Judgment, RawJudgment, validate};
pub use resolution::{RollResult, SUCCESS_THRESHOLD, resolve, success_chance};
pub use stat::{Character, POINT_BUDGET, STAT_MAX, STAT_MIN, Stat};
