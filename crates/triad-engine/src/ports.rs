//! Collaborator ports for the two model roles.
//!
//! The engine never builds prompts or makes model calls. The interpreter
//! and narrator are reached through these traits; the application wires in
//! implementations that talk to whatever provider it likes, and tests wire
//! in scripted doubles.

use triad_mechanics::{Character, RawJudgment};

use crate::error::CollaboratorError;
use crate::outcome::TurnOutcome;

/// The Interpreter role: turns free-form player text into a judgment.
///
/// The returned judgment is untrusted and goes through validation before
/// anything else sees it.
pub trait Interpreter {
    /// Judge a player action in the current narrative context.
    fn judge(&mut self, action: &str, context: &str) -> Result<RawJudgment, CollaboratorError>;
}

/// The Narrator role: turns structured outcomes into prose.
pub trait Narrator {
    /// Write the opening scene for a freshly created character.
    fn open_scene(
        &mut self,
        character: &Character,
        concept: &str,
    ) -> Result<String, CollaboratorError>;

    /// Narrate a resolved turn. `context` is the prose the turn was taken
    /// in; the return value becomes the context for the next turn.
    fn narrate(
        &mut self,
        outcome: &TurnOutcome,
        action: &str,
        context: &str,
    ) -> Result<String, CollaboratorError>;
}
