//! The game driver: one character, one session, two collaborators.
//!
//! `Game` wires the collaborator ports to the turn orchestrator and owns
//! the rolling narrative context. It is the in-process equivalent of the
//! surrounding application's per-player loop: strictly one turn at a time
//! (enforced by `&mut self`), with independent games sharing nothing.

use rand::SeedableRng;
use rand::rngs::StdRng;

use triad_mechanics::{Character, ValidationError, roll_d10};

use crate::config::GameConfig;
use crate::error::{EngineError, GameError, GameResult};
use crate::outcome::TurnOutcome;
use crate::ports::{Interpreter, Narrator};
use crate::session::Session;
use crate::turn::{resolve_fiat_turn, resolve_forced_turn, resolve_turn};

/// A resolved turn together with its narration.
#[derive(Debug, Clone)]
pub struct TurnReport {
    /// The structured outcome.
    pub outcome: TurnOutcome,
    /// The narrator's prose for it.
    pub narrative: String,
}

/// A running game: session, collaborators, dice, and narrative context.
pub struct Game<I: Interpreter, N: Narrator> {
    session: Session,
    interpreter: I,
    narrator: N,
    rng: StdRng,
    concept: String,
    context: String,
    last_refused: Option<String>,
}

impl<I: Interpreter, N: Narrator> Game<I, N> {
    /// Start a game: create the session and ask the narrator for the
    /// opening scene, which becomes the first context.
    pub fn new(
        concept: &str,
        character: Character,
        interpreter: I,
        mut narrator: N,
        config: GameConfig,
    ) -> GameResult<Self> {
        let context = narrator.open_scene(&character, concept)?;
        Ok(Self {
            session: Session::new(character),
            interpreter,
            narrator,
            rng: StdRng::seed_from_u64(config.seed),
            concept: concept.to_string(),
            context,
            last_refused: None,
        })
    }

    /// The session, for inspection.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The character concept the game was started with.
    pub fn concept(&self) -> &str {
        &self.concept
    }

    /// The current narrative context (most recent prose).
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Whether a refused action is pending for [`Game::force`].
    pub fn can_force(&self) -> bool {
        self.last_refused.is_some()
    }

    /// Take one normal turn: interpret the action, roll, resolve, narrate.
    ///
    /// An interpreter refusal surfaces as [`GameError::ActionRefused`]
    /// without consuming a turn; the action is remembered so the player
    /// can [`Game::force`] it.
    pub fn act(&mut self, action: &str) -> GameResult<TurnReport> {
        if !self.session.is_alive() {
            return Err(EngineError::SessionTerminated.into());
        }

        let raw = self.interpreter.judge(action, &self.context)?;
        let die = roll_d10(&mut self.rng);
        match resolve_turn(&mut self.session, &raw, die) {
            Ok(outcome) => self.narrate(action, outcome),
            Err(EngineError::InvalidJudgment(ValidationError::ActionRefused { reason })) => {
                self.last_refused = Some(action.to_string());
                Err(GameError::ActionRefused { reason })
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Re-attempt the last refused action as a forced spirit check.
    pub fn force(&mut self) -> GameResult<TurnReport> {
        let action = self.last_refused.take().ok_or(GameError::NothingToForce)?;
        let die = roll_d10(&mut self.rng);
        let outcome = resolve_forced_turn(&mut self.session, die)?;
        self.narrate(&action, outcome)
    }

    /// Take a god-mode turn: guaranteed success, no interpreter involved.
    pub fn fiat(&mut self, action: &str) -> GameResult<TurnReport> {
        let outcome = resolve_fiat_turn(&mut self.session)?;
        self.narrate(action, outcome)
    }

    fn narrate(&mut self, action: &str, outcome: TurnOutcome) -> GameResult<TurnReport> {
        let narrative = self.narrator.narrate(&outcome, action, &self.context)?;
        self.context = narrative.clone();
        self.last_refused = None;
        Ok(TurnReport { outcome, narrative })
    }
}
