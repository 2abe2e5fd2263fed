//! The turn orchestrator.
//!
//! One entry point per turn mode, each composing the same pipeline:
//! reject dead sessions, validate the judgment, resolve the roll, build
//! the outcome, apply it to the session. Validation failures are terminal
//! for the attempt and never touch session state; the caller decides
//! whether to re-query the interpreter. The orchestrator never retries.

use triad_mechanics::{D10_SIDES, Judgment, RawJudgment, Stat, resolve, validate};

use crate::error::{EngineError, EngineResult};
use crate::outcome::{TurnMode, TurnOutcome};
use crate::session::{Session, SessionStatus};

/// Difficulty of a forced attempt at a refused action.
pub const FORCED_DIFFICULTY: u8 = 5;

/// Resolve one normal turn against a session.
///
/// `die` is the rolled d10 face, injected by the caller so resolution
/// stays deterministic and testable.
pub fn resolve_turn(
    session: &mut Session,
    raw: &RawJudgment,
    die: u8,
) -> EngineResult<TurnOutcome> {
    if session.status() == SessionStatus::Terminated {
        return Err(EngineError::SessionTerminated);
    }
    let judgment = validate(raw)?;
    commit(session, judgment, die, TurnMode::Normal)
}

/// Resolve a forced turn: the player overrides an interpreter refusal.
///
/// The refused judgment is replaced wholesale by a spirit check at
/// difficulty [`FORCED_DIFFICULTY`], non-lethal. The die is still rolled
/// honestly, so forcing the impossible can fail.
pub fn resolve_forced_turn(session: &mut Session, die: u8) -> EngineResult<TurnOutcome> {
    if session.status() == SessionStatus::Terminated {
        return Err(EngineError::SessionTerminated);
    }
    let judgment = Judgment::new(Stat::Spirit, FORCED_DIFFICULTY, false);
    commit(session, judgment, die, TurnMode::Forced)
}

/// Resolve a fiat (god mode) turn: spirit check at difficulty 1 with the
/// die pinned to its highest face. Always succeeds.
pub fn resolve_fiat_turn(session: &mut Session) -> EngineResult<TurnOutcome> {
    if session.status() == SessionStatus::Terminated {
        return Err(EngineError::SessionTerminated);
    }
    let judgment = Judgment::new(Stat::Spirit, 1, false);
    commit(session, judgment, D10_SIDES, TurnMode::Fiat)
}

fn commit(
    session: &mut Session,
    judgment: Judgment,
    die: u8,
    mode: TurnMode,
) -> EngineResult<TurnOutcome> {
    let roll = resolve(session.character(), &judgment, die);
    let outcome = TurnOutcome::new(judgment, roll, mode, session.turn() + 1);
    session.apply_turn(outcome.clone())?;
    Ok(outcome)
}
