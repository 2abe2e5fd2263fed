//! Per-player session state.
//!
//! A session owns one character, an append-only turn history, a turn
//! counter, and an alive flag. It is mutated only through
//! [`Session::apply_turn`], once per turn, and only ever forward: the
//! counter increases, history grows, and termination is absorbing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use triad_mechanics::Character;

use crate::error::StateError;
use crate::outcome::TurnOutcome;

/// Whether the session is still accepting turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// The character lives; turns are accepted.
    Active,
    /// The character died. No further turns, ever.
    Terminated,
}

/// The persistent state of one player's game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    character: Character,
    history: Vec<TurnOutcome>,
    turn: u32,
    status: SessionStatus,
    started_at: DateTime<Utc>,
}

impl Session {
    /// Start a fresh session for a character: active, turn 0, no history.
    pub fn new(character: Character) -> Self {
        Self {
            character,
            history: Vec::new(),
            turn: 0,
            status: SessionStatus::Active,
            started_at: Utc::now(),
        }
    }

    /// The session's character.
    pub fn character(&self) -> &Character {
        &self.character
    }

    /// Current status.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Whether the character is still alive.
    pub fn is_alive(&self) -> bool {
        self.status == SessionStatus::Active
    }

    /// Number of turns resolved so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// All archived outcomes, in turn order.
    pub fn history(&self) -> &[TurnOutcome] {
        &self.history
    }

    /// The most recent outcome, if any turn has been resolved.
    pub fn last_outcome(&self) -> Option<&TurnOutcome> {
        self.history.last()
    }

    /// When the session was created.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Apply a resolved turn: increment the counter by exactly 1, append
    /// the outcome, and terminate the session if the outcome was fatal.
    ///
    /// The sole mutator of session state. A terminated session rejects the
    /// turn without touching counter or history.
    pub fn apply_turn(&mut self, outcome: TurnOutcome) -> Result<(), StateError> {
        if self.status == SessionStatus::Terminated {
            return Err(StateError::SessionTerminated);
        }

        self.turn += 1;
        let fatal = outcome.fatal;
        self.history.push(outcome);

        if fatal {
            self.status = SessionStatus::Terminated;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::TurnMode;
    use triad_mechanics::{Judgment, Stat, resolve};

    fn character() -> Character {
        Character::new(3, 2, 4).unwrap()
    }

    fn outcome(session: &Session, lethal: bool, die: u8) -> TurnOutcome {
        let judgment = Judgment::new(Stat::Body, 3, lethal);
        let roll = resolve(session.character(), &judgment, die);
        TurnOutcome::new(judgment, roll, TurnMode::Normal, session.turn() + 1)
    }

    #[test]
    fn fresh_session() {
        let s = Session::new(character());
        assert!(s.is_alive());
        assert_eq!(s.turn(), 0);
        assert!(s.history().is_empty());
        assert!(s.last_outcome().is_none());
    }

    #[test]
    fn non_fatal_turn_stays_active() {
        let mut s = Session::new(character());
        let o = outcome(&s, false, 4); // failure, non-lethal
        s.apply_turn(o).unwrap();
        assert!(s.is_alive());
        assert_eq!(s.turn(), 1);
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn lethal_failure_terminates() {
        let mut s = Session::new(character());
        let o = outcome(&s, true, 1); // margin 0, lethal failure
        assert!(o.fatal);
        s.apply_turn(o).unwrap();
        assert!(!s.is_alive());
        assert_eq!(s.status(), SessionStatus::Terminated);
        assert_eq!(s.turn(), 1);
    }

    #[test]
    fn lethal_success_stays_active() {
        let mut s = Session::new(character());
        let o = outcome(&s, true, 10); // margin 9, success
        assert!(!o.fatal);
        s.apply_turn(o).unwrap();
        assert!(s.is_alive());
    }

    #[test]
    fn terminated_is_absorbing() {
        let mut s = Session::new(character());
        s.apply_turn(outcome(&s, true, 1)).unwrap();
        assert!(!s.is_alive());

        let extra = outcome(&s, false, 10);
        let err = s.apply_turn(extra).unwrap_err();
        assert_eq!(err, StateError::SessionTerminated);
        // Counter and history untouched by the rejected turn
        assert_eq!(s.turn(), 1);
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn counter_is_monotonic() {
        let mut s = Session::new(character());
        for expected in 1..=5 {
            s.apply_turn(outcome(&s, false, 4)).unwrap();
            assert_eq!(s.turn(), expected);
        }
        assert_eq!(s.history().len(), 5);
    }

    #[test]
    fn history_preserves_turn_order() {
        let mut s = Session::new(character());
        s.apply_turn(outcome(&s, false, 4)).unwrap();
        s.apply_turn(outcome(&s, false, 10)).unwrap();
        let numbers: Vec<u32> = s.history().iter().map(|o| o.turn_number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(s.last_outcome().unwrap().turn_number, 2);
    }

    #[test]
    fn round_trip_serde() {
        let mut s = Session::new(character());
        s.apply_turn(outcome(&s, false, 4)).unwrap();
        let json = serde_json::to_string(&s).unwrap();
        let s2: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(s2.turn(), 1);
        assert!(s2.is_alive());
        assert_eq!(s2.character(), s.character());
    }
}
