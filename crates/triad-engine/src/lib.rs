//! Turn engine for the Triad narrative RPG.
//!
//! Composes the mechanics crate into per-turn resolution: session state
//! with an absorbing death transition, a turn orchestrator, collaborator
//! ports for the interpreter and narrator model roles, and a game driver
//! that wires them together with a seeded d10.

pub mod config;
pub mod error;
pub mod game;
pub mod outcome;
pub mod ports;
pub mod session;
pub mod turn;

pub use config::GameConfig;
pub use error::{
    CollaboratorError, EngineError, EngineResult, GameError, GameResult, StateError,
};
pub use game::{Game, TurnReport};
pub use outcome::{TurnMode, TurnOutcome};
pub use ports::{Interpreter, Narrator};
pub use session::{Session, SessionStatus};
pub use turn::{FORCED_DIFFICULTY, resolve_fiat_turn, resolve_forced_turn, resolve_turn};
