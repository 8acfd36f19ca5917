//! Error taxonomy for rejected operations.
//!
//! Every variant describes a recoverable rejection: the operation that
//! produced it left game state untouched, so the caller can correct the
//! input and retry.

use thiserror::Error;

use super::player::PlayerName;
use crate::controller::Phase;

/// Errors returned by the controller and the round resolver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A player with the same case-normalized name already exists.
    #[error("a player named {0} already exists")]
    DuplicateName(PlayerName),

    /// The name was empty after trimming.
    #[error("player name must not be blank")]
    EmptyName,

    /// The configured table size has already been reached.
    #[error("table is full ({capacity} players)")]
    TableFull { capacity: usize },

    /// Not enough players to start the game.
    #[error("need {required} players to start (have {actual})")]
    NotEnoughPlayers { required: usize, actual: usize },

    /// An active player has neither a number nor a joker for this round.
    #[error("{0} has not submitted a number or a joker")]
    IncompleteSubmission(PlayerName),

    /// A submitted value is outside the allowed range or not a number.
    #[error("invalid submission {value:?}: expected JOKER or an integer in {min}..={max}")]
    InvalidSubmissionValue { value: String, min: u8, max: u8 },

    /// A submission names somebody who is not an active player this round.
    #[error("{0} is not an active player this round")]
    UnknownPlayer(PlayerName),

    /// The player already spent their joker earlier in the game.
    #[error("{0} has already used their joker")]
    JokerAlreadyUsed(PlayerName),

    /// The operation is not allowed in the controller's current phase.
    #[error("{operation} is not allowed during {phase:?}")]
    WrongPhase { operation: &'static str, phase: Phase },
}
