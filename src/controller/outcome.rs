//! Values the controller hands back to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::core::PlayerName;
use crate::rules::{RoundResult, RuleSet};

/// Controller lifecycle phase.
///
/// `Setup → InRound → Resolved → (InRound | GameOver)`; `reset()` returns to
/// `Setup` from anywhere.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Seating players.
    #[default]
    Setup,
    /// Collecting submissions.
    InRound,
    /// Round scored, waiting for `advance_round()`.
    Resolved,
    /// One or no players left.
    GameOver,
}

/// A round that has just started.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundStart {
    pub round: u32,
    /// Players who must submit this round, in seat order.
    pub active_players: Vec<PlayerName>,
    /// Rules in force for this round.
    pub rule_set: RuleSet,
}

/// A scored round: the result plus who it eliminated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundReport {
    pub result: RoundResult,
    /// Players eliminated by this round, in seat order.
    pub eliminated: Vec<PlayerName>,
}

/// What `advance_round()` led to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Advance {
    /// Another round has started.
    NextRound(RoundStart),
    /// The game is over. `winner` is `None` when the last players fell together.
    GameOver { winner: Option<PlayerName> },
}

impl Advance {
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self, Self::GameOver { .. })
    }
}
