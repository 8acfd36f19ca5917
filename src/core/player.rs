//! Player identification and per-player game record.
//!
//! ## PlayerId
//!
//! Seat index assigned in join order. Seats are never reused within a game;
//! `reset()` starts numbering again from zero.
//!
//! ## PlayerName
//!
//! Case-normalized display name (trimmed, upper-cased). Two names that
//! normalize to the same string are the same player.
//!
//! ## Player
//!
//! Score, alive flag and joker flag. The flags only ever move one way.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Seat identifier, 0-based in join order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Case-normalized player name.
///
/// ```
/// use beauty_contest::core::PlayerName;
///
/// let name = PlayerName::parse("  alice ").unwrap();
/// assert_eq!(name.as_str(), "ALICE");
/// assert!(PlayerName::parse("   ").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerName(String);

impl PlayerName {
    /// Normalize raw input into a player name.
    pub fn parse(raw: &str) -> Result<Self, GameError> {
        let normalized = raw.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(GameError::EmptyName);
        }
        Ok(Self(normalized))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PlayerName {
    type Error = GameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> Self {
        name.0
    }
}

impl AsRef<str> for PlayerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A seated player and everything the game tracks about them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: PlayerName,
    score: i32,
    alive: bool,
    joker_used: bool,
}

impl Player {
    /// Create a fresh player: score 0, alive, joker unused.
    #[must_use]
    pub fn new(id: PlayerId, name: PlayerName) -> Self {
        Self {
            id,
            name,
            score: 0,
            alive: true,
            joker_used: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &PlayerName {
        &self.name
    }

    #[must_use]
    pub fn score(&self) -> i32 {
        self.score
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[must_use]
    pub fn has_used_joker(&self) -> bool {
        self.joker_used
    }

    /// Apply a score delta from a resolved round.
    pub(crate) fn apply_delta(&mut self, delta: i32) {
        self.score += delta;
    }

    /// Spend the joker. Idempotent.
    pub(crate) fn mark_joker_used(&mut self) {
        self.joker_used = true;
    }

    /// Eliminate the player if their score is at or below `floor`.
    ///
    /// Returns true only on the call that performs the elimination.
    pub(crate) fn eliminate_at(&mut self, floor: i32) -> bool {
        if self.alive && self.score <= floor {
            self.alive = false;
            return true;
        }
        false
    }
}
