//! Per-round submissions: a number in `0..=100` or the joker pass.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::GameError;
use super::player::PlayerName;

/// One player's entry for a round.
///
/// A joker never carries a number; the two cases are disjoint.
///
/// `Number` can be built directly with any `u8`; the resolver rejects values
/// above `MAX` before scoring. Deserialization checks the bound up front.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSubmission")]
pub enum Submission {
    Number(u8),
    Joker,
}

impl Submission {
    /// Smallest value a player may submit.
    pub const MIN: u8 = 0;
    /// Largest value a player may submit.
    pub const MAX: u8 = 100;

    /// Validate a numeric submission.
    pub fn number(value: i64) -> Result<Self, GameError> {
        match u8::try_from(value) {
            Ok(v) if v <= Self::MAX => Ok(Self::Number(v)),
            _ => Err(Self::invalid(value.to_string())),
        }
    }

    /// The numeric value, or `None` for a joker.
    #[must_use]
    pub fn value(self) -> Option<u8> {
        match self {
            Self::Number(v) => Some(v),
            Self::Joker => None,
        }
    }

    #[must_use]
    pub fn is_joker(self) -> bool {
        matches!(self, Self::Joker)
    }

    /// Check a submission built without going through `number`.
    pub fn validate(self) -> Result<Self, GameError> {
        match self {
            Self::Number(v) if v > Self::MAX => Err(Self::invalid(v.to_string())),
            other => Ok(other),
        }
    }

    fn invalid(value: String) -> GameError {
        GameError::InvalidSubmissionValue {
            value,
            min: Self::MIN,
            max: Self::MAX,
        }
    }
}

/// Unchecked wire form of `Submission`.
#[derive(Deserialize)]
enum RawSubmission {
    Number(u8),
    Joker,
}

impl TryFrom<RawSubmission> for Submission {
    type Error = GameError;

    fn try_from(raw: RawSubmission) -> Result<Self, Self::Error> {
        match raw {
            RawSubmission::Number(v) => Self::Number(v).validate(),
            RawSubmission::Joker => Ok(Self::Joker),
        }
    }
}

impl FromStr for Submission {
    type Err = GameError;

    /// Parse presentation input: `JOKER` (any case) or a base-10 integer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("joker") {
            return Ok(Self::Joker);
        }
        let value: i64 = trimmed.parse().map_err(|_| Self::invalid(trimmed.to_string()))?;
        Self::number(value)
    }
}

impl std::fmt::Display for Submission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::Joker => f.write_str("JOKER"),
        }
    }
}

/// Submissions collected for one round, keyed by player name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Submissions {
    entries: FxHashMap<PlayerName, Submission>,
}

impl Submissions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submission, replacing any earlier entry for the same player.
    pub fn insert(&mut self, name: PlayerName, submission: Submission) -> Option<Submission> {
        self.entries.insert(name, submission)
    }

    /// Record a submission from raw presentation input.
    pub fn submit(&mut self, name: &str, raw: &str) -> Result<(), GameError> {
        let name = PlayerName::parse(name)?;
        let submission = raw.parse()?;
        self.entries.insert(name, submission);
        Ok(())
    }

    /// Builder-style insert of a number, validated against the bounds.
    pub fn with_number(mut self, name: &str, value: i64) -> Result<Self, GameError> {
        self.entries.insert(PlayerName::parse(name)?, Submission::number(value)?);
        Ok(self)
    }

    /// Builder-style insert of a joker.
    pub fn with_joker(mut self, name: &str) -> Result<Self, GameError> {
        self.entries.insert(PlayerName::parse(name)?, Submission::Joker);
        Ok(self)
    }

    #[must_use]
    pub fn get(&self, name: &PlayerName) -> Option<Submission> {
        self.entries.get(name).copied()
    }

    pub fn remove(&mut self, name: &PlayerName) -> Option<Submission> {
        self.entries.remove(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&PlayerName, Submission)> {
        self.entries.iter().map(|(name, s)| (name, *s))
    }
}

impl FromIterator<(PlayerName, Submission)> for Submissions {
    fn from_iter<I: IntoIterator<Item = (PlayerName, Submission)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
