//! Round results handed to the controller and the presentation layer.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{PlayerName, Submission};

/// Which rule decided the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleKind {
    /// Four players, late game: a prime rounded mean was matched exactly.
    Revelation { target: u32 },
    /// Two players split 0 and 100; 100 wins.
    FinalDuel,
    /// Endgame: two or more players submitted the same number.
    DuplicateVote,
    /// Endgame: somebody hit the target exactly.
    ExactMatch,
    /// Default: closest to the target wins.
    ClosestToTarget,
}

impl RuleKind {
    /// Whether a special rule (anything but closest-to-target) fired.
    #[must_use]
    pub fn is_special(self) -> bool {
        !matches!(self, Self::ClosestToTarget)
    }

    /// Short stable label for logs.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Revelation { .. } => "revelation",
            Self::FinalDuel => "final-duel",
            Self::DuplicateVote => "duplicate-vote",
            Self::ExactMatch => "exact-match",
            Self::ClosestToTarget => "closest-to-target",
        }
    }

    /// Narrative shown when a special rule fires.
    #[must_use]
    pub fn message(self) -> Option<String> {
        match self {
            Self::Revelation { target } => {
                Some(format!("Revelation! The prime target {target} was matched exactly"))
            }
            Self::FinalDuel => Some("Special rule 0-100: 100 takes the duel".to_string()),
            Self::DuplicateVote => Some("Duplicate vote: every player is penalized".to_string()),
            Self::ExactMatch => Some("Exact match on the target: everyone else is penalized".to_string()),
            Self::ClosestToTarget => None,
        }
    }
}

/// A score change for one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDelta {
    pub player: PlayerName,
    pub delta: i32,
}

/// Outcome of one resolved round.
///
/// Holds everything needed to apply the round to the roster and to render it.
/// `deltas` lists only non-zero changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Round number.
    pub round: u32,

    /// The rule that decided the round.
    pub rule: RuleKind,

    /// Every active player's submission, in seat order.
    pub submissions: Vec<(PlayerName, Submission)>,

    /// Round winners. Empty when nobody won.
    pub winners: SmallVec<[PlayerName; 4]>,

    /// Mean of numeric submissions, when the rule used one.
    pub average: Option<f64>,

    /// Value submissions were judged against.
    pub target: Option<f64>,

    /// Ratio between `average` and `target`, when one was applied.
    pub multiplier: Option<f64>,

    /// Non-zero score changes.
    pub deltas: Vec<ScoreDelta>,

    /// Players who spent their joker this round.
    pub jokers_used: Vec<PlayerName>,

    /// Narrative for the special rule that fired, if any.
    pub message: Option<String>,
}

impl RoundResult {
    #[must_use]
    pub fn special_rule_message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn is_winner(&self, name: &PlayerName) -> bool {
        self.winners.contains(name)
    }

    /// Score change for a player (0 if unaffected).
    #[must_use]
    pub fn delta_for(&self, name: &PlayerName) -> i32 {
        self.deltas
            .iter()
            .find(|d| &d.player == name)
            .map_or(0, |d| d.delta)
    }

    /// Sum of all score changes.
    #[must_use]
    pub fn total_delta(&self) -> i32 {
        self.deltas.iter().map(|d| d.delta).sum()
    }

    #[must_use]
    pub fn submission_of(&self, name: &PlayerName) -> Option<Submission> {
        self.submissions
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| *s)
    }
}

impl std::fmt::Display for RoundResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Round {}: ", self.round)?;
        for (i, (name, submission)) in self.submissions.iter().enumerate() {
            if i > 0 {
                f.write_str(" / ")?;
            }
            write!(f, "{name}: {submission}")?;
        }

        if let Some(message) = self.special_rule_message() {
            write!(f, " | {message}")?;
        } else {
            match (self.average, self.target, self.multiplier) {
                (Some(avg), Some(target), Some(m)) => {
                    write!(f, " | average {avg:.3}, target (x{m}) {target:.3}")?;
                }
                _ => f.write_str(" | no target")?,
            }
        }

        if self.winners.is_empty() {
            f.write_str(" | no winner")
        } else {
            let names: Vec<&str> = self.winners.iter().map(PlayerName::as_str).collect();
            write!(f, " | winners: {}", names.join(", "))
        }
    }
}
