//! Rule trait and the verdict a rule produces.
//!
//! Rules are evaluated in a fixed priority order. The first rule whose
//! guard matches and which produces a verdict decides the round; the rest
//! are never consulted.
//!
//! ## Implementation Notes
//!
//! - `evaluate` must be pure: same context, same verdict
//! - Return `None` to fall through to the next rule
//! - Winner and delta indices refer to `RoundContext::entries`

use smallvec::SmallVec;

use super::context::RoundContext;
use super::result::RuleKind;

/// A verdict: who won and how every entry's score moves.
#[derive(Clone, Debug, PartialEq)]
pub struct Verdict {
    pub rule: RuleKind,
    /// Entry indices of the winners.
    pub winners: SmallVec<[usize; 4]>,
    /// One delta per entry, aligned with `RoundContext::entries`.
    pub deltas: Vec<i32>,
    pub average: Option<f64>,
    pub target: Option<f64>,
    pub multiplier: Option<f64>,
}

impl Verdict {
    /// Empty verdict with no winners and all deltas zero.
    #[must_use]
    pub fn new(rule: RuleKind, entry_count: usize) -> Self {
        Self {
            rule,
            winners: SmallVec::new(),
            deltas: vec![0; entry_count],
            average: None,
            target: None,
            multiplier: None,
        }
    }

    #[must_use]
    pub fn with_winners(mut self, winners: impl IntoIterator<Item = usize>) -> Self {
        self.winners = winners.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_average(mut self, average: Option<f64>) -> Self {
        self.average = average;
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: f64, multiplier: Option<f64>) -> Self {
        self.target = Some(target);
        self.multiplier = multiplier;
        self
    }

    /// Subtract `points` from one entry.
    pub fn penalize(&mut self, idx: usize, points: i32) {
        self.deltas[idx] -= points;
    }

    /// Subtract `points` from every entry that is not a winner.
    pub fn penalize_losers(&mut self, points: i32) {
        for idx in 0..self.deltas.len() {
            if !self.winners.contains(&idx) {
                self.deltas[idx] -= points;
            }
        }
    }

    /// Subtract `points` from every entry.
    pub fn penalize_all(&mut self, points: i32) {
        for delta in &mut self.deltas {
            *delta -= points;
        }
    }

    #[must_use]
    pub fn total_delta(&self) -> i32 {
        self.deltas.iter().sum()
    }
}

/// A single guard-and-evaluate step in the resolution chain.
pub trait Rule: std::fmt::Debug {
    /// Stable name used in logs.
    fn name(&self) -> &'static str;

    /// Evaluate the rule against a round.
    ///
    /// Returns `None` when the guard does not match or the rule declines
    /// after inspection (falls through).
    fn evaluate(&self, ctx: &RoundContext<'_>) -> Option<Verdict>;
}
