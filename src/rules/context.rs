//! Round context: the precomputed view every rule evaluates against.
//!
//! Built once per resolution from validated entries. Rules read it and
//! return a `Verdict`; nothing in here is mutated after construction.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::core::{PlayerName, RuleConfig, Submission};

/// Precomputed facts about one round.
#[derive(Debug)]
pub struct RoundContext<'a> {
    /// Round number (starts at 1).
    pub round: u32,

    /// Active players and their submissions, in seat order.
    pub entries: &'a [(PlayerName, Submission)],

    /// Rule configuration.
    pub config: &'a RuleConfig,

    /// `(entry index, value)` for every numeric submission.
    numeric: SmallVec<[(usize, u8); 8]>,

    /// Arithmetic mean of the numeric submissions.
    mean: Option<f64>,
}

impl<'a> RoundContext<'a> {
    /// Build a context from validated entries.
    #[must_use]
    pub fn new(round: u32, entries: &'a [(PlayerName, Submission)], config: &'a RuleConfig) -> Self {
        let numeric: SmallVec<[(usize, u8); 8]> = entries
            .iter()
            .enumerate()
            .filter_map(|(idx, (_, s))| s.value().map(|v| (idx, v)))
            .collect();

        let mean = if numeric.is_empty() {
            None
        } else {
            let total: u32 = numeric.iter().map(|&(_, v)| u32::from(v)).sum();
            Some(f64::from(total) / numeric.len() as f64)
        };

        Self {
            round,
            entries,
            config,
            numeric,
            mean,
        }
    }

    /// Number of active players this round.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.entries.len()
    }

    /// Numeric submissions as `(entry index, value)`.
    #[must_use]
    pub fn numeric(&self) -> &[(usize, u8)] {
        &self.numeric
    }

    #[must_use]
    pub fn has_numeric(&self) -> bool {
        !self.numeric.is_empty()
    }

    /// Mean of numeric submissions, `None` when everyone played a joker.
    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        self.mean
    }

    /// Entry indices of joker submitters.
    pub fn jokers(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, (_, s))| s.is_joker())
            .map(|(idx, _)| idx)
    }

    /// Whether any numeric value was submitted by more than one player.
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        let mut seen = FxHashSet::default();
        self.numeric.iter().any(|&(_, v)| !seen.insert(v))
    }

    /// Whether endgame rules apply to this round's player count.
    #[must_use]
    pub fn is_endgame(&self) -> bool {
        self.config.is_endgame(self.active_count())
    }
}

/// Round half up to the nearest integer.
///
/// Inputs are means of values in `0..=100`, so they are never negative.
#[must_use]
pub fn round_half_up(value: f64) -> u32 {
    (value + 0.5).floor() as u32
}

/// Trial-division primality test.
#[must_use]
pub fn is_prime(n: u32) -> bool {
    if n <= 1 {
        return false;
    }
    let mut i = 2u32;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}
